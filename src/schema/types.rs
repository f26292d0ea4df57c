// src/schema/types.rs

use serde::{Deserialize, Serialize};

/// One celestial body as it appears in the output array.
///
/// Field order here is the serialized field order.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct CelestialBody {
    pub name: String,
    pub satellites: i64,
    pub radius_km: f64,
    pub semi_major_axis_au: f64,
    pub eccentricity: f64,
    pub inclination_deg: f64,
    pub argument_of_periapsis_deg: f64,
    pub longitude_of_ascending_node_deg: f64,
    pub mean_anomaly_deg: f64,
    pub density_g_cm3: f64,
    #[serde(rename = "type")]
    pub body_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::COLUMNS;

    #[test]
    fn serialized_keys_follow_column_order() -> anyhow::Result<()> {
        let body = CelestialBody {
            name: "Mars".into(),
            satellites: 2,
            radius_km: 3389.5,
            semi_major_axis_au: 1.524,
            eccentricity: 0.0934,
            inclination_deg: 1.85,
            argument_of_periapsis_deg: 286.5,
            longitude_of_ascending_node_deg: 49.558,
            mean_anomaly_deg: 19.373,
            density_g_cm3: 3.933,
            body_type: "Terrestrial".into(),
        };

        let value = serde_json::to_value(&body)?;
        let keys: Vec<&str> = value
            .as_object()
            .expect("record serializes as an object")
            .keys()
            .map(String::as_str)
            .collect();

        // serde_json::Map is sorted unless preserve_order is on, so compare as sets
        let mut expected: Vec<&str> = COLUMNS.to_vec();
        expected.sort_unstable();
        let mut got = keys.clone();
        got.sort_unstable();
        assert_eq!(got, expected);

        // the raw text carries the declared order
        let text = serde_json::to_string(&body)?;
        let positions: Vec<usize> = COLUMNS
            .iter()
            .map(|c| text.find(&format!("\"{}\":", c)).expect("key present"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        Ok(())
    }
}
