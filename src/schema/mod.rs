pub mod types;

pub use types::CelestialBody;

/// Column names every source table must provide, in output field order.
pub const COLUMNS: [&str; 11] = [
    "name",
    "satellites",
    "radius_km",
    "semi_major_axis_au",
    "eccentricity",
    "inclination_deg",
    "argument_of_periapsis_deg",
    "longitude_of_ascending_node_deg",
    "mean_anomaly_deg",
    "density_g_cm3",
    "type",
];
