// src/output.rs
use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::{fs, path::Path};

use crate::schema::CelestialBody;

const INDENT: &[u8] = b"    ";

/// Render `bodies` as a JSON array indented by four spaces.
pub fn to_json_string(bodies: &[CelestialBody]) -> Result<String> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    bodies
        .serialize(&mut ser)
        .context("serializing celestial bodies to JSON")?;
    String::from_utf8(buf).context("serialized JSON was not UTF-8")
}

/// Write `bodies` to `path` in one go, replacing whatever was there.
pub fn write_json<P: AsRef<Path>>(path: P, bodies: &[CelestialBody]) -> Result<()> {
    let path = path.as_ref();
    let json = to_json_string(bodies)?;
    fs::write(path, json).with_context(|| format!("writing JSON to {:?}", path))?;
    Ok(())
}
