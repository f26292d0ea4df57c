use anyhow::Result;
use celestial_json::{init_logging, run_variant, Variant};

fn main() -> Result<()> {
    init_logging();
    run_variant(Variant::Cleaned)
}
