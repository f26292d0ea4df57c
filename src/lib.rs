pub mod config;
pub mod error;
pub mod output;
pub mod process;
pub mod schema;

pub use config::{ConvertOptions, ConvertPaths, Variant};
pub use error::ConvertError;
pub use process::{convert_csv_to_json, ConversionSummary};
pub use schema::CelestialBody;

/// Initialise `tracing` for the binaries: `RUST_LOG` wins, otherwise `info`.
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .try_init();
}

/// Run one variant against its hard-coded paths and print the confirmation.
pub fn run_variant(variant: Variant) -> anyhow::Result<()> {
    let paths = variant.paths();
    tracing::info!(?variant, input = %paths.input.display(), "starting conversion");
    convert_csv_to_json(&paths.input, &paths.output, &variant.options())?;
    println!("{}", variant.success_message(&paths));
    Ok(())
}
