use log::{debug, error, info};
use unit_uniq::models::{AppError, Config};
use unit_uniq::services::{storage, uniq};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => Config::load_from_toml(&path),
        None => Config::load(),
    }
    .map_err(|e| {
        error!("failed to load configuration: {e}");
        e
    })?;

    debug!(
        "config loaded - input: {}, output: {}, fields: [{}]",
        config.input_path(),
        config.output_path(),
        config.field_names().join(", ")
    );

    if let Err(e) = run(&config) {
        error!("{e}");
        return Err(e.into());
    }

    Ok(())
}

fn run(config: &Config) -> Result<(), AppError> {
    let values = storage::load_values(config.input_path())?;
    let kept = uniq(&values, config.field_names()).map_err(|e| AppError(e.to_string()))?;

    info!(
        "kept {} of {} units from {}",
        kept.len(),
        values.len(),
        config.input_path()
    );

    storage::save_units(config.output_path(), &kept)
}
