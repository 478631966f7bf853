use anyhow::{Context, Result};

use fake_admission_review::{cli, config::Config, scaffold, tracing::setup_tracing};

fn main() -> Result<()> {
    let matches = cli::build_cli().get_matches();
    let config = Config::from_args(&matches)?;

    setup_tracing(&config.log_level, &config.log_fmt, config.log_no_color)?;

    let output = scaffold::run(&config).context("failed to create admission review")?;
    println!("{output}");

    Ok(())
}
