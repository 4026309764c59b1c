use color_eyre::eyre::{Context, Result};
use mkdoc::{cli::Cli, config::Config};

fn main() -> Result<()> {
  color_eyre::install()?;

  let cli = Cli::parse_args();
  let config = Config::load(&cli).wrap_err("Failed to load configuration")?;

  // Initialize logging before the conversion so every stage can report
  env_logger::Builder::new()
    .filter_level(config.log_level)
    .write_style(env_logger::WriteStyle::Auto)
    .init();

  mkdoc::run(&config).wrap_err_with(|| {
    format!(
      "Failed to convert {} to {}",
      config.input.display(),
      config.output.display()
    )
  })
}
