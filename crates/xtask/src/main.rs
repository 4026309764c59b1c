use std::{
  fs,
  path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate_to};
use clap_mangen::Man;
use mkdoc::cli::Cli;

const BIN_NAME: &str = "mkdoc";

#[derive(Parser)]
#[command(author, version, about)]
struct Xtask {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Generate release artifacts for the mkdoc binary
  Dist {
    /// Directory the artifacts are written to.
    #[arg(short, long, default_value = "dist")]
    output_dir: PathBuf,

    /// Which artifacts to generate.
    #[arg(long, value_enum, default_value_t = Artifacts::All)]
    only: Artifacts,

    /// Shells to generate completions for. Defaults to all supported shells.
    #[arg(long, value_enum, value_delimiter = ',')]
    shells: Vec<Shell>,
  },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Artifacts {
  All,
  Completions,
  Manpage,
}

fn main() -> Result<()> {
  match Xtask::parse().command {
    Commands::Dist {
      output_dir,
      only,
      shells,
    } => {
      if only != Artifacts::Manpage {
        let shells = if shells.is_empty() {
          vec![Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell]
        } else {
          shells
        };
        generate_completions(&output_dir, &shells)?;
      }
      if only != Artifacts::Completions {
        generate_manpage(&output_dir)?;
      }
    },
  }

  Ok(())
}

fn generate_completions(output_dir: &Path, shells: &[Shell]) -> Result<()> {
  let completions_dir = output_dir.join("completions");
  fs::create_dir_all(&completions_dir).with_context(|| {
    format!("Failed to create {}", completions_dir.display())
  })?;

  let mut cmd = Cli::command();
  for shell in shells {
    let path = generate_to(*shell, &mut cmd, BIN_NAME, &completions_dir)
      .with_context(|| format!("Failed to generate {shell} completions"))?;
    println!("Wrote {}", path.display());
  }
  Ok(())
}

fn generate_manpage(output_dir: &Path) -> Result<()> {
  let man_dir = output_dir.join("man");
  fs::create_dir_all(&man_dir)
    .with_context(|| format!("Failed to create {}", man_dir.display()))?;

  let file_path = man_dir.join(format!("{BIN_NAME}.1"));
  let mut file = fs::File::create(&file_path).with_context(|| {
    format!("Failed to create manpage file at {}", file_path.display())
  })?;
  Man::new(Cli::command().name(BIN_NAME))
    .render(&mut file)
    .context("Failed to render manpage")?;
  println!("Wrote {}", file_path.display());
  Ok(())
}
