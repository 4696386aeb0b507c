// src/cli.rs
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "autofm",
    author,
    version,
    about = "Add YAML front matter if absent and export publishable markdown files",
    long_about = None
)]
pub struct Args {
    /// Folder containing the markdown files (defaults to current directory)
    #[arg(short, long)]
    pub path: Option<PathBuf>,

    /// Ignore file with one glob pattern per line (defaults to ./.export-ignore)
    #[arg(long)]
    pub ignore: Option<PathBuf>,

    /// Default front matter YAML file (defaults to ./default_front_matter.yml)
    #[arg(long)]
    pub default_front_matter: Option<PathBuf>,

    /// Output folder (defaults to ./output)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
