// src/main.rs
use anyhow::Result;
use autofm::{Args, run};
use clap::Parser;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let stats = run(&args)?;
    println!("Exported: {}", stats.exported);
    println!("Skipped: {}", stats.skipped);

    Ok(())
}
