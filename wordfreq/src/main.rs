// src/main.rs
use anyhow::Result;
use clap::Parser;

use wordfreq::Args;
use wordfreq::cli;

fn main() -> Result<()> {
    let args = Args::parse();
    cli::run(args)
}
