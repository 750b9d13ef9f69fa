//! # Kultura Storefront Entry Point
//!
//! Hosts one single-threaded browsing session in the terminal.
//!
//! ## Usage
//! ```text
//! kultura [--config storefront.toml]
//!
//! > goto /category/perfume
//! > add perfume-002
//! > open
//! > key escape
//! > goto /checkout
//! ```
//!
//! The session ends on `quit` or end of input.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "kultura")]
#[command(author, version, about = "Bango Kultura storefront session")]
struct Cli {
    /// Path to storefront.toml (overrides KULTURA_CONFIG)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    kultura_storefront::init_tracing();

    let cli = Cli::parse();
    kultura_storefront::run(cli.config).await
}
