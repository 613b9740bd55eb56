use anyhow::Result;
use assets::Options;
use clap::Parser;
use std::path::PathBuf;

/// Generate favicon and PWA icon assets from a single logo image.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Source logo image.
    #[arg(default_value = "muntadis_logo.png")]
    input: PathBuf,

    /// Directory the assets are written into (created if absent).
    #[arg(short, long, default_value = "public")]
    output: PathBuf,

    /// RGB distance from the top-left pixel's color above which a pixel
    /// counts as logo content.
    #[arg(long, default_value_t = 30.0)]
    threshold: f64,

    /// Fraction of the cropped logo's height kept as the icon symbol.
    #[arg(long, default_value_t = 0.7)]
    symbol_ratio: f64,
}

fn main() -> Result<()> {
    let args = Args::parse();
    println!("Processing {}...", args.input.display());

    // Deliberately not a failure exit: a missing source logo is reported on
    // stdout and nothing is written, matching the original tool.
    if !args.input.exists() {
        println!(
            "Error: Could not find {}. Please make sure it is in this directory.",
            args.input.display()
        );
        return Ok(());
    }

    let opts = Options { threshold: args.threshold, symbol_ratio: args.symbol_ratio };
    let written = assets::generate(&args.input, &args.output, &opts)?;
    for path in &written {
        println!("  Created: {}", path.display());
    }

    println!("\nSuccess! All assets have been generated in {}/", args.output.display());
    Ok(())
}
