//! Headless SHR conversion example - decode a raw dump and save it as a PNG.
//!
//! Usage:
//!   cargo run --example shr_to_png -- ANGELFISH.SHR [out.png]
//!
//! This example demonstrates the two external contracts of the decoder:
//! raw file bytes in, an RGBA buffer out, handed to an imaging API. File
//! loading and image construction stay out here in the shell; the decoder
//! itself only ever sees bytes.

use shr_decoder::{decode, PixelBuffer};
use std::env;
use std::fs;
use std::path::PathBuf;
use tracing::info;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <input.shr> [output.png]", args[0]);
        eprintln!("Example: {} ANGELFISH.SHR", args[0]);
        std::process::exit(1);
    }

    let input = PathBuf::from(&args[1]);
    let output = match args.get(2) {
        Some(path) => PathBuf::from(path),
        None => input.with_extension("png"),
    };

    let raw = fs::read(&input)?;
    info!("read {} bytes from {}", raw.len(), input.display());

    let frame = decode(&raw)?;
    let (width, height) = frame.dimensions();

    image::save_buffer(
        &output,
        frame.data(),
        width,
        height,
        image::ColorType::Rgba8,
    )?;
    info!("wrote {}x{} PNG to {}", width, height, output.display());

    Ok(())
}
