use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tempfile::NamedTempFile;

use id_lighting::generate_colormap;
use id_lump_format::{colormap_to_bytes, parse_palette, COLORMAP_NUM_LEVELS};

/// Generates a lighting colormap lump from a raw 256-color palette lump.
#[derive(Parser)]
#[command(version, long_about = None)]
struct Cli {
    /// Path to the input palette lump (768 bytes, 256 RGB triples).
    palette: PathBuf,

    /// Where to write the generated colormap lump.
    #[arg(short, long, default_value = "colormap.lmp")]
    output: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let bytes = fs::read(&cli.palette)
        .with_context(|| format!("Failed to read palette lump {}", cli.palette.display()))?;
    let palette = parse_palette(&bytes)
        .with_context(|| format!("Invalid palette lump {}", cli.palette.display()))?;
    println!("Read {} ({} bytes).", cli.palette.display(), bytes.len());

    let start = Instant::now();
    let colormap = generate_colormap(&palette);
    println!(
        "Generated {} light levels in {:?}.",
        COLORMAP_NUM_LEVELS,
        start.elapsed()
    );

    let out_bytes = colormap_to_bytes(&colormap);
    write_lump(&cli.output, &out_bytes)?;
    println!("Wrote {} ({} bytes).", cli.output.display(), out_bytes.len());

    Ok(())
}

/// Writes through a temp file in the destination directory, so a failed
/// write never leaves a partial lump at the output path.
fn write_lump(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create a temp file in {}", dir.display()))?;
    tmp.write_all(bytes)
        .with_context(|| format!("Failed to write colormap lump {}", path.display()))?;
    tmp.persist(path)
        .with_context(|| format!("Failed to write colormap lump {}", path.display()))?;

    Ok(())
}
