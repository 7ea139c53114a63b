//! Terrascape CLI - scrollable Perlin terrain generator.
//!
//! Generate terrain heightfields from layered Perlin noise and export them
//! as 16-bit PNG heightmaps.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;

use terrascape::export::{export_heightfield_png, PngExportOptions};
use terrascape::noise::{height_at, sample, TerrainProfile};
use terrascape::terrain::HeightField;

/// Scrollable Perlin terrain generator.
#[derive(Parser)]
#[command(name = "terrascape")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a terrain heightfield and export it as a PNG heightmap.
    Generate {
        /// Grid side length in vertices (e.g. 256, 512, 1024).
        #[arg(short, long, default_value = "512")]
        size: u32,

        /// World-space x offset of the grid origin (camera scroll).
        #[arg(short, long, default_value = "0.0")]
        x_offset: f32,

        /// World-space z offset of the grid origin (camera scroll).
        #[arg(short, long, default_value = "0.0")]
        z_offset: f32,

        /// Output directory for generated files.
        #[arg(short, long, default_value = "./output")]
        output: PathBuf,

        /// Base name for output files.
        #[arg(short, long, default_value = "terrain")]
        name: String,

        /// Exponent applied to the octave sum (peak sharpening).
        #[arg(long, default_value = "1.2")]
        exponent: f32,

        /// Vertical offset subtracted from the terrain.
        #[arg(long, default_value = "140.0")]
        vertical_offset: f32,
    },

    /// Print the noise and terrain height values at one coordinate.
    Sample {
        /// World-space x coordinate.
        x: f32,

        /// World-space z coordinate.
        z: f32,
    },

    /// Display grid statistics for a heightfield configuration.
    Info {
        /// Grid side length in vertices.
        #[arg(short, long, default_value = "512")]
        size: u32,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            size,
            x_offset,
            z_offset,
            output,
            name,
            exponent,
            vertical_offset,
        } => {
            run_generate(size, x_offset, z_offset, output, name, exponent, vertical_offset);
        }
        Commands::Sample { x, z } => {
            run_sample(x, z);
        }
        Commands::Info { size } => {
            run_info(size);
        }
    }
}

fn run_generate(
    size: u32,
    x_offset: f32,
    z_offset: f32,
    output: PathBuf,
    name: String,
    exponent: f32,
    vertical_offset: f32,
) {
    // Validate parameters
    if size < 2 || size > 8192 {
        eprintln!("Error: Size must be between 2 and 8192");
        std::process::exit(1);
    }

    if !x_offset.is_finite() || !z_offset.is_finite() {
        eprintln!("Error: Offsets must be finite");
        std::process::exit(1);
    }

    if !exponent.is_finite() || exponent <= 0.0 {
        eprintln!("Error: Exponent must be positive and finite");
        std::process::exit(1);
    }

    println!("Terrascape - Perlin Terrain Generator");
    println!("=====================================");
    println!("Grid: {}x{} vertices", size, size);
    println!("Origin: ({}, {})", x_offset, z_offset);
    println!("Output: {}", output.display());

    let start = Instant::now();

    let profile = TerrainProfile {
        exponent,
        vertical_offset,
        ..Default::default()
    };

    println!("\nGenerating heightfield...");
    let mut field = HeightField::new(size);
    field.scroll(x_offset, z_offset);
    field.refresh(&profile);

    let gen_time = start.elapsed();
    println!("Generation completed in {:.2?}", gen_time);

    let (min_h, max_h) = field.height_range();
    println!("Height range: [{:.4}, {:.4}]", min_h, max_h);

    println!("\nExporting heightmap...");
    let export_start = Instant::now();

    std::fs::create_dir_all(&output).unwrap_or_else(|e| {
        eprintln!("Error creating output directory: {}", e);
        std::process::exit(1);
    });

    let path = output.join(format!("{}.png", name));
    let options = PngExportOptions::auto_range(&field);
    export_heightfield_png(&field, &path, &options).unwrap_or_else(|e| {
        eprintln!("Error exporting PNG: {}", e);
        std::process::exit(1);
    });

    println!("  Exported: {}", path.display());
    println!("Export completed in {:.2?}", export_start.elapsed());
}

fn run_sample(x: f32, z: f32) {
    if !x.is_finite() || !z.is_finite() {
        eprintln!("Error: Coordinates must be finite");
        std::process::exit(1);
    }

    println!("sample({}, {}) = {}", x, z, sample(x, z));
    println!("height_at({}, {}) = {}", x, z, height_at(x, z));
}

fn run_info(size: u32) {
    let vertices = (size as u64) * (size as u64);
    // Two triangles per grid square, as a renderer would index it.
    let triangles = if size > 1 {
        2 * ((size - 1) as u64) * ((size - 1) as u64)
    } else {
        0
    };
    let height_bytes = vertices * std::mem::size_of::<f32>() as u64;

    println!("Heightfield configuration");
    println!("=========================");
    println!("Grid: {}x{} vertices", size, size);
    println!("Vertices: {}", vertices);
    println!("Triangles: {}", triangles);
    println!("Height data: {:.2} MiB", height_bytes as f64 / (1024.0 * 1024.0));
    println!("Lattice period: 256 units (fixed permutation table)");
}
