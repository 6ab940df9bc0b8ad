//! Terrain generator binary — runs the full pipeline and reports statistics.
//!
//! Usage: cargo run --release --bin generate_terrain -- [OPTIONS]
//!
//! Options:
//!   --size <CELLS>        Grid side length in cells (default: 64)
//!   --seed <SEED>         Noise seed; omit for a fresh random terrain
//!   --scale <SCALE>       Noise scale (default: 0.1)
//!   --water-depth <D>     Water surface depth below land (default: 0.2)
//!   --edge-depth <D>      Skirt drop below the surface (default: 0.2)
//!   --catalog <PATH>      Band catalog JSON (default: built-in water/sand/grass)

use glam::UVec2;
use rand::Rng;

use tidemesh::generation::{GenerationConfig, GenerationPipeline};
use tidemesh::terrain::band::BandCatalog;

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .format_timestamp_millis()
    .init();

    let args: Vec<String> = std::env::args().collect();
    let size = parse_u32_arg(&args, "--size").unwrap_or(64);
    let seed = parse_f32_arg(&args, "--seed")
        .unwrap_or_else(|| rand::thread_rng().gen_range(0.0..10000.0));
    let scale = parse_f32_arg(&args, "--scale").unwrap_or(0.1);
    let water_depth = parse_f32_arg(&args, "--water-depth").unwrap_or(0.2);
    let edge_depth = parse_f32_arg(&args, "--edge-depth").unwrap_or(0.2);

    let catalog = match parse_str_arg(&args, "--catalog") {
        Some(path) => {
            let json = std::fs::read_to_string(&path).expect("Failed to read catalog file");
            serde_json::from_str::<BandCatalog>(&json).expect("Invalid catalog file")
        }
        None => BandCatalog::default(),
    };

    println!("=== Tidemesh Terrain Generator ===");
    println!("Size:  {} x {} cells", size, size);
    println!("Seed:  {}", seed);
    println!("Scale: {}", scale);
    println!("Depth: water {}, edge {}", water_depth, edge_depth);
    println!("Bands: {}", catalog.len());
    println!();

    let config = GenerationConfig {
        seed,
        size: UVec2::new(size, size),
        noise_scale: scale,
        water_depth,
        edge_depth,
        catalog,
    };

    let pipeline = GenerationPipeline::new(config).expect("Invalid configuration");
    let artifacts = pipeline.generate().expect("Generation failed");

    let mut coverage = vec![0usize; pipeline.config().catalog.len()];
    for &cell in artifacts.band_map.cells() {
        coverage[cell as usize] += 1;
    }
    let cells = (size * size) as f64;

    println!("=== Generation Complete ===");
    for (i, count) in coverage.iter().enumerate() {
        println!(
            "Band {}: {} cells ({:.1}%)",
            i,
            count,
            *count as f64 / cells * 100.0
        );
    }
    println!(
        "Mesh:   {} vertices, {} triangles",
        artifacts.mesh.vertex_count(),
        artifacts.mesh.triangle_count()
    );
    println!("Atlas:  {} x 1 px", artifacts.atlas.width());

    let footprint = artifacts.footprint();
    println!(
        "Grid:   center ({}, {}), cell {} x {}",
        footprint.center.x, footprint.center.z, footprint.cell_size.x, footprint.cell_size.y
    );
    println!();
    println!("To reproduce this terrain:");
    println!("  cargo run --release --bin generate_terrain -- --size {} --seed {}", size, seed);
}

fn parse_f32_arg(args: &[String], flag: &str) -> Option<f32> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
}

fn parse_u32_arg(args: &[String], flag: &str) -> Option<u32> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
}

fn parse_str_arg(args: &[String], flag: &str) -> Option<String> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(|s| s.clone())
}
