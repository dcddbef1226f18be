//! Mesh Extraction Demo
//!
//! This example walks the full volmesh pipeline on a synthetic stack:
//! 1. Build an RGB image stack (a red ball and a green torus)
//! 2. Configure the sampler (optionally from a TOML file)
//! 3. Extract sequentially, in parallel and with an occupancy schedule
//! 4. Print mesh statistics
//! 5. Export to OBJ
//! 6. Swap the pixel data to disk and restore it
//!
//! # Usage
//!
//! ```bash
//! cargo run --release --bin mesh_extraction -- output/volume.obj [config.toml] [size]
//! RUST_LOG=debug cargo run --release --bin mesh_extraction
//! ```

use std::env;
use std::fs::File;
use std::io::BufWriter;
use std::process;

use instant::Instant;

use volmesh::{
    ExtractionOptions, GridDims, ImageStack, IsosurfaceExtractor, MeshStats, Point3, ScanMode,
    TriangleSoup, VolmeshConfig, Volume,
};

/// Red ball on the left, green torus on the right, dim blue background.
fn build_stack(n: u32) -> ImageStack {
    let s = n as f32;
    let ball = Point3::new(s * 0.3, s * 0.5, s * 0.5);
    let torus = Point3::new(s * 0.68, s * 0.5, s * 0.5);
    let (major, minor) = (s * 0.18, s * 0.07);

    let result = ImageStack::rgb_from_fn(GridDims::new(n, n, n), |x, y, z| {
        let p = Point3::new(x as f32, y as f32, z as f32);
        let red = if (p - ball).length() < s * 0.2 { 240 } else { 0 };

        let q = p - torus;
        let ring = ((q.x * q.x + q.y * q.y).sqrt() - major).hypot(q.z);
        let green = if ring < minor { 200 } else { 0 };

        [red, green, 12]
    });

    match result {
        Ok(stack) => stack,
        Err(e) => {
            eprintln!("Error building image stack: {}", e);
            process::exit(1);
        }
    }
}

fn print_step(title: &str) {
    println!("┌─────────────────────────────────────────────────────────────┐");
    println!("│ {:<60}│", title);
    println!("└─────────────────────────────────────────────────────────────┘");
}

fn print_run(label: &str, soup: &TriangleSoup, secs: f64) {
    println!("  [{}]", label);
    println!("    Triangles:     {}", soup.len());
    println!("    Time:          {:.3}s", secs);
    if secs > 0.0 {
        println!("    Throughput:    {:.0} triangles/sec", soup.len() as f64 / secs);
    }
    println!();
}

fn main() {
    env_logger::init();

    println!("═══════════════════════════════════════════════════════════════");
    println!("          volmesh Mesh Extraction Demo");
    println!("═══════════════════════════════════════════════════════════════");
    println!();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    let output_path = args
        .get(1)
        .cloned()
        .unwrap_or_else(|| "output/volume.obj".to_string());
    let config_path = args.get(2).filter(|a| a.as_str() != "-").cloned();
    let size: u32 = args.get(3).and_then(|a| a.parse().ok()).unwrap_or(96);

    if args.len() < 2 {
        println!("Usage: {} <output.obj> [config.toml|-] [size]", args[0]);
        println!();
        println!("Using default: {}³ synthetic stack → {}", size, output_path);
        println!();
    }

    // =========================================================================
    // Step 1: Build the image stack
    // =========================================================================
    print_step("Step 1: Build Image Stack");

    let start = Instant::now();
    let stack = build_stack(size);
    let build_time = start.elapsed();

    println!("  Dimensions:      {}³ ({} voxels)", size, stack.dims().voxel_count());
    println!("  Pixel format:    {:?}", stack.kind());
    println!("  Memory:          {:.2} MB", stack.byte_len() as f64 / 1_000_000.0);
    println!("  Build time:      {:.3}s", build_time.as_secs_f64());
    println!();

    // =========================================================================
    // Step 2: Configure the sampler
    // =========================================================================
    print_step("Step 2: Configure Sampler");

    let config = match &config_path {
        Some(path) => match VolmeshConfig::load(path) {
            Ok(config) => {
                println!("  Config file:     {}", path);
                config
            }
            Err(e) => {
                eprintln!("Error loading config: {}", e);
                process::exit(1);
            }
        },
        None => {
            let mut config = VolmeshConfig::default();
            config.volume.average = true;
            config.extraction.isovalue = 30.0;
            config
        }
    };

    let mut volume = Volume::new(stack);
    if let Err(e) = config.volume.apply(&mut volume) {
        eprintln!("Error applying volume config: {}", e);
        process::exit(1);
    }

    println!("  Channels:        {:?}", volume.channels());
    println!("  Data type:       {:?}", volume.data_type());
    println!("  Loader:          {:?}", volume.loader());
    println!("  Isovalue:        {}", config.extraction.isovalue);
    println!("  Scan mode:       {:?}", config.extraction.scan);
    println!();

    // =========================================================================
    // Step 3: Extraction
    // =========================================================================
    print_step("Step 3: Mesh Extraction");
    println!();

    let mut sequential_config = config.extraction.clone();
    sequential_config.parallel = false;
    sequential_config.scan = ScanMode::Full;

    let start = Instant::now();
    let soup_seq = match sequential_config.run(&volume) {
        Ok(soup) => soup,
        Err(e) => {
            eprintln!("Error during sequential extraction: {}", e);
            process::exit(1);
        }
    };
    let seq_time = start.elapsed().as_secs_f64();
    print_run("Sequential Extraction", &soup_seq, seq_time);

    let slices = volume.dims().depth as usize + 2;
    let mut extractor = IsosurfaceExtractor::with_options(ExtractionOptions {
        parallel: true,
        ..config.extraction.options()
    })
    .with_progress(move |done, total| {
        let step = (total / 10).max(1);
        if done % step == 0 || done == total {
            print!("  Progress: {}%\r", done * 100 / total);
        }
    });

    let mut parallel_config = config.extraction.clone();
    parallel_config.scan = ScanMode::Full;
    let start = Instant::now();
    let soup_par = match parallel_config.extract_with(&mut extractor, &volume) {
        Ok(soup) => soup,
        Err(e) => {
            eprintln!("\nError during parallel extraction: {}", e);
            process::exit(1);
        }
    };
    let par_time = start.elapsed().as_secs_f64();
    println!("  Progress: 100% ({} slices)       ", slices);
    print_run("Parallel Extraction", &soup_par, par_time);
    if seq_time > 0.0 && par_time > 0.0 {
        println!("    Speedup:       {:.2}x", seq_time / par_time);
        println!();
    }

    let mut occupied_config = config.extraction.clone();
    occupied_config.scan = ScanMode::Occupied;
    let start = Instant::now();
    let soup_occ = match occupied_config.run(&volume) {
        Ok(soup) => soup,
        Err(e) => {
            eprintln!("Error during scheduled extraction: {}", e);
            process::exit(1);
        }
    };
    let occ_time = start.elapsed().as_secs_f64();
    print_run("Occupancy-Scheduled Extraction", &soup_occ, occ_time);

    let identical = soup_seq == soup_par && soup_par == soup_occ;
    println!("  Outputs identical: {}", if identical { "yes" } else { "NO" });
    if let Some(stats) = extractor.last_stats() {
        println!("  Cells visited:     {} in {} slices", stats.cells_visited, stats.slices);
    }
    println!();

    // =========================================================================
    // Step 4: Mesh Statistics
    // =========================================================================
    print_step("Step 4: Mesh Statistics");

    let stats: MeshStats = soup_par.stats();
    println!("  Triangle count:  {}", stats.triangle_count);
    println!("  Vertex count:    {}", stats.vertex_count);
    println!("  Surface area:    {:.4}", stats.surface_area);
    println!(
        "  Bounding box:    ({:.2}, {:.2}, {:.2}) → ({:.2}, {:.2}, {:.2})",
        stats.bbox_min.x, stats.bbox_min.y, stats.bbox_min.z,
        stats.bbox_max.x, stats.bbox_max.y, stats.bbox_max.z
    );
    println!();

    // =========================================================================
    // Step 5: Export to OBJ
    // =========================================================================
    print_step("Step 5: Export to OBJ");

    if let Some(parent) = std::path::Path::new(&output_path).parent() {
        if !parent.as_os_str().is_empty() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                eprintln!("Error creating output directory: {}", e);
                process::exit(1);
            }
        }
    }

    let start = Instant::now();
    let written = File::create(&output_path)
        .map_err(volmesh::VolumeError::from)
        .and_then(|file| soup_par.write_obj(&mut BufWriter::new(file)));
    if let Err(e) = written {
        eprintln!("Error writing output file: {}", e);
        process::exit(1);
    }
    let write_time = start.elapsed();

    let file_size = std::fs::metadata(&output_path).map(|m| m.len()).unwrap_or(0);
    println!("  Output file:     {}", output_path);
    println!(
        "  File size:       {} bytes ({:.2} MB)",
        file_size,
        file_size as f64 / 1_000_000.0
    );
    println!("  Write time:      {:.3}s", write_time.as_secs_f64());
    println!();

    // =========================================================================
    // Step 6: Swap to disk and restore
    // =========================================================================
    print_step("Step 6: Swap and Restore");

    let swap_path = env::temp_dir().join(format!("volmesh_demo_{}.swap", process::id()));
    let start = Instant::now();
    if let Err(e) = volume.swap_out(&swap_path) {
        eprintln!("Error swapping volume out: {}", e);
        process::exit(1);
    }
    let swap_time = start.elapsed();
    println!("  Swapped out:     {} ({:.3}s)", swap_path.display(), swap_time.as_secs_f64());
    println!("  Available:       {}", volume.is_available());

    let start = Instant::now();
    let restored = volume.restore(&swap_path);
    let _ = std::fs::remove_file(&swap_path);
    if let Err(e) = restored {
        eprintln!("Error restoring volume: {}", e);
        process::exit(1);
    }
    println!("  Restored:        {:.3}s", start.elapsed().as_secs_f64());
    println!("  Available:       {}", volume.is_available());
    println!();

    // =========================================================================
    // Summary
    // =========================================================================
    println!("═══════════════════════════════════════════════════════════════");
    println!("                        SUMMARY");
    println!("═══════════════════════════════════════════════════════════════");
    println!();
    println!("  Input → Output Pipeline:");
    println!(
        "    {}³ voxels → {} triangles → {}",
        size,
        soup_par.len(),
        output_path
    );
    println!();
    println!("  Extraction comparison:");
    println!("    Sequential:    {:.3}s", seq_time);
    println!("    Parallel:      {:.3}s", par_time);
    println!("    Scheduled:     {:.3}s", occ_time);
    println!();
    println!("═══════════════════════════════════════════════════════════════");
}
