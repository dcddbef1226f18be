//! Benchmark Suite for volmesh
//!
//! This benchmark measures the performance characteristics that matter for image stacks:
//!
//! 1. **Sampling**: Per-voxel reads through each loader
//! 2. **Extraction**: Sequential, parallel and dedicated-pool scans
//! 3. **Sparse scans**: Occupancy schedule construction and scheduled extraction
//! 4. **Swap I/O**: Writing the pixel data to disk and reading it back
//!
//! # Usage
//!
//! ```bash
//! cargo run --release --bin benchmark_suite
//! cargo run --release --bin benchmark_suite -- --large  # Run with a larger stack
//! ```

use std::env;
use std::io::Cursor;

use instant::Instant;

use volmesh::{
    read_stack, write_stack, Calibration, ExtractionOptions, GridDims, ImageStack,
    IsosurfaceExtractor, Point3, ScanSchedule, TriangleSoup, Volume,
};

/// Benchmark configuration
struct BenchConfig {
    /// Stack side length in voxels
    size: u32,
    /// Fraction of the stack occupied by blobs
    fill: f32,
    /// Number of iterations for timing
    iterations: usize,
}

impl BenchConfig {
    fn small() -> Self {
        Self {
            size: 64,
            fill: 0.15,
            iterations: 10,
        }
    }

    fn large() -> Self {
        Self {
            size: 160,
            fill: 0.15,
            iterations: 3,
        }
    }

    fn dims(&self) -> GridDims {
        GridDims::new(self.size, self.size, self.size)
    }

    fn cells(&self) -> usize {
        let n = self.size as usize + 2;
        n * n * n
    }
}

/// Simple deterministic pseudo-random number generator
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        self.state
    }

    fn next_f32(&mut self) -> f32 {
        (self.next_u64() as f32) / (u64::MAX as f32)
    }
}

/// RGB stack scattered with soft blobs, one color channel per blob.
fn create_test_stack(config: &BenchConfig, rng: &mut SimpleRng) -> ImageStack {
    let s = config.size as f32;
    let radius = s * 0.08;
    let count = ((config.fill * s * s * s) / (4.2 * radius * radius * radius)).max(1.0) as usize;

    let blobs: Vec<(Point3, usize)> = (0..count)
        .map(|i| {
            let c = Point3::new(rng.next_f32() * s, rng.next_f32() * s, rng.next_f32() * s);
            (c, i % 3)
        })
        .collect();

    let result = ImageStack::rgb_from_fn(config.dims(), |x, y, z| {
        let p = Point3::new(x as f32, y as f32, z as f32);
        let mut rgb = [0u8; 3];
        for &(c, channel) in &blobs {
            let d = (p - c).length();
            if d < radius + 2.0 {
                let v = (255.0 * (1.0 - ((d - radius) / 2.0).clamp(0.0, 1.0))) as u8;
                rgb[channel] = rgb[channel].max(v);
            }
        }
        rgb
    });

    match result {
        Ok(stack) => stack,
        Err(e) => {
            eprintln!("Error creating test stack: {}", e);
            std::process::exit(1);
        }
    }
}

fn benchmark_sampling(volume: &Volume, iterations: usize) -> (f64, f64) {
    let dims = volume.dims();
    let mut total_time = 0.0;
    let mut checksum = 0u64;

    for _ in 0..iterations {
        let start = Instant::now();
        for z in 0..dims.depth as i32 {
            for y in 0..dims.height as i32 {
                for x in 0..dims.width as i32 {
                    checksum = checksum.wrapping_add(volume.intensity(x, y, z) as u64);
                }
            }
        }
        total_time += start.elapsed().as_secs_f64();
    }
    std::hint::black_box(checksum);

    let avg_time = total_time / iterations as f64;
    let per_voxel_ns = (avg_time * 1e9) / dims.voxel_count() as f64;

    (avg_time, per_voxel_ns)
}

fn benchmark_extraction(
    volume: &Volume,
    options: ExtractionOptions,
    iterations: usize,
) -> (f64, TriangleSoup) {
    let mut extractor = IsosurfaceExtractor::with_options(options);
    let mut total_time = 0.0;
    let mut soup = TriangleSoup::default();

    for _ in 0..iterations {
        let start = Instant::now();
        soup = match extractor.extract_volume(volume, 127.0) {
            Ok(soup) => soup,
            Err(e) => {
                eprintln!("Error during extraction: {}", e);
                std::process::exit(1);
            }
        };
        total_time += start.elapsed().as_secs_f64();
    }

    (total_time / iterations as f64, soup)
}

fn benchmark_schedule(volume: &Volume, iterations: usize) -> (f64, ScanSchedule) {
    let mut total_time = 0.0;
    let mut schedule = ScanSchedule::from_occupancy(volume, 127.0);

    for _ in 0..iterations {
        let start = Instant::now();
        schedule = ScanSchedule::from_occupancy(volume, 127.0);
        total_time += start.elapsed().as_secs_f64();
    }

    (total_time / iterations as f64, schedule)
}

fn benchmark_scheduled_extraction(
    volume: &Volume,
    schedule: &ScanSchedule,
    iterations: usize,
) -> (f64, usize) {
    let mut extractor = IsosurfaceExtractor::new();
    let calibration = Calibration::unit();
    let mut total_time = 0.0;
    let mut triangles = 0;

    for _ in 0..iterations {
        let start = Instant::now();
        triangles = match extractor.extract_scheduled(volume, &calibration, 127.0, schedule) {
            Ok(soup) => soup.len(),
            Err(e) => {
                eprintln!("Error during scheduled extraction: {}", e);
                std::process::exit(1);
            }
        };
        total_time += start.elapsed().as_secs_f64();
    }

    (total_time / iterations as f64, triangles)
}

fn benchmark_swap_io(stack: &ImageStack) -> (f64, f64, usize) {
    let start = Instant::now();
    let mut buffer = Vec::new();
    if let Err(e) = write_stack(stack, &mut buffer) {
        eprintln!("Error writing stack: {}", e);
        std::process::exit(1);
    }
    let write_time = start.elapsed().as_secs_f64();

    let file_size = buffer.len();

    let start = Instant::now();
    if let Err(e) = read_stack(&mut Cursor::new(&buffer)) {
        eprintln!("Error reading stack: {}", e);
        std::process::exit(1);
    }
    let read_time = start.elapsed().as_secs_f64();

    (write_time, read_time, file_size)
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let config = if args.iter().any(|a| a == "--large") {
        println!("Running LARGE benchmark configuration...");
        BenchConfig::large()
    } else {
        println!("Running SMALL benchmark configuration (use --large for bigger dataset)");
        BenchConfig::small()
    };

    println!();
    println!("═══════════════════════════════════════════════════════════════");
    println!("              volmesh Benchmark Suite");
    println!("═══════════════════════════════════════════════════════════════");
    println!();

    // Configuration
    println!("┌─────────────────────────────────────────────────────────────┐");
    println!("│ Configuration                                               │");
    println!("└─────────────────────────────────────────────────────────────┘");
    println!("  Stack size:        {}³ voxels", config.size);
    println!("  Padded cells:      {}", config.cells());
    println!("  Blob fill:         {:.0}%", config.fill * 100.0);
    println!("  Iterations:        {}", config.iterations);
    println!("  Worker threads:    {}", available_threads());
    println!();

    // Create stack
    println!("Creating test stack...");
    let mut rng = SimpleRng::new(12345);
    let start = Instant::now();
    let stack = create_test_stack(&config, &mut rng);
    println!("  Created {:?} stack in {:.3}s", stack.kind(), start.elapsed().as_secs_f64());
    println!();

    // =========================================================================
    // Sampling Benchmarks
    // =========================================================================
    println!("┌─────────────────────────────────────────────────────────────┐");
    println!("│ Sampling Benchmarks                                         │");
    println!("└─────────────────────────────────────────────────────────────┘");

    let composited = Volume::new(stack.clone());
    let mut saturated = Volume::new(stack.clone());
    saturated.set_saturated_rendering(true);
    let mut averaged = Volume::new(stack.clone());
    averaged.set_average(true);
    let plain = match Volume::with_channels(stack.clone(), &[true, false, false]) {
        Ok(volume) => volume,
        Err(e) => {
            eprintln!("Error selecting channel: {}", e);
            std::process::exit(1);
        }
    };

    for (label, volume) in [
        ("Plain (red)", &plain),
        ("Composited", &composited),
        ("Saturated", &saturated),
        ("Average", &averaged),
    ] {
        let (time, per_voxel) = benchmark_sampling(volume, config.iterations);
        println!("  {:<12} {:.3}ms total, {:.2}ns/voxel", label, time * 1000.0, per_voxel);
    }
    println!();

    // =========================================================================
    // Extraction Benchmarks
    // =========================================================================
    println!("┌─────────────────────────────────────────────────────────────┐");
    println!("│ Extraction Benchmarks                                       │");
    println!("└─────────────────────────────────────────────────────────────┘");

    let sequential = ExtractionOptions {
        parallel: false,
        ..Default::default()
    };
    let (seq_time, seq_soup) = benchmark_extraction(&averaged, sequential, config.iterations);
    println!("  Sequential:        {:.3}ms ({} triangles)", seq_time * 1000.0, seq_soup.len());
    println!(
        "                     {:.1} Mcells/s",
        config.cells() as f64 / seq_time / 1e6
    );

    let (par_time, par_soup) =
        benchmark_extraction(&averaged, ExtractionOptions::default(), config.iterations);
    println!(
        "  Parallel:          {:.3}ms ({:.2}x)",
        par_time * 1000.0,
        seq_time / par_time
    );

    for threads in [1, 2, 4] {
        let options = ExtractionOptions {
            threads,
            ..Default::default()
        };
        let (time, _) = benchmark_extraction(&averaged, options, config.iterations);
        println!(
            "  Pool of {}:         {:.3}ms ({:.2}x)",
            threads,
            time * 1000.0,
            seq_time / time
        );
    }
    println!(
        "  Deterministic:     {}",
        if seq_soup == par_soup { "yes" } else { "NO" }
    );
    println!();

    // =========================================================================
    // Sparse Scan Benchmarks
    // =========================================================================
    println!("┌─────────────────────────────────────────────────────────────┐");
    println!("│ Sparse Scan Benchmarks                                      │");
    println!("└─────────────────────────────────────────────────────────────┘");

    let (schedule_time, schedule) = benchmark_schedule(&averaged, config.iterations);
    println!("  Schedule build:    {:.3}ms", schedule_time * 1000.0);
    println!(
        "  Scheduled cells:   {} of {} ({:.1}%)",
        schedule.cell_count(),
        config.cells(),
        schedule.cell_count() as f64 * 100.0 / config.cells() as f64
    );

    let (sched_time, sched_tris) =
        benchmark_scheduled_extraction(&averaged, &schedule, config.iterations);
    println!(
        "  Scheduled extract: {:.3}ms ({:.2}x vs parallel full)",
        sched_time * 1000.0,
        par_time / sched_time
    );
    println!("  Triangles match:   {}", if sched_tris == par_soup.len() { "yes" } else { "NO" });
    println!();

    // =========================================================================
    // Swap I/O Benchmarks
    // =========================================================================
    println!("┌─────────────────────────────────────────────────────────────┐");
    println!("│ Swap I/O Benchmarks                                         │");
    println!("└─────────────────────────────────────────────────────────────┘");

    let (write_time, read_time, file_size) = benchmark_swap_io(&stack);
    println!(
        "  Swap size:         {} bytes ({:.2} MB)",
        file_size,
        file_size as f64 / 1_000_000.0
    );
    println!(
        "  Write:             {:.3}ms ({:.0} MB/s)",
        write_time * 1000.0,
        file_size as f64 / write_time / 1e6
    );
    println!(
        "  Read:              {:.3}ms ({:.0} MB/s)",
        read_time * 1000.0,
        file_size as f64 / read_time / 1e6
    );
    println!();

    println!("═══════════════════════════════════════════════════════════════");
}

fn available_threads() -> String {
    std::thread::available_parallelism()
        .map(|n| n.get().to_string())
        .unwrap_or_else(|_| "unknown".to_string())
}
