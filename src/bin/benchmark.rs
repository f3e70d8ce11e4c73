//! Step-time benchmark comparing serial and parallel evolution

use std::time::Instant;

use bounded_life::{BoardBounds, Evolution, Offset, SimulationEngine, presets};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn benchmark(size: i32, evolution: Evolution, iterations: u32) -> f64 {
    let bounds = match BoardBounds::new(size, size) {
        Ok(bounds) => bounds,
        Err(err) => {
            eprintln!("skipping {size}x{size}: {err}");
            return f64::NAN;
        }
    };
    let mut rng = StdRng::seed_from_u64(size as u64);
    let mut engine = SimulationEngine::new(bounds).with_evolution(evolution);
    engine.set_figure(presets::random_soup(&bounds, 0.25, &mut rng), Offset::default());

    let start = Instant::now();
    for _ in 0..iterations {
        engine.step();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Game of Life Step Benchmark ===\n");

    let sizes = [50, 100, 250, 500, 1000];
    let iterations = 10;

    println!("{:>12} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<50}", "");

    for size in sizes {
        let serial_ms = benchmark(size, Evolution::Serial, iterations);
        let parallel_ms = benchmark(size, Evolution::Parallel, iterations);

        println!(
            "{:>12} {:>12.2} {:>12.2} {:>9.1}x",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }

    let size = 1000;
    let cells = (size * size) as f64;
    let parallel_ms = benchmark(size, Evolution::Parallel, iterations);
    println!("\n=== Throughput at {size}x{size} ===\n");
    println!(
        "Parallel: {:.2} ms/gen, {:.1}M cells/sec",
        parallel_ms,
        cells / (parallel_ms / 1000.0) / 1_000_000.0
    );
}
