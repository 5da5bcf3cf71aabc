use std::time::Instant;

use mazewalls::generators::generate_maze;

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(10);
    let side = args
        .next()
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(1024);

    let started = Instant::now();
    for seed in 0..num_iters as u64 {
        let maze = generate_maze(side, side, Some(seed))?;
        std::hint::black_box(&maze);
    }
    let elapsed = started.elapsed();
    println!(
        "{num_iters} mazes of {side}x{side}: {:?} total, {:?} per maze",
        elapsed,
        elapsed / num_iters.max(1) as u32
    );
    Ok(())
}
