//! Paced text rendering of a scan over the default random point set.
//!
//! Purpose
//! - Show the driver side of the engine: the render callback draws from the
//!   snapshot alone and the pacing callback sleeps between steps.
//!
//! Usage
//!   cargo run -p grahamscan --example animate -- [seed] [delay_ms]

use std::thread;
use std::time::Duration;

use grahamscan::prelude::*;

fn main() {
    let mut args = std::env::args().skip(1);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(0);
    let delay_ms: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(250);

    let points = sample_points(&SampleCfg::default(), ReplayToken { seed, index: 0 })
        .expect("default sampler config is valid");
    let mut engine = HullEngine::new(points).expect("non-empty point set");

    let done = drive(
        &mut engine,
        |s| {
            let chain: Vec<String> = s.hull.iter().map(|p| p.to_string()).collect();
            let next = s
                .highlighted
                .map(|p| p.to_string())
                .unwrap_or_else(|| "-".to_string());
            println!(
                "step={:>2} state={:?} remaining={:>2} next={} popped={} chain=[{}]",
                s.step,
                s.state,
                s.remaining.len(),
                next,
                s.popped.len(),
                chain.join(" ")
            );
        },
        |_| thread::sleep(Duration::from_millis(delay_ms)),
    )
    .expect("fresh engine completes");

    if let Some((from, to)) = done.closing_edge() {
        println!("closing edge {from} -> {to}");
    }
    println!("hull vertices={}", done.hull.len());
}
