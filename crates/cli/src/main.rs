use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use grahamscan::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod provenance;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Stepwise Graham scan driver")]
struct Cmd {
    /// Log verbosity: -v for debug, -vv for per-step trace
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Scan a point set step by step, logging every snapshot
    Run(RunArgs),
    /// Print a small provenance JSON block
    Report,
}

#[derive(clap::Args, Debug)]
struct RunArgs {
    /// Point set (.csv with x,y columns or .json array); random if omitted
    #[arg(long)]
    input: Option<PathBuf>,
    /// Number of random points when no input is given
    #[arg(long, default_value_t = 15)]
    random: usize,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Pause between steps, in milliseconds
    #[arg(long, default_value_t = 0)]
    delay_ms: u64,
    /// Retain points lying on hull edges (except on the closing edge)
    #[arg(long)]
    keep_collinear: bool,
    /// Write the full snapshot trace (JSON) plus a provenance sidecar
    #[arg(long)]
    out: Option<PathBuf>,
}

/// Trace document written by `run --out`.
#[derive(Serialize)]
struct Trace<'a> {
    collinear: Collinear,
    points: &'a [Point],
    snapshots: &'a [Snapshot],
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = match cmd.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .init();
    match cmd.action {
        Action::Run(args) => run(&args).map(|_| ()),
        Action::Report => report(),
    }
}

fn run(args: &RunArgs) -> Result<Snapshot> {
    tracing::info!(?args, "run");
    let (points, source) = match &args.input {
        Some(path) => (input::load_points(path)?, path.display().to_string()),
        None => {
            let cfg = SampleCfg {
                count: args.random,
                ..SampleCfg::default()
            };
            let pts = sample_points(
                &cfg,
                ReplayToken {
                    seed: args.seed,
                    index: 0,
                },
            )?;
            (pts, format!("random:{}", args.seed))
        }
    };
    let cfg = ScanCfg {
        collinear: if args.keep_collinear {
            Collinear::Keep
        } else {
            Collinear::Drop
        },
    };

    let mut engine = HullEngine::with_cfg(points, cfg)?;
    let mut trace: Vec<Snapshot> = Vec::new();
    let keep_trace = args.out.is_some();
    let delay = Duration::from_millis(args.delay_ms);
    let done = drive(
        &mut engine,
        |s| {
            log_snapshot(s);
            if keep_trace {
                trace.push(s.clone());
            }
        },
        |_| {
            if !delay.is_zero() {
                thread::sleep(delay);
            }
        },
    )?;

    verify(engine.points(), &done.hull)?;
    println!(
        "{}",
        serde_json::to_string_pretty(&serde_json::json!({
            "hull": done.hull,
            "steps": done.step,
            "area": hull_area(&done.hull),
        }))?
    );

    if let Some(out) = &args.out {
        write_trace(out, engine.points(), cfg, &trace, source)?;
    }
    Ok(done)
}

fn log_snapshot(s: &Snapshot) {
    tracing::info!(
        step = s.step,
        state = ?s.state,
        hull_len = s.hull.len(),
        remaining = s.remaining.len(),
        next = ?s.highlighted,
        popped = s.popped.len(),
        "snapshot"
    );
    tracing::debug!(hull = ?s.hull, "chain");
}

fn verify(points: &[Point], hull: &[Point]) -> Result<()> {
    if !is_convex_ccw(hull) {
        bail!("final chain is not convex: {hull:?}");
    }
    if let Some(p) = points.iter().find(|p| !encloses(hull, **p)) {
        bail!("point {p} lies outside the final chain");
    }
    Ok(())
}

/// Enclosed area of the final chain; 0 for chains of fewer than 3 points.
fn hull_area(hull: &[Point]) -> f64 {
    twice_area(hull).map_or(0.0, |a| a as f64 / 2.0)
}

fn write_trace(
    out: &Path,
    points: &[Point],
    cfg: ScanCfg,
    snapshots: &[Snapshot],
    source: String,
) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    let doc = Trace {
        collinear: cfg.collinear,
        points,
        snapshots,
    };
    std::fs::write(out, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", out.display()))?;
    let params = serde_json::json!({
        "collinear": cfg.collinear,
        "points": points.len(),
        "steps": snapshots.len(),
    });
    let prov = provenance::write_sidecar(out, provenance::Payload::new(params, source))?;
    tracing::info!(trace = %out.display(), provenance = %prov.display(), "trace_written");
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "version": grahamscan::VERSION,
        "defaults": {
            "points": SampleCfg::default().count,
            "collinear": Collinear::default(),
        },
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
