//! Batch leaf-venation renderer.
//!
//! Parses growth parameters, runs the simulation to its iteration
//! budget, and writes the width-grouped vein paths as an SVG file.

mod svg;

use anyhow::Context;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use venation_core::candidates::CandidatePool;
use venation_core::config::Config;
use venation_core::engine::GrowthEngine;
use venation_core::paths::merge_paths;
use venation_core::pipe::vein_widths;

/// Grow a leaf venation pattern and render it to SVG.
#[derive(Parser, Debug)]
#[command(name = "venation", version)]
struct Args {
    /// Canvas width in drawing units.
    #[arg(long, default_value_t = 3200.0)]
    width: f32,

    /// Canvas height in drawing units.
    #[arg(long, default_value_t = 3200.0)]
    height: f32,

    /// Minimum separation between candidate auxin sources.
    #[arg(long, default_value_t = 10.0)]
    birth_distance: f32,

    /// Distance at which a source is consumed by the tree.
    #[arg(long, default_value_t = 20.0)]
    kill_distance: f32,

    /// Growth step length per iteration.
    #[arg(long, default_value_t = 1.0)]
    step: f32,

    /// Pipe-model width exponent.
    #[arg(long, default_value_t = 3.0)]
    width_pow: f32,

    /// Margin radius at the start of the run.
    #[arg(long, default_value_t = 270.0)]
    initial_leaf_radius: f32,

    /// Margin radius cap.
    #[arg(long, default_value_t = 1600.0)]
    end_leaf_radius: f32,

    /// Margin radius increment per iteration.
    #[arg(long, default_value_t = 8.0)]
    delta_l: f32,

    /// Candidate density over the canvas.
    #[arg(long, default_value_t = 600e-6)]
    rho: f32,

    /// Iteration budget.
    #[arg(long, default_value_t = 1000)]
    niters: usize,

    /// RNG seed for the candidate pool; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Output SVG path.
    #[arg(long, default_value = "venation.svg")]
    output: PathBuf,
}

impl Args {
    fn config(&self) -> Config {
        Config {
            width: self.width,
            height: self.height,
            birth_distance: self.birth_distance,
            kill_distance: self.kill_distance,
            step: self.step,
            width_pow: self.width_pow,
            initial_leaf_radius: self.initial_leaf_radius,
            end_leaf_radius: self.end_leaf_radius,
            delta_l: self.delta_l,
            rho: self.rho,
            niters: self.niters,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let cfg = args.config();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let pool = CandidatePool::generate(
        cfg.width,
        cfg.height,
        cfg.birth_distance,
        cfg.ndarts(),
        &mut rng,
    );
    println!("{} candidate auxin sources", pool.len());

    let mut engine = GrowthEngine::new(cfg, pool)?;
    let cancel = AtomicBool::new(false);
    engine.run(&cancel)?;

    let widths = vein_widths(engine.tree(), cfg.width_pow);
    let lines = merge_paths(engine.tree(), &widths);

    let markup = svg::render_svg(cfg.width, cfg.height, &lines);
    std::fs::write(&args.output, markup)
        .with_context(|| format!("writing {}", args.output.display()))?;

    println!(
        "{} iterations, {} vein nodes, {} paths -> {}",
        engine.iterations(),
        engine.tree().len(),
        lines.len(),
        args.output.display()
    );
    Ok(())
}
