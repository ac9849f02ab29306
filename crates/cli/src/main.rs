mod config;
mod output;
mod provenance;

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand};
use serde_json::json;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;
use vertenum::api::{
    enumerate_vertices, random_region, DedupPolicy, EnumCfg, Goal, Objective, RandomRegionCfg,
    Region, TextReport,
};
use vertenum::region::cfg::{DISPLAY_DECIMALS, FEAS_EPS};

use crate::config::RegionFile;
use crate::provenance::Payload;

#[derive(Parser)]
#[command(name = "vertenum")]
#[command(about = "Enumerate the vertices of a region given by linear inequalities")]
struct Cmd {
    /// Log more (-v debug, -vv trace); logs go to stderr
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Built-in six-constraint region with f(x,y,z) = x - y
    Reference {
        #[command(flatten)]
        opts: RunOpts,
    },
    /// Region and objective from a JSON config file
    Run {
        #[arg(long)]
        config: PathBuf,
        #[command(flatten)]
        opts: RunOpts,
    },
    /// Random bounded region (box plus random half-spaces)
    Random {
        #[arg(long, default_value_t = 3)]
        dimension: usize,
        /// Half-spaces on top of the 2d box facets
        #[arg(long, default_value_t = 6)]
        extra: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[command(flatten)]
        opts: RunOpts,
    },
}

#[derive(Args, Clone, Debug)]
struct RunOpts {
    /// Decimal places for displayed coordinates and values
    #[arg(long, default_value_t = DISPLAY_DECIMALS)]
    decimals: u32,
    /// Fold vertices closer than this (Euclidean); default keeps every combination's point
    #[arg(long)]
    dedup_eps: Option<f64>,
    /// Feasibility slack for `a·x >= b`
    #[arg(long, default_value_t = FEAS_EPS)]
    eps_feas: f64,
    /// Evaluate combinations on the rayon pool
    #[arg(long)]
    parallel: bool,
    /// Write vertices.csv and plot.json (with provenance) into this directory
    #[arg(long)]
    out: Option<PathBuf>,
    /// Skip the console report
    #[arg(long)]
    quiet: bool,
}

impl RunOpts {
    fn enum_cfg(&self) -> EnumCfg {
        EnumCfg {
            eps_feas: self.eps_feas,
            display_decimals: self.decimals,
            dedup: self
                .dedup_eps
                .map_or(DedupPolicy::KeepAll, DedupPolicy::Euclidean),
            parallel: self.parallel,
            ..Default::default()
        }
    }

    fn params(&self) -> serde_json::Value {
        json!({
            "decimals": self.decimals,
            "dedup_eps": self.dedup_eps,
            "eps_feas": self.eps_feas,
            "parallel": self.parallel,
        })
    }
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
        .with_writer(std::io::stderr)
        .init();
    dispatch(cmd.action)
}

fn dispatch(action: Action) -> Result<()> {
    match action {
        Action::Reference { opts } => {
            let (region, objective) = RegionFile::reference().into_problem()?;
            execute(&region, &objective, &opts, Payload::new("reference", opts.params()))
        }
        Action::Run { config, opts } => {
            tracing::info!(config = %config.display(), "load");
            let (region, objective) = RegionFile::load(&config)?.into_problem()?;
            let source = config.display().to_string();
            execute(&region, &objective, &opts, Payload::new(source, opts.params()))
        }
        Action::Random {
            dimension,
            extra,
            seed,
            opts,
        } => {
            let cfg = RandomRegionCfg {
                dim: dimension,
                extra,
                ..Default::default()
            };
            let region = random_region(cfg, seed)?;
            let mut params = opts.params();
            params["random"] = json!({ "dimension": dimension, "extra": extra, "seed": seed });
            let payload = Payload::new(format!("random:{seed}"), params);
            execute(&region, &Objective::zero(dimension), &opts, payload)
        }
    }
}

fn execute(region: &Region, objective: &Objective, opts: &RunOpts, payload: Payload) -> Result<()> {
    tracing::info!(
        source = %payload.source,
        dim = region.dim(),
        constraints = region.len(),
        "enumerate"
    );
    let run = enumerate_vertices(region, objective, &opts.enum_cfg())?;
    if !opts.quiet {
        print!("{}", TextReport::new(&run, region));
        if let (Some(lo), Some(hi)) = (
            run.best_vertex(Goal::Minimize),
            run.best_vertex(Goal::Maximize),
        ) {
            println!(
                "\nObjective range over vertices: min {} at {:?}, max {} at {:?}",
                lo.display_value,
                lo.display.as_slice(),
                hi.display_value,
                hi.display.as_slice()
            );
        }
    }
    if let Some(dir) = &opts.out {
        output::write_outputs(dir, &run, region, &payload.with_counts(&run))?;
    }
    Ok(())
}
