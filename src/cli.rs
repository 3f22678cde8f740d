use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use console::style;
use serde::Serialize;
use std::path::PathBuf;

use folio_core::effects::{BlobField, TiltCard};
use folio_core::{Config, Placement, PlacementOutcome, PlacementSampler, Point, Viewport};

#[derive(Parser, Debug)]
#[command(name = "folio-fx")]
#[command(about = "Folio FX - portfolio background and card effects", long_about = None)]
pub struct Cli {
    /// Run in verbose mode
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug mode
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Config file to use instead of ~/.folio/config.yaml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Sample positions that keep clear of the given markers
    Place(PlaceArgs),
    /// Run blob animation cycles and report spacing
    Simulate(SimulateArgs),
    /// Print the tilt transform for a pointer position
    Tilt(TiltArgs),
    /// Manage the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Args, Debug)]
pub struct ViewportArgs {
    /// Viewport width in pixels
    #[arg(long, default_value_t = 1280.0)]
    pub width: f64,

    /// Viewport height in pixels
    #[arg(long, default_value_t = 720.0)]
    pub height: f64,
}

#[derive(Args, Debug)]
pub struct PlaceArgs {
    #[command(flatten)]
    pub viewport: ViewportArgs,

    /// Existing marker center as X,Y in pixels (repeatable)
    #[arg(long = "marker", value_parser = parse_point)]
    pub markers: Vec<Point>,

    /// Number of positions to place; each one also avoids the previous ones
    #[arg(long, default_value_t = 1)]
    pub count: usize,

    #[arg(long)]
    pub min_distance: Option<f64>,

    #[arg(long)]
    pub max_attempts: Option<u32>,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct SimulateArgs {
    #[command(flatten)]
    pub viewport: ViewportArgs,

    #[arg(long)]
    pub blobs: Option<usize>,

    /// Blob diameter in pixels
    #[arg(long)]
    pub blob_size: Option<f64>,

    /// Animation cycles per blob
    #[arg(long, default_value_t = 10)]
    pub iterations: usize,

    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct TiltArgs {
    /// Card width in pixels
    #[arg(long)]
    pub width: f64,

    /// Card height in pixels
    #[arg(long)]
    pub height: f64,

    /// Pointer offset from the card's left edge
    #[arg(long)]
    pub x: f64,

    /// Pointer offset from the card's top edge
    #[arg(long)]
    pub y: f64,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the config file location
    Path,
    /// Print the effective config
    Show,
    /// Write the default config
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

pub fn parse_point(raw: &str) -> Result<Point, String> {
    let (x, y) = raw
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{}'", raw))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<f64>()
            .map_err(|e| format!("invalid coordinate '{}': {}", v.trim(), e))
    };
    Ok(Point::new(parse(x)?, parse(y)?))
}

impl ViewportArgs {
    fn viewport(&self) -> Result<Viewport> {
        Ok(Viewport::new(self.width, self.height)?)
    }
}

fn rng_for(seed: Option<u64>) -> fastrand::Rng {
    match seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    }
}

pub fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    match path {
        Some(path) => {
            let mut config = Config::load_from_file(path)?;
            config.apply_env_overrides()?;
            Ok(config)
        }
        None => Config::load_or_default(),
    }
}

fn config_path(path: Option<&PathBuf>) -> PathBuf {
    path.cloned().unwrap_or_else(Config::get_config_path)
}

pub fn run(cli: Cli) -> Result<()> {
    match &cli.command {
        Command::Config { action } => run_config(action, cli.config.as_ref()),
        Command::Place(args) => {
            let config = load_config(cli.config.as_ref())?;
            let report = place(&config, args)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_place_report(&report);
            }
            Ok(())
        }
        Command::Simulate(args) => {
            let config = load_config(cli.config.as_ref())?;
            let report = simulate(&config, args)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_simulation_report(&report);
            }
            Ok(())
        }
        Command::Tilt(args) => {
            let config = load_config(cli.config.as_ref())?;
            let mut card = TiltCard::new(args.width, args.height, config.tilt);
            println!("{}", card.on_pointer_move(args.x, args.y).to_css());
            Ok(())
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PlaceReport {
    pub min_distance: f64,
    pub placements: Vec<Placement>,
}

pub fn place(config: &Config, args: &PlaceArgs) -> Result<PlaceReport> {
    let viewport = args.viewport.viewport()?;
    let mut sampler = PlacementSampler::from_config(&config.placement)?;
    if let Some(min_distance) = args.min_distance {
        sampler = PlacementSampler::new(min_distance)
            .with_max_attempts(sampler.max_attempts())
            .with_range(sampler.range());
    }
    if let Some(max_attempts) = args.max_attempts {
        sampler = sampler.with_max_attempts(max_attempts);
    }

    let mut rng = rng_for(args.seed);
    let mut centers = args.markers.clone();
    let mut placements = Vec::with_capacity(args.count);
    for _ in 0..args.count {
        let placement = sampler.sample(&centers, &viewport, &mut rng);
        centers.push(placement.position.to_pixels(&viewport));
        placements.push(placement);
    }

    Ok(PlaceReport {
        min_distance: sampler.min_distance(),
        placements,
    })
}

fn print_place_report(report: &PlaceReport) {
    for placement in &report.placements {
        let status = match placement.outcome {
            PlacementOutcome::Accepted => style("accepted").green(),
            PlacementOutcome::BestEffort => style("best-effort").yellow(),
        };
        println!(
            "{:>3}% {:>3}%  {} after {} attempt(s)",
            placement.position.x_percent, placement.position.y_percent, status, placement.attempts
        );
    }
}

#[derive(Debug, Serialize)]
pub struct SimulationReport {
    pub blobs: usize,
    pub min_distance: f64,
    pub moves: usize,
    pub best_effort: usize,
    pub mean_attempts: f64,
    pub min_pairwise_distance: Option<f64>,
    pub final_positions: Vec<String>,
}

pub fn simulate(config: &Config, args: &SimulateArgs) -> Result<SimulationReport> {
    let viewport = args.viewport.viewport()?;
    let mut config = config.clone();
    if let Some(blobs) = args.blobs {
        config.blobs.count = blobs;
    }
    if let Some(size) = args.blob_size {
        config.blobs.size = size;
    }
    config.validate()?;

    let mut field = BlobField::from_config(&config)?;
    let mut rng = rng_for(args.seed);

    let mut placements = field.scatter(&viewport, &mut rng);
    for _ in 0..args.iterations {
        for index in 0..field.len() {
            let placement = field
                .on_animation_iteration(index, &viewport, &mut rng)
                .with_context(|| format!("moving blob {}", index))?;
            placements.push(placement);
        }
    }

    let moves = placements.len();
    let best_effort = placements.iter().filter(|p| !p.is_accepted()).count();
    let total_attempts: u64 = placements.iter().map(|p| p.attempts as u64).sum();
    let mean_attempts = if moves == 0 {
        0.0
    } else {
        total_attempts as f64 / moves as f64
    };

    Ok(SimulationReport {
        blobs: field.len(),
        min_distance: field.sampler().min_distance(),
        moves,
        best_effort,
        mean_attempts,
        min_pairwise_distance: field.min_pairwise_distance(&viewport),
        final_positions: field.blobs().iter().map(|b| b.position.to_css()).collect(),
    })
}

fn print_simulation_report(report: &SimulationReport) {
    println!("{}", style("Blob simulation").bold());
    println!("  blobs:         {}", report.blobs);
    println!("  min distance:  {}px", report.min_distance);
    println!("  moves:         {}", report.moves);
    println!("  best-effort:   {}", report.best_effort);
    println!("  mean attempts: {:.2}", report.mean_attempts);
    match report.min_pairwise_distance {
        Some(d) => println!("  closest pair:  {:.1}px", d),
        None => println!("  closest pair:  n/a"),
    }
    for (i, position) in report.final_positions.iter().enumerate() {
        println!("  blob {}: {}", i, style(position).dim());
    }
}

fn run_config(action: &ConfigAction, path: Option<&PathBuf>) -> Result<()> {
    let target = config_path(path);
    match action {
        ConfigAction::Path => println!("{}", target.display()),
        ConfigAction::Show => {
            let config = load_config(path)?;
            print!("{}", config.to_yaml()?);
        }
        ConfigAction::Init { force } => {
            if target.exists() && !force {
                anyhow::bail!(
                    "config already exists at {} (use --force to overwrite)",
                    target.display()
                );
            }
            match path {
                Some(path) => Config::default().save_to_file(path)?,
                None => Config::default().save()?,
            }
            println!("{} {}", style("Wrote").green(), target.display());
        }
    }
    Ok(())
}
