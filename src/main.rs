use celsim::{Scenario, ScenarioConfig};

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file under `scenarios/`
    #[arg(short, default_value = "sun_earth.yaml")]
    file_name: String,

    /// Stop after this many steps even if t_end is not reached
    #[arg(short, long)]
    steps: Option<u64>,

    /// Log level: -v debug, -vv trace
    #[arg(short, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn setup_logging(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()?;
    Ok(())
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("failed to open {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("failed to parse {}", config_path.display()))?;

    debug!("{:?}", scenario_cfg);

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose)?;

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let Scenario { mut simulation, t_end } = Scenario::build_scenario(scenario_cfg)?;

    let e0 = simulation.total_energy()?;
    let max_steps = args.steps.unwrap_or(u64::MAX);
    while simulation.time() < t_end && simulation.steps() < max_steps {
        simulation.update()?;
    }

    let e1 = simulation.total_energy()?;
    info!(
        "finished {} steps, t = {} s, relative energy drift = {:e}",
        simulation.steps(),
        simulation.time(),
        if e0 != 0.0 { (e1 - e0) / e0.abs() } else { 0.0 }
    );

    let au = simulation.constants().au;
    for (i, b) in simulation.bodies().iter().enumerate() {
        let x = b.position();
        let v = b.velocity();
        println!(
            "{i:3} {:?} m = {:e} kg  x = ({:.6e}, {:.6e}) km  |x| = {:.6} AU  v = ({:.6e}, {:.6e}) km/s",
            b.kind(),
            b.mass(),
            x.x,
            x.y,
            x.norm() / au,
            v.x,
            v.y
        );
    }

    Ok(())
}
