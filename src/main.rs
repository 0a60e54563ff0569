use anyhow::Result;
use clap::Parser;
use zonelife_lib::app::{App, RunOptions};
use zonelife_lib::model::config::AppConfig;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Mode to run the simulation in
    #[arg(short, long, value_enum, default_value = "headless")]
    mode: Mode,

    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Override the generation limit from the config file
    #[arg(short, long)]
    generations: Option<u64>,

    /// Override the RNG seed from the config file
    #[arg(short, long)]
    seed: Option<u64>,

    /// Fraction of cells seeded alive before the first generation
    #[arg(short, long, default_value_t = 0.2)]
    fill: f64,
}

#[derive(clap::ValueEnum, Clone, Debug, PartialEq)]
enum Mode {
    /// Run generations back to back
    Headless,
    /// Pace generations with the configured tick interval
    Realtime,
}

#[tokio::main]
async fn main() -> Result<()> {
    zonelife_core::init_logging();
    let args = Args::parse();

    let config = AppConfig::load(&args.config)?;
    let options = RunOptions {
        generations: args.generations,
        seed: args.seed,
        fill: args.fill,
    };
    let mut app = App::new(config, &options)?;

    let summary = match args.mode {
        Mode::Headless => app.run_headless().await?,
        Mode::Realtime => app.run_realtime().await?,
    };
    println!("{summary}");
    Ok(())
}
