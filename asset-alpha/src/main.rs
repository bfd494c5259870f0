mod config;

use alpha_key::process_all;
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// Turn near-white pixels transparent and save as PNG, in place by default
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Images to process in place. Replaces the configured asset list.
    paths: Vec<PathBuf>,

    /// R, G and B must all be strictly greater than this to be keyed
    #[arg(short, long)]
    threshold: Option<u8>,

    /// TOML file with threshold, replacement colour and asset list
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn init_logger() {
    use std::io::Write;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let style = buf.default_level_style(record.level());
            let ts = chrono::Local::now().format("%H:%M:%S");

            writeln!(
                buf,
                "[{} {style}{}{style:#} {} {}] {}",
                ts,
                record.level(),
                record
                    .file()
                    .unwrap_or("None")
                    .split('/')
                    .next_back()
                    .unwrap_or("None"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}

fn main() -> Result<()> {
    init_logger();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => config::Config::load(path)?,
        None => config::Config::default(),
    };
    config.apply_overrides(args.threshold, &args.paths);

    let white_key = config.to_white_key()?;
    let pairs = config.path_pairs();
    log::debug!("{config:?}");

    // Per-file failures are printed, never turned into an exit code
    for outcome in process_all(&pairs, &white_key) {
        println!("{outcome}");
    }

    Ok(())
}
