use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::info;

use brandgen::config::{self, BrandConfig, OutputConfig, TeamMember};
use brandgen::{assets, font};

#[derive(Parser)]
#[command(name = "brandgen", about = "Generate branding assets (favicons, logos, letterhead, signatures)")]
struct Cli {
    /// Root directory for generated assets
    #[arg(long, default_value = "out")]
    out_dir: PathBuf,

    /// JSON roster file overriding the built-in team list
    #[arg(long)]
    roster: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Favicon set and Apple touch icons
    Favicons,
    /// Logo variants at all sizes
    Logos,
    /// A4 letterhead (requires Chrome)
    Letterhead,
    /// Email signatures for the whole roster (requires Chrome)
    Signatures,
    /// Every asset batch
    All,
}

fn load_roster(cli: &Cli) -> brandgen::Result<Vec<TeamMember>> {
    match &cli.roster {
        Some(path) => config::load_roster(path),
        None => Ok(config::default_roster()),
    }
}

fn run(cli: Cli) -> brandgen::Result<()> {
    let brand = BrandConfig::default();
    let out = OutputConfig::under_root(&cli.out_dir);

    match cli.command {
        Command::Favicons => {
            let face = font::resolve(&font::default_candidates());
            assets::favicon::generate(&face, &brand, &out.public_dir)?;
        }
        Command::Logos => {
            let face = font::resolve(&font::default_candidates());
            assets::logo::generate(&face, &brand, &out.logos_dir)?;
        }
        Command::Letterhead => {
            assets::letterhead::generate(&brand, &out.letterhead_dir)?;
        }
        Command::Signatures => {
            let roster = load_roster(&cli)?;
            assets::signature::generate(&brand, &roster, &out.signatures_dir)?;
        }
        Command::All => {
            let face = font::resolve(&font::default_candidates());
            assets::favicon::generate(&face, &brand, &out.public_dir)?;
            assets::logo::generate(&face, &brand, &out.logos_dir)?;
            assets::letterhead::generate(&brand, &out.letterhead_dir)?;
            let roster = load_roster(&cli)?;
            assets::signature::generate(&brand, &roster, &out.signatures_dir)?;
        }
    }

    info!("Done");
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("brandgen: {}", e);
        std::process::exit(1);
    }
}
