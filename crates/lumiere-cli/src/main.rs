use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use lumiere_core::menu::MenuRepository;
use lumiere_infrastructure::TomlMenuRepository;

mod commands;

#[derive(Parser)]
#[command(name = "lumiere")]
#[command(about = "Lumière - dining concierge and menu explorer", long_about = None)]
struct Cli {
    /// Menu TOML file (defaults to ~/.lumiere/menu.toml, then the built-in card)
    #[arg(long, global = true, value_name = "FILE")]
    menu_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Talk to the concierge
    Chat,
    /// Print the menu card
    Menu {
        /// Filter to one section ("all" for everything)
        #[arg(long, conflicts_with_all = ["mood", "featured"])]
        category: Option<String>,
        /// Filter to dishes tagged with a mood
        #[arg(long, conflicts_with = "featured")]
        mood: Option<String>,
        /// Only featured dishes
        #[arg(long)]
        featured: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let repository = match &cli.menu_file {
        Some(path) => TomlMenuRepository::with_path(path),
        None => TomlMenuRepository::default_location()?,
    };
    let catalog = repository.load()?;

    match cli.command {
        Commands::Chat => commands::chat::run(catalog)?,
        Commands::Menu {
            category,
            mood,
            featured,
        } => commands::menu::run(&catalog, category, mood, featured)?,
    }

    Ok(())
}
