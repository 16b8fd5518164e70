pub mod completions;
pub mod generate;
pub mod init;
pub mod moods;
pub mod palette;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// moodlift - Procedural mood image generator
#[derive(Parser, Debug)]
#[command(name = "moodlift")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Settings file (default: ./moodlift.yaml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Suppress status output on stderr
    #[arg(long, short, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a mood image
    Generate(generate::GenerateArgs),

    /// Show the palette a mood resolves to
    Palette(palette::PaletteArgs),

    /// List the known moods
    Moods,

    /// Initialize a moodlift project (generates moodlift.yaml)
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
