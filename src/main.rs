use clap::Parser;
use miette::Result;
use moodlift::cli::{Cli, Commands};
use moodlift::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new(cli.quiet);
    let config = cli.config.as_deref();

    match cli.command {
        Commands::Generate(args) => moodlift::cli::generate::run(args, config, &printer)?,
        Commands::Palette(args) => moodlift::cli::palette::run(args, &printer)?,
        Commands::Moods => moodlift::cli::moods::run(&printer)?,
        Commands::Init(args) => moodlift::cli::init::run(args, &printer)?,
        Commands::Completions(args) => moodlift::cli::completions::run(args)?,
    }

    Ok(())
}
