//! Init command implementation.
//!
//! Writes a `moodlift.yaml` with the default settings.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::config::{Settings, CONFIG_FILENAME};
use crate::error::{MoodError, Result};
use crate::output::{display_path, Printer};

/// Initialize a moodlift project by generating a moodlift.yaml
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to initialize (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing moodlift.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let settings_path = args.path.join(CONFIG_FILENAME);

    // Check for existing settings
    if settings_path.exists() && !args.force {
        return Err(MoodError::Config {
            message: format!("{} already exists", CONFIG_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    let yaml = Settings::default().to_yaml()?;

    fs::write(&settings_path, &yaml).map_err(|e| MoodError::Io {
        path: settings_path.clone(),
        message: format!("Failed to write settings: {}", e),
    })?;

    printer.status("Created", &display_path(&settings_path));

    Ok(())
}
