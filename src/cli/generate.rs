//! Generate command implementation.
//!
//! Validates a render request, writes one PNG and prints its path.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::config::load_settings;
use crate::error::{MoodError, Result};
use crate::generator::{GeneratedImage, ImageGenerator};
use crate::output::{display_path, Printer};
use crate::render::{clock_seed, FillStrategy};
use crate::types::{Mood, RenderRequest};

/// Generate a mood image
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Mood label (e.g. happy, sad, calm)
    #[arg(long, short)]
    pub mood: String,

    /// Image size from 0 to 100 (percentage of the base resolution).
    /// Size 0 is accepted but yields an empty image, which cannot be written as PNG.
    #[arg(long, short, allow_negative_numbers = true)]
    pub size: i32,

    /// Convert the image to grayscale
    #[arg(long)]
    pub grayscale: bool,

    /// Seed for reproducible output (default: current time)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Fill strategy (overrides settings)
    #[arg(long, value_enum)]
    pub fill: Option<FillStrategy>,

    /// Output directory (overrides settings)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Print the result as JSON instead of a bare path
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: GenerateArgs, config: Option<&Path>, printer: &Printer) -> Result<()> {
    let request = RenderRequest::new(args.mood.clone(), args.size, args.grayscale);
    request.validate()?;

    let image = generate(&args, &request, config, printer)?;

    if args.json {
        let json = serde_json::to_string_pretty(&image).map_err(|e| MoodError::Encode {
            message: format!("Failed to serialize result: {}", e),
            help: None,
        })?;
        println!("{}", json);
    } else {
        println!("{}", image.path.display());
    }

    Ok(())
}

/// Build the generator from settings plus flag overrides, then render.
fn generate(
    args: &GenerateArgs,
    request: &RenderRequest,
    config: Option<&Path>,
    printer: &Printer,
) -> Result<GeneratedImage> {
    let mut settings = load_settings(config, Path::new("."))?;
    if let Some(output) = &args.output {
        settings.output = output.clone();
    }
    if let Some(fill) = args.fill {
        settings.fill = fill;
    }

    let generator = ImageGenerator::from_settings(&settings)?;

    if Mood::from_label(&request.mood).is_none() {
        printer.warning(
            "Unknown",
            &format!("mood `{}`, using the fallback palette", request.mood),
        );
    }

    let seed = args.seed.unwrap_or_else(clock_seed);
    let side = generator.synthesizer().dimension(request.size);
    printer.status(
        "Generating",
        &format!(
            "{} ({}x{}) {}",
            request.mood,
            side,
            side,
            printer.dim(&format!("seed {}", seed))
        ),
    );

    let image = generator.generate(request, seed)?;
    printer.status("Wrote", &display_path(&image.path));

    Ok(image)
}
