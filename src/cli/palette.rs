use clap::Args;

use crate::error::{MoodError, Result};
use crate::output::{plural, Printer};
use crate::types::{resolve_palette, Mood, Palette};

/// Show the palette a mood resolves to
#[derive(Args, Debug)]
pub struct PaletteArgs {
    /// Mood label to resolve
    #[arg(required = true)]
    pub mood: String,

    /// Print the palette as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: PaletteArgs, printer: &Printer) -> Result<()> {
    let palette = resolve_palette(&args.mood);

    if Mood::from_label(&args.mood).is_none() {
        printer.warning("Unknown", &format!("mood `{}`, showing the fallback", args.mood));
    }
    printer.info(
        "Resolved",
        &format!("{} to {}", args.mood, plural(palette.len(), "colour", "colours")),
    );

    println!("{}", render(&palette, args.json)?);
    Ok(())
}

/// Format a palette for stdout.
fn render(palette: &Palette, json: bool) -> Result<String> {
    if json {
        return serde_json::to_string_pretty(&palette.to_summary()).map_err(|e| {
            MoodError::Encode {
                message: format!("Failed to serialize palette: {}", e),
                help: None,
            }
        });
    }

    let lines: Vec<String> = palette
        .colours()
        .iter()
        .enumerate()
        .map(|(i, colour)| format!("${}-{}: {}", palette.name, i + 1, colour))
        .collect();
    Ok(lines.join("\n"))
}
