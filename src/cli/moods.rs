//! Moods command implementation.

use crate::error::Result;
use crate::output::{plural, Printer};
use crate::types::Mood;

pub fn run(printer: &Printer) -> Result<()> {
    printer.info("Listing", &plural(Mood::ALL.len(), "mood", "moods"));
    for mood in Mood::ALL {
        let colours: Vec<String> = mood.palette().colours().iter().map(|c| c.to_string()).collect();
        println!("{:<12} {}", mood, colours.join(" "));
    }
    Ok(())
}
