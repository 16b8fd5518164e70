//! Mood labels and the mood → palette table.

use std::fmt;

use palette::named;

use super::{Colour, Palette};

/// A recognised mood.
///
/// Labels match exactly and case-sensitively; anything else resolves to
/// the fallback palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mood {
    Happy,
    Sad,
    Angry,
    Calm,
    Excited,
    Anxious,
    Romantic,
    Mysterious,
}

const HAPPY: [Colour; 3] = [
    Colour::named(named::GOLD),
    Colour::named(named::YELLOW),
    Colour::named(named::ORANGE),
];
const SAD: [Colour; 3] = [
    Colour::named(named::STEELBLUE),
    Colour::named(named::SLATEGRAY),
    Colour::named(named::MIDNIGHTBLUE),
];
const ANGRY: [Colour; 3] = [
    Colour::named(named::RED),
    Colour::named(named::DARKRED),
    Colour::named(named::ORANGERED),
];
const CALM: [Colour; 3] = [
    Colour::named(named::SKYBLUE),
    Colour::named(named::POWDERBLUE),
    Colour::named(named::LIGHTBLUE),
];
const EXCITED: [Colour; 3] = [
    Colour::named(named::MAGENTA),
    Colour::named(named::HOTPINK),
    Colour::named(named::DARKORANGE),
];
const ANXIOUS: [Colour; 3] = [
    Colour::named(named::KHAKI),
    Colour::named(named::DARKKHAKI),
    Colour::named(named::OLIVE),
];
const ROMANTIC: [Colour; 3] = [
    Colour::named(named::PINK),
    Colour::named(named::LIGHTPINK),
    Colour::named(named::PALEVIOLETRED),
];
const MYSTERIOUS: [Colour; 3] = [
    Colour::named(named::INDIGO),
    Colour::named(named::DARKSLATEBLUE),
    Colour::named(named::PURPLE),
];

/// Neutral palette for unrecognised moods.
const FALLBACK: [Colour; 3] = [
    Colour::named(named::GRAY),
    Colour::named(named::DARKGRAY),
    Colour::named(named::LIGHTGRAY),
];

/// Name of the fallback palette.
pub const FALLBACK_NAME: &str = "fallback";

impl Mood {
    /// Every known mood, in display order.
    pub const ALL: [Mood; 8] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Angry,
        Mood::Calm,
        Mood::Excited,
        Mood::Anxious,
        Mood::Romantic,
        Mood::Mysterious,
    ];

    /// Look up a mood by its exact label.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "happy" => Some(Mood::Happy),
            "sad" => Some(Mood::Sad),
            "angry" => Some(Mood::Angry),
            "calm" => Some(Mood::Calm),
            "excited" => Some(Mood::Excited),
            "anxious" => Some(Mood::Anxious),
            "romantic" => Some(Mood::Romantic),
            "mysterious" => Some(Mood::Mysterious),
            _ => None,
        }
    }

    /// The label this mood is matched by.
    pub fn label(self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Angry => "angry",
            Mood::Calm => "calm",
            Mood::Excited => "excited",
            Mood::Anxious => "anxious",
            Mood::Romantic => "romantic",
            Mood::Mysterious => "mysterious",
        }
    }

    /// The colour table for this mood.
    pub fn palette(self) -> Palette {
        let table: &[Colour] = match self {
            Mood::Happy => &HAPPY,
            Mood::Sad => &SAD,
            Mood::Angry => &ANGRY,
            Mood::Calm => &CALM,
            Mood::Excited => &EXCITED,
            Mood::Anxious => &ANXIOUS,
            Mood::Romantic => &ROMANTIC,
            Mood::Mysterious => &MYSTERIOUS,
        };
        Palette::from_table(self.label(), table)
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// The palette used when a mood label is not recognised.
pub fn fallback_palette() -> Palette {
    Palette::from_table(FALLBACK_NAME, &FALLBACK)
}

/// Resolve a mood label to its palette.
///
/// Total: unknown labels get the gray fallback palette, never an error.
pub fn resolve_palette(mood: &str) -> Palette {
    match Mood::from_label(mood) {
        Some(known) => known.palette(),
        None => fallback_palette(),
    }
}
