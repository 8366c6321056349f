use std::path::PathBuf;

use image::Rgb;

use crate::fonts::FontSource;
use crate::models::{BACKGROUND, FOREGROUND};

pub const OUTPUT_DIR: &str = "ClassMateAI/Assets.xcassets/AppIcon.appiconset";
pub const LABEL: &str = "NoteApp";
pub const PREFERRED_FONT_PATH: &str = "/System/Library/Fonts/Helvetica.ttc";
pub const SECONDARY_FONT_FAMILY: &str = "Arial";

/// What gets drawn on every icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Style {
    pub label: String,
    pub background: Rgb<u8>,
    pub foreground: Rgb<u8>,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            label: LABEL.to_string(),
            background: BACKGROUND,
            foreground: FOREGROUND,
        }
    }
}

/// Generator settings. Everything is compiled in; nothing is read from the
/// environment or the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub output_dir: PathBuf,
    pub style: Style,
    pub fonts: Vec<FontSource>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(OUTPUT_DIR),
            style: Style::default(),
            fonts: vec![
                FontSource::File(PathBuf::from(PREFERRED_FONT_PATH)),
                FontSource::Family(SECONDARY_FONT_FAMILY.to_string()),
                FontSource::Builtin,
            ],
        }
    }
}
