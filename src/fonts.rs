//! Font resolution and label rasterization.
//!
//! A [`FontHandle`] is resolved from an ordered list of [`FontSource`]s. The
//! built-in bitmap font terminates every chain, so resolution cannot fail.

use std::path::{Path, PathBuf};

use cosmic_text::{Attrs, Buffer, Color, Family, FontSystem, Metrics, Shaping, SwashCache, Wrap, fontdb};
use font8x8::{BASIC_FONTS, UnicodeFonts};
use once_cell::sync::Lazy;
use tracing::debug;

const LOCALE: &str = "en-US";

// Scanned once per process; each icon then loads only the matching file.
static SYSTEM_FONTS: Lazy<fontdb::Database> = Lazy::new(|| {
    let mut db = fontdb::Database::new();
    db.load_system_fonts();
    db
});

/// A place a font may be loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSource {
    /// A font file at a fixed path (collections load their first family).
    File(PathBuf),
    /// A family name looked up among the installed system fonts.
    Family(String),
    /// The 8x8 bitmap font compiled into the binary.
    Builtin,
}

/// Ink bounding box, right and bottom exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Bounds {
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

/// Glyph coverage of a rasterized string, positioned relative to the pen origin.
#[derive(Debug, Default, Clone)]
pub struct TextMask {
    coverage: Vec<(i32, i32, u8)>,
    bounds: Option<Bounds>,
}

impl TextMask {
    fn push(&mut self, x: i32, y: i32, alpha: u8) {
        if alpha == 0 {
            return;
        }
        self.coverage.push((x, y, alpha));
        self.bounds = Some(match self.bounds {
            None => Bounds { left: x, top: y, right: x + 1, bottom: y + 1 },
            Some(b) => Bounds {
                left: b.left.min(x),
                top: b.top.min(y),
                right: b.right.max(x + 1),
                bottom: b.bottom.max(y + 1),
            },
        });
    }

    /// `None` when nothing was inked.
    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    pub fn coverage(&self) -> &[(i32, i32, u8)] {
        &self.coverage
    }
}

pub struct OutlineFont {
    font_system: FontSystem,
    cache: SwashCache,
    family: String,
}

impl OutlineFont {
    fn new(db: fontdb::Database, family: String) -> Self {
        Self {
            font_system: FontSystem::new_with_locale_and_db(LOCALE.to_string(), db),
            cache: SwashCache::new(),
            family,
        }
    }

    fn rasterize(&mut self, text: &str, px: u32) -> TextMask {
        let px = px as f32;
        let mut buffer = Buffer::new_empty(Metrics::new(px, px * 1.2));
        let mut buffer = buffer.borrow_with(&mut self.font_system);

        buffer.set_size(None, None);
        buffer.set_wrap(Wrap::None);

        let attrs = Attrs::new().family(Family::Name(&self.family));
        buffer.set_text(text, &attrs, Shaping::Advanced);
        buffer.shape_until_scroll(false);

        let mut mask = TextMask::default();
        buffer.draw(&mut self.cache, Color::rgb(255, 255, 255), |x, y, w, h, color| {
            for gy in 0..h as i32 {
                for gx in 0..w as i32 {
                    mask.push(x + gx, y + gy, color.a());
                }
            }
        });
        mask
    }
}

/// A font ready for measuring and drawing one icon's label.
pub enum FontHandle {
    Outline(OutlineFont),
    Builtin,
}

impl std::fmt::Debug for FontHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FontHandle::Outline(font) => f.debug_tuple("Outline").field(&font.family).finish(),
            FontHandle::Builtin => f.write_str("Builtin"),
        }
    }
}

impl FontHandle {
    pub fn is_builtin(&self) -> bool {
        matches!(self, FontHandle::Builtin)
    }

    /// Rasterize `text` at roughly `px` pixels tall with the pen at the origin.
    pub fn rasterize(&mut self, text: &str, px: u32) -> TextMask {
        match self {
            FontHandle::Outline(font) => font.rasterize(text, px),
            FontHandle::Builtin => rasterize_builtin(text, px),
        }
    }
}

/// Try each source in order; falls back to [`FontHandle::Builtin`].
pub fn resolve(chain: &[FontSource]) -> FontHandle {
    for source in chain {
        if let Some(handle) = load(source) {
            debug!(?source, font = ?handle, "font resolved");
            return handle;
        }
        debug!(?source, "font unavailable, trying next");
    }
    FontHandle::Builtin
}

fn load(source: &FontSource) -> Option<FontHandle> {
    match source {
        FontSource::File(path) => load_file(path),
        FontSource::Family(name) => load_family(name),
        FontSource::Builtin => Some(FontHandle::Builtin),
    }
}

fn load_file(path: &Path) -> Option<FontHandle> {
    let mut db = fontdb::Database::new();
    if let Err(e) = db.load_font_file(path) {
        debug!(path = %path.display(), error = %e, "cannot read font file");
        return None;
    }
    let family = db
        .faces()
        .find_map(|face| face.families.first().map(|(name, _)| name.clone()))?;
    Some(FontHandle::Outline(OutlineFont::new(db, family)))
}

fn load_family(name: &str) -> Option<FontHandle> {
    let query = fontdb::Query {
        families: &[fontdb::Family::Name(name)],
        ..fontdb::Query::default()
    };
    let id = SYSTEM_FONTS.query(&query)?;
    let path = match &SYSTEM_FONTS.face(id)?.source {
        fontdb::Source::File(path) => path.clone(),
        _ => return None,
    };

    let mut db = fontdb::Database::new();
    if let Err(e) = db.load_font_file(&path) {
        debug!(path = %path.display(), error = %e, "cannot read font file");
        return None;
    }
    Some(FontHandle::Outline(OutlineFont::new(db, name.to_string())))
}

fn rasterize_builtin(text: &str, px: u32) -> TextMask {
    let scale = (px / 8).max(1) as i32;
    let advance = 8 * scale;
    let mut mask = TextMask::default();

    for (i, ch) in text.chars().enumerate() {
        let Some(rows) = BASIC_FONTS.get(ch) else {
            continue;
        };
        let pen_x = i as i32 * advance;
        for (row, bits) in rows.iter().enumerate() {
            for col in 0..8 {
                if bits & (1u8 << col) == 0 {
                    continue;
                }
                let x0 = pen_x + col * scale;
                let y0 = row as i32 * scale;
                for dy in 0..scale {
                    for dx in 0..scale {
                        mask.push(x0 + dx, y0 + dy, 255);
                    }
                }
            }
        }
    }
    mask
}

/// An installed outline face with Latin glyphs, preferring a regular sans.
#[cfg(test)]
pub(crate) fn system_font_face() -> Option<(PathBuf, String)> {
    let candidates: Vec<(PathBuf, String, bool)> = SYSTEM_FONTS
        .faces()
        .filter(|face| face.style == fontdb::Style::Normal && !face.monospaced)
        .filter_map(|face| {
            let fontdb::Source::File(path) = &face.source else {
                return None;
            };
            let (family, _) = face.families.first()?;
            let sans = ["DejaVu Sans", "Liberation Sans", "Noto Sans", "Arial", "Helvetica"]
                .contains(&family.as_str());
            Some((path.clone(), family.clone(), sans))
        })
        .collect();
    candidates
        .iter()
        .find(|(_, _, sans)| *sans)
        .or_else(|| candidates.first())
        .map(|(path, family, _)| (path.clone(), family.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_sources_fall_back_to_builtin() {
        let chain = [
            FontSource::File(PathBuf::from("/nonexistent/fonts/Nope.ttc")),
            FontSource::File(PathBuf::from("definitely-not-here.ttf")),
        ];
        assert!(resolve(&chain).is_builtin());
        assert!(resolve(&[]).is_builtin());
    }

    #[test]
    fn test_builtin_source_resolves_immediately() {
        assert!(resolve(&[FontSource::Builtin]).is_builtin());
    }

    #[test]
    fn test_builtin_label_bounds() {
        let mask = FontHandle::Builtin.rasterize("NoteApp", 12);
        let b = mask.bounds().unwrap();
        assert!(b.left >= 0 && b.top >= 0);
        assert!(b.right <= 7 * 8, "right edge {}", b.right);
        assert!(b.bottom <= 8);
        assert!(mask.coverage().iter().all(|&(_, _, a)| a == 255));
    }

    #[test]
    fn test_builtin_scales_with_size() {
        let small = FontHandle::Builtin.rasterize("N", 16).bounds().unwrap();
        let large = FontHandle::Builtin.rasterize("N", 128).bounds().unwrap();
        assert_eq!(large.width(), small.width() * 8);
        assert_eq!(large.height(), small.height() * 8);
    }

    #[test]
    fn test_empty_text_has_no_bounds() {
        assert_eq!(FontHandle::Builtin.rasterize("", 12).bounds(), None);
        assert_eq!(FontHandle::Builtin.rasterize("   ", 12).bounds(), None);
    }

    #[test]
    fn test_outline_file_resolves_and_inks() {
        let Some((path, _)) = system_font_face() else {
            eprintln!("no system outline font installed, skipping");
            return;
        };
        let mut font = resolve(&[FontSource::File(path.clone()), FontSource::Builtin]);
        assert!(!font.is_builtin(), "{} did not load", path.display());

        let mask = font.rasterize("NoteApp", 128);
        let b = mask.bounds().unwrap();
        assert!(b.width() > b.height(), "{b:?}");
        assert!(mask.coverage().iter().any(|&(_, _, a)| a == 255));
    }

    #[test]
    fn test_family_lookup_uses_system_fonts() {
        assert!(resolve(&[FontSource::Family("No Such Family 7f3a".to_string())]).is_builtin());

        let Some((_, family)) = system_font_face() else {
            eprintln!("no system outline font installed, skipping");
            return;
        };
        let font = resolve(&[FontSource::Family(family.clone()), FontSource::Builtin]);
        assert!(!font.is_builtin(), "family {family} not found");
    }
}
