//! Fixed tile color palette shared by the generators, renderer and editor.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

pub const NEGRO: &str = "Negro";
pub const GRIS: &str = "Gris";
pub const GRIS_OSCURO: &str = "Gris Oscuro";
pub const AZUL: &str = "Azul";
pub const CELESTE: &str = "Celeste";
pub const AMARILLO: &str = "Amarillo";
pub const VERDE: &str = "Verde";
pub const ROJO: &str = "Rojo";

/// Color used for cells whose name is not in the palette
pub const FALLBACK_HEX: &str = "#D9D9D9";

static STANDARD: Lazy<Palette> = Lazy::new(|| {
    Palette::new(vec![
        PaletteEntry::new(NEGRO, "#000000", "Ng"),
        PaletteEntry::new(GRIS, "#B0B0B0", "Gr"),
        PaletteEntry::new(GRIS_OSCURO, "#4F4F4F", "GO"),
        PaletteEntry::new(AZUL, "#0070C0", "Az"),
        PaletteEntry::new(CELESTE, "#00B0F0", "Ce"),
        PaletteEntry::new(AMARILLO, "#FFFF00", "Am"),
        PaletteEntry::new(VERDE, "#00B050", "Ve"),
        PaletteEntry::new(ROJO, "#FF0000", "Rj"),
    ])
});

/// The palette every design uses
pub fn standard() -> &'static Palette {
    &STANDARD
}

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    /// Parse `#RRGGBB` (leading `#` optional)
    pub fn from_hex(hex: &str) -> Option<Rgb> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Rgb {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    pub fn fallback() -> Rgb {
        Rgb {
            r: 0xD9,
            g: 0xD9,
            b: 0xD9,
        }
    }

    /// Perceived brightness, used to pick readable text on top of a tile
    pub fn is_light(&self) -> bool {
        let luma = 0.299 * self.r as f64 + 0.587 * self.g as f64 + 0.114 * self.b as f64;
        luma > 140.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteEntry {
    pub name: &'static str,
    pub hex: &'static str,
    /// Two-character code for text grids
    pub code: &'static str,
}

impl PaletteEntry {
    const fn new(name: &'static str, hex: &'static str, code: &'static str) -> Self {
        Self { name, hex, code }
    }

    pub fn rgb(&self) -> Rgb {
        Rgb::from_hex(self.hex).unwrap_or_else(Rgb::fallback)
    }
}

/// Result of a palette lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorLookup<'a> {
    Found(&'a PaletteEntry),
    NotFound,
}

impl<'a> ColorLookup<'a> {
    pub fn is_found(&self) -> bool {
        matches!(self, ColorLookup::Found(_))
    }

    pub fn entry(&self) -> Option<&'a PaletteEntry> {
        match self {
            ColorLookup::Found(entry) => Some(entry),
            ColorLookup::NotFound => None,
        }
    }
}

/// Ordered, read-only mapping from color name to display color
#[derive(Debug, Clone)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
}

impl Palette {
    pub fn new(entries: Vec<PaletteEntry>) -> Self {
        Self { entries }
    }

    pub fn lookup(&self, name: &str) -> ColorLookup<'_> {
        match self.entries.iter().find(|entry| entry.name == name) {
            Some(entry) => ColorLookup::Found(entry),
            None => ColorLookup::NotFound,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_found()
    }

    /// Names in palette order, the allowed values for each editor cell
    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|entry| entry.name).collect()
    }

    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The name following `name` in palette order, wrapping around.
    /// Unknown names restart at the first entry.
    pub fn next_name(&self, name: &str) -> &'static str {
        let next = self
            .entries
            .iter()
            .position(|entry| entry.name == name)
            .map(|idx| (idx + 1) % self.entries.len())
            .unwrap_or(0);
        self.entries[next].name
    }
}
