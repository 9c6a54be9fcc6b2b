//! RGBA-Farbe mit verlustfreier `#RRGGBBAA`-Kodierung und Farbnamen.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Erlaubte Hex-Token: `RRGGBB` oder `RRGGBBAA`, optional mit `#`.
static HEX_TOKEN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^#?([0-9A-Fa-f]{6}|[0-9A-Fa-f]{8})$").ok());

/// 8-Bit-RGBA-Farbe.
///
/// Intern als `u8` gespeichert, damit der Roundtrip über `#RRGGBBAA` exakt ist.
/// Serialisiert als Hex-String (JSON-Dokument und TOML-Optionen).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const CYAN: Color = Color::rgb(0, 255, 255);
    pub const MAGENTA: Color = Color::rgb(255, 0, 255);
    pub const GRAY: Color = Color::rgb(128, 128, 128);
    pub const ORANGE: Color = Color::rgb(255, 128, 0);
    pub const PURPLE: Color = Color::rgb(128, 0, 128);
    /// Standard-Highlight für selektierte Shapes.
    pub const DARK_ORANGE: Color = Color::rgb(255, 140, 0);

    /// Benannte Farben in Prüfreihenfolge (erste Übereinstimmung gewinnt).
    const NAMED: [(&'static str, Color); 11] = [
        ("Red", Color::RED),
        ("Green", Color::GREEN),
        ("Blue", Color::BLUE),
        ("White", Color::WHITE),
        ("Black", Color::BLACK),
        ("Yellow", Color::YELLOW),
        ("Cyan", Color::CYAN),
        ("Magenta", Color::MAGENTA),
        ("Gray", Color::GRAY),
        ("Orange", Color::ORANGE),
        ("Purple", Color::PURPLE),
    ];

    /// Voll deckende Farbe aus 8-Bit-Kanälen.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Farbe aus 8-Bit-Kanälen inkl. Alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Farbe aus `[0, 1]`-Kanälen; Werte außerhalb werden geklemmt.
    pub fn from_rgba_f32(rgba: [f32; 4]) -> Self {
        let to_u8 = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self::rgba(to_u8(rgba[0]), to_u8(rgba[1]), to_u8(rgba[2]), to_u8(rgba[3]))
    }

    /// Kanäle als `[0, 1]`-Floats.
    pub fn to_rgba_f32(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }

    /// `#RRGGBBAA` in Großbuchstaben.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
    }

    /// Parst `#RRGGBB` oder `#RRGGBBAA` (das `#` ist optional).
    pub fn from_hex(token: &str) -> Option<Self> {
        let regex = HEX_TOKEN.as_ref()?;
        if !regex.is_match(token) {
            return None;
        }
        let digits = token.trim_start_matches('#');
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        let alpha = if digits.len() == 8 { channel(6)? } else { 255 };
        Some(Self::rgba(channel(0)?, channel(2)?, channel(4)?, alpha))
    }

    /// Sucht eine benannte Farbe (Groß-/Kleinschreibung egal).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::NAMED
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, c)| *c)
    }

    /// Name der Farbe, falls sie einer benannten Farbe entspricht.
    pub fn name(self) -> Option<&'static str> {
        Self::NAMED.iter().find(|(_, c)| *c == self).map(|(n, _)| *n)
    }

    /// Token für Kommandozeilen und `GetValues`: Name, sonst Hex.
    pub fn to_token(self) -> String {
        match self.name() {
            Some(name) => name.to_string(),
            None => self.to_hex(),
        }
    }

    /// Löst ein Farb-Token (Name oder Hex) auf. Unbekannte Token → Schwarz.
    pub fn parse_token(token: &str) -> Self {
        Self::from_name(token)
            .or_else(|| Self::from_hex(token))
            .unwrap_or_else(|| {
                log::debug!("Unbekanntes Farb-Token '{}', verwende Schwarz", token);
                Self::BLACK
            })
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_hex(&value).ok_or_else(|| format!("Ungültige Farbe: '{}'", value))
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_roundtrip_is_lossless() {
        let color = Color::rgba(18, 52, 86, 120);
        assert_eq!(color.to_hex(), "#12345678");
        assert_eq!(Color::from_hex(&color.to_hex()), Some(color));
    }

    #[test]
    fn hex_without_alpha_is_opaque() {
        assert_eq!(Color::from_hex("ff8000"), Some(Color::ORANGE));
        assert_eq!(Color::from_hex("#FF8000"), Some(Color::ORANGE));
    }

    #[test]
    fn invalid_hex_is_rejected() {
        assert_eq!(Color::from_hex("#12345"), None);
        assert_eq!(Color::from_hex("#GG0000"), None);
        assert_eq!(Color::from_hex(""), None);
    }

    #[test]
    fn named_colors_ignore_case() {
        assert_eq!(Color::from_name("red"), Some(Color::RED));
        assert_eq!(Color::from_name("PURPLE"), Some(Color::PURPLE));
        assert_eq!(Color::from_name("teal"), None);
    }

    #[test]
    fn unknown_token_falls_back_to_black() {
        assert_eq!(Color::parse_token("irgendwas"), Color::BLACK);
        assert_eq!(Color::parse_token("Blue"), Color::BLUE);
        assert_eq!(Color::parse_token("#00FF0080"), Color::rgba(0, 255, 0, 128));
    }

    #[test]
    fn token_prefers_name_over_hex() {
        assert_eq!(Color::GREEN.to_token(), "Green");
        assert_eq!(Color::rgb(1, 2, 3).to_token(), "#010203FF");
    }

    #[test]
    fn float_channels_roundtrip() {
        let color = Color::rgba(0, 128, 255, 64);
        assert_eq!(Color::from_rgba_f32(color.to_rgba_f32()), color);
    }

    #[test]
    fn serde_uses_hex_string() {
        let json = serde_json::to_string(&Color::RED).expect("serialisierbar");
        assert_eq!(json, "\"#FF0000FF\"");
        let back: Color = serde_json::from_str(&json).expect("deserialisierbar");
        assert_eq!(back, Color::RED);
        assert!(serde_json::from_str::<Color>("\"nope\"").is_err());
    }
}
