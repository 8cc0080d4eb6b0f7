use crate::foundation::error::{VidmarkError, VidmarkResult};

/// Straight-alpha RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque color from RGB channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Relative luminance in `[0, 1]` using Rec. 601 weights.
    pub fn luminance(self) -> f64 {
        (0.299 * f64::from(self.r) + 0.587 * f64::from(self.g) + 0.114 * f64::from(self.b))
            / 255.0
    }

    /// Dark colors need a light backdrop to stay readable.
    pub fn is_dark(self) -> bool {
        self.luminance() < 0.5
    }
}

/// A `#RRGGBB` / `#RRGGBBAA` color as authored.
///
/// The authored string is kept verbatim so records round-trip through the render contract
/// unchanged; parsing happens once at construction.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor {
    raw: String,
    rgba: [u8; 4],
}

impl HexColor {
    /// Parse a hex color. Accepts an optional leading `#`, case-insensitive.
    pub fn parse(s: impl Into<String>) -> VidmarkResult<Self> {
        let raw = s.into();
        let rgba = parse_hex(&raw).map_err(VidmarkError::validation)?;
        Ok(Self { raw, rgba })
    }

    pub(crate) fn from_parts(raw: &str, rgba: [u8; 4]) -> Self {
        Self {
            raw: raw.to_owned(),
            rgba,
        }
    }

    /// The authored string.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Parsed channels.
    pub fn rgba8(&self) -> Rgba8 {
        let [r, g, b, a] = self.rgba;
        Rgba8 { r, g, b, a }
    }
}

impl std::fmt::Display for HexColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

impl TryFrom<String> for HexColor {
    type Error = VidmarkError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<HexColor> for String {
    fn from(value: HexColor) -> Self {
        value.raw
    }
}

fn parse_hex(s: &str) -> Result<[u8; 4], String> {
    let t = s.trim();
    let t = t.strip_prefix('#').unwrap_or(t);

    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    if !t.is_ascii() {
        return Err(format!("invalid hex color \"{s}\""));
    }
    match t.len() {
        6 => Ok([
            hex_byte(&t[0..2])?,
            hex_byte(&t[2..4])?,
            hex_byte(&t[4..6])?,
            255,
        ]),
        8 => Ok([
            hex_byte(&t[0..2])?,
            hex_byte(&t[2..4])?,
            hex_byte(&t[4..6])?,
            hex_byte(&t[6..8])?,
        ]),
        _ => Err(format!(
            "hex color \"{s}\" must be #RRGGBB or #RRGGBBAA (case-insensitive)"
        )),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/color.rs"]
mod tests;
