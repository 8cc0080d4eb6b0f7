use std::borrow::Cow;
use std::cell::RefCell;

use crate::{
    foundation::core::Size,
    foundation::error::{VidmarkError, VidmarkResult},
    plan::frame_plan::TextMeasure,
};

struct Contexts {
    font: parley::FontContext,
    layout: parley::LayoutContext<()>,
}

/// Text extents from real shaping with a caller-supplied font.
///
/// Label boxes sized this way match what a renderer using the same font will draw.
pub struct FontTextMeasure {
    cx: RefCell<Contexts>,
    family_name: String,
}

impl FontTextMeasure {
    /// Register `font_bytes` (TTF/OTF) and measure with its first family.
    pub fn from_font_bytes(font_bytes: &[u8]) -> VidmarkResult<Self> {
        let mut font = parley::FontContext::default();
        let families = font
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.to_vec()), None);
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            VidmarkError::validation("no font families registered from font bytes")
        })?;
        let family_name = font
            .collection
            .family_name(family_id)
            .ok_or_else(|| VidmarkError::validation("registered font family has no name"))?
            .to_string();

        Ok(Self {
            cx: RefCell::new(Contexts {
                font,
                layout: parley::LayoutContext::new(),
            }),
            family_name,
        })
    }

    /// Read a font file from disk.
    pub fn from_path(path: impl AsRef<std::path::Path>) -> VidmarkResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| {
            VidmarkError::validation(format!("read font '{}': {e}", path.display()))
        })?;
        Self::from_font_bytes(&bytes)
    }

    /// Family used for measuring.
    pub fn family_name(&self) -> &str {
        &self.family_name
    }
}

impl TextMeasure for FontTextMeasure {
    fn measure(&self, text: &str, px: f64) -> Size {
        if text.is_empty() || !(px.is_finite() && px > 0.0) {
            return Size::ZERO;
        }
        let mut guard = self.cx.borrow_mut();
        let Contexts { font, layout } = &mut *guard;

        let mut builder = layout.ranged_builder(font, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(Cow::Owned(self.family_name.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(px as f32));
        let mut laid_out: parley::Layout<()> = builder.build(text);
        laid_out.break_all_lines(None);

        Size::new(f64::from(laid_out.width()), f64::from(laid_out.height()))
    }
}

impl std::fmt::Debug for FontTextMeasure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontTextMeasure")
            .field("family_name", &self.family_name)
            .finish_non_exhaustive()
    }
}
