//! Typefaces shared by the rasterizer and the webview preview.
//!
//! The preview registers the exact font files the rasterizer measures with,
//! through `@font-face` rules carrying the files as data URIs, so a quote
//! breaks into the same lines on screen and in the exported PNG.

use std::fmt;
use std::sync::Arc;

use base64::Engine;
use rusttype::Font;

use crate::error::{PolaroidError, PolaroidResult};

const QUOTE_FONT: &[u8] = include_bytes!("../assets/fonts/DejaVuSansCondensed-Oblique.ttf");
const NAME_FONT: &[u8] = include_bytes!("../assets/fonts/DejaVuSerif-Italic.ttf");

pub const QUOTE_FAMILY: &str = "Polaroid Quote";
pub const NAME_FAMILY: &str = "Polaroid Name";
/// Family used for a `--font` override
pub const CUSTOM_FAMILY: &str = "Polaroid Custom";

/// A parsed font together with its raw file and CSS family name
#[derive(Clone)]
pub struct Typeface {
    family: String,
    data: Arc<[u8]>,
    font: Font<'static>,
}

impl Typeface {
    pub fn from_bytes(family: impl Into<String>, bytes: Vec<u8>) -> PolaroidResult<Self> {
        let data: Arc<[u8]> = Arc::from(bytes.as_slice());
        let font = Font::try_from_vec(bytes)
            .ok_or_else(|| PolaroidError::Font("not a TrueType/OpenType font".to_string()))?;
        Ok(Self {
            family: family.into(),
            data,
            font,
        })
    }

    /// Oblique sans used for quotes
    pub fn bundled_quote() -> PolaroidResult<Self> {
        Self::from_bytes(QUOTE_FAMILY, QUOTE_FONT.to_vec())
    }

    /// Italic serif used for author names
    pub fn bundled_name() -> PolaroidResult<Self> {
        Self::from_bytes(NAME_FAMILY, NAME_FONT.to_vec())
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn font(&self) -> &Font<'static> {
        &self.font
    }

    /// `@font-face` rule registering this exact file under [`Self::family`]
    pub fn font_face_css(&self) -> String {
        let encoded = base64::engine::general_purpose::STANDARD.encode(&self.data);
        format!(
            "@font-face {{ font-family: '{}'; src: url(data:font/ttf;base64,{}); }}\n",
            self.family, encoded
        )
    }
}

impl fmt::Debug for Typeface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Typeface")
            .field("family", &self.family)
            .field("bytes", &self.data.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_faces_load() {
        let quote = Typeface::bundled_quote().unwrap();
        let name = Typeface::bundled_name().unwrap();
        assert_eq!(quote.family(), QUOTE_FAMILY);
        assert_eq!(name.family(), NAME_FAMILY);
        assert_ne!(QUOTE_FONT, NAME_FONT);
    }

    #[test]
    fn test_font_face_embeds_same_file() {
        let quote = Typeface::bundled_quote().unwrap();
        let css = quote.font_face_css();
        assert!(css.starts_with("@font-face { font-family: 'Polaroid Quote';"));

        let start = css.find("base64,").unwrap() + "base64,".len();
        let end = css[start..].find(')').unwrap() + start;
        let decoded = base64::engine::general_purpose::STANDARD
            .decode(&css[start..end])
            .unwrap();
        assert_eq!(decoded, QUOTE_FONT);
    }

    #[test]
    fn test_rejects_garbage() {
        let err = Typeface::from_bytes(CUSTOM_FAMILY, vec![0, 1, 2]).unwrap_err();
        assert!(matches!(err, PolaroidError::Font(_)));
    }
}
