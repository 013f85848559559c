//! Random photo source.
//!
//! The default source asks a picsum-style endpoint for `{endpoint}/{size}`,
//! follows the redirect to a concrete photo, and keeps both the resolved
//! address and the body. The body is decoded once here so the preview and
//! the PNG export never have to fetch or decode it again.

use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use base64::Engine;
use image::{ImageFormat, RgbaImage};
use tracing::{debug, info};

use crate::config::PolaroidConfig;
use crate::error::{PolaroidError, PolaroidResult};

/// A decoded photo together with the address it was resolved to
#[derive(Clone)]
pub struct FetchedImage {
    url: String,
    bytes: Arc<[u8]>,
    format: ImageFormat,
    pixels: Arc<RgbaImage>,
}

impl FetchedImage {
    /// Decode `bytes`, remembering the resolved `url`.
    pub fn from_bytes(url: impl Into<String>, bytes: Vec<u8>) -> PolaroidResult<Self> {
        let format = image::guess_format(&bytes)?;
        let pixels = image::load_from_memory_with_format(&bytes, format)?.to_rgba8();
        Ok(Self {
            url: url.into(),
            bytes: bytes.into(),
            format,
            pixels: Arc::new(pixels),
        })
    }

    /// Load a photo from disk; the URL becomes a `file://` address.
    pub fn from_path(path: impl AsRef<std::path::Path>) -> PolaroidResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        Self::from_bytes(format!("file://{}", path.display()), bytes)
    }

    /// The resolved resource locator
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn pixels(&self) -> &Arc<RgbaImage> {
        &self.pixels
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    pub fn mime_type(&self) -> &'static str {
        self.format.to_mime_type()
    }

    /// Base64 data URI for embedding in an `img` element
    pub fn data_uri(&self) -> String {
        let encoded = base64::engine::general_purpose::STANDARD.encode(&self.bytes);
        format!("data:{};base64,{}", self.mime_type(), encoded)
    }
}

impl fmt::Debug for FetchedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FetchedImage")
            .field("url", &self.url)
            .field("bytes", &self.bytes.len())
            .field("format", &self.format)
            .field("dimensions", &self.dimensions())
            .finish()
    }
}

impl PartialEq for FetchedImage {
    fn eq(&self, other: &Self) -> bool {
        self.url == other.url && self.bytes == other.bytes
    }
}

/// Something that can produce a random photo
pub trait ImageSource: Send + Sync {
    fn fetch(&self) -> impl Future<Output = PolaroidResult<FetchedImage>> + Send;
}

/// Random square photos from a picsum-compatible endpoint
#[derive(Clone, Debug)]
pub struct PicsumSource {
    client: reqwest::Client,
    request_url: String,
}

impl PicsumSource {
    pub fn new(config: &PolaroidConfig) -> PolaroidResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()?;
        Ok(Self {
            client,
            request_url: config.image_url(),
        })
    }

    /// The address requested on every fetch (before redirects)
    pub fn request_url(&self) -> &str {
        &self.request_url
    }
}

impl ImageSource for PicsumSource {
    async fn fetch(&self) -> PolaroidResult<FetchedImage> {
        debug!("Requesting random photo from {}", self.request_url);
        let response = self.client.get(&self.request_url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PolaroidError::Fetch(format!(
                "{} answered {}",
                self.request_url, status
            )));
        }

        let url = response.url().to_string();
        let bytes = response.bytes().await?.to_vec();
        if bytes.is_empty() {
            return Err(PolaroidError::Fetch(format!("{} returned an empty body", url)));
        }

        let image = FetchedImage::from_bytes(url, bytes)?;
        info!(url = %image.url(), dimensions = ?image.dimensions(), "Fetched random photo");
        Ok(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgba};
    use std::io::Cursor;

    fn png_bytes(w: u32, h: u32) -> Vec<u8> {
        let img: RgbaImage = ImageBuffer::from_pixel(w, h, Rgba([10, 20, 30, 255]));
        let mut buf = Vec::new();
        img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png).unwrap();
        buf
    }

    #[test]
    fn test_from_bytes_decodes() {
        let image = FetchedImage::from_bytes("https://example.test/id/1/8/4", png_bytes(8, 4)).unwrap();
        assert_eq!(image.dimensions(), (8, 4));
        assert_eq!(image.mime_type(), "image/png");
        assert_eq!(image.url(), "https://example.test/id/1/8/4");
    }

    #[test]
    fn test_from_bytes_rejects_garbage() {
        let err = FetchedImage::from_bytes("x", b"not an image".to_vec()).unwrap_err();
        assert!(matches!(err, PolaroidError::Image(_)));
    }

    #[test]
    fn test_data_uri_prefix() {
        let image = FetchedImage::from_bytes("u", png_bytes(2, 2)).unwrap();
        assert!(image.data_uri().starts_with("data:image/png;base64,iVBOR"));
    }

    #[test]
    fn test_request_url_from_config() {
        let config = PolaroidConfig {
            endpoint: "https://picsum.photos/".to_string(),
            image_size: 320,
            ..PolaroidConfig::default()
        };
        let source = PicsumSource::new(&config).unwrap();
        assert_eq!(source.request_url(), "https://picsum.photos/320");
    }
}
