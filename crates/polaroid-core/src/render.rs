//! Native card rasterizer.
//!
//! Paints a [`CardSnapshot`] the way the preview lays it out: light card
//! background, the square photo (cover-cropped), a translucent indigo tint
//! over the photo, the quote block placed by the alignment pair, and the
//! author name right-aligned under the photo. Quote and name use separate
//! [`Typeface`]s, the same files the preview registers.
//!
//! Layout is computed separately from painting ([`CardRenderer::layout`]) so
//! placement can be checked without looking at pixels.

use std::io::Cursor;
use std::path::Path;

use image::imageops::FilterType;
use image::{DynamicImage, ImageBuffer, ImageFormat, Rgba, RgbaImage};
use rusttype::{point, Font, Scale};
use tracing::debug;

use crate::editor::CardSnapshot;
use crate::error::{PolaroidError, PolaroidResult};
use crate::fonts::{Typeface, CUSTOM_FAMILY};

/// Edge length the default style was designed for
const REFERENCE_PHOTO_SIZE: f32 = 700.0;

/// Geometry and colors of a card
#[derive(Debug, Clone, PartialEq)]
pub struct CardStyle {
    pub photo_size: u32,
    pub padding: u32,
    /// Space between photo and name line
    pub gap: u32,
    pub overlay_padding_x: u32,
    pub overlay_padding_y: u32,
    pub quote_px: f32,
    /// Quote line height as a multiple of `quote_px`
    pub quote_line_height: f32,
    pub quote_max_width: u32,
    pub name_px: f32,
    pub name_line_height: f32,
    /// Extra right inset of the name line
    pub name_inset: u32,
    pub background: Rgba<u8>,
    /// Photo area color while no photo is ready
    pub blank_photo: Rgba<u8>,
    /// Overlay color; alpha is the overlay opacity
    pub tint: Rgba<u8>,
    pub quote_color: Rgba<u8>,
    pub name_color: Rgba<u8>,
}

impl Default for CardStyle {
    fn default() -> Self {
        Self {
            photo_size: 700,
            padding: 32,
            gap: 16,
            overlay_padding_x: 32,
            overlay_padding_y: 64,
            quote_px: 48.0,
            quote_line_height: 1.0,
            quote_max_width: 448,
            name_px: 60.0,
            name_line_height: 1.625,
            name_inset: 8,
            background: Rgba([244, 244, 245, 255]),
            blank_photo: Rgba([228, 228, 231, 255]),
            tint: Rgba([30, 27, 75, 77]),
            quote_color: Rgba([255, 255, 255, 255]),
            name_color: Rgba([24, 24, 27, 255]),
        }
    }
}

impl CardStyle {
    /// Default style scaled proportionally to a different photo size.
    pub fn for_photo_size(photo_size: u32) -> Self {
        let base = Self::default();
        let k = photo_size as f32 / REFERENCE_PHOTO_SIZE;
        let scale = |v: u32| (v as f32 * k).round() as u32;
        Self {
            photo_size,
            padding: scale(base.padding),
            gap: scale(base.gap),
            overlay_padding_x: scale(base.overlay_padding_x),
            overlay_padding_y: scale(base.overlay_padding_y),
            quote_px: (base.quote_px * k).max(1.0),
            quote_max_width: scale(base.quote_max_width),
            name_px: (base.name_px * k).max(1.0),
            name_inset: scale(base.name_inset),
            ..base
        }
    }

    fn quote_line_px(&self) -> u32 {
        (self.quote_px * self.quote_line_height).round() as u32
    }

    fn name_line_px(&self) -> u32 {
        (self.name_px * self.name_line_height).round() as u32
    }

    pub fn card_width(&self) -> u32 {
        self.photo_size + 2 * self.padding
    }

    /// Width available to the name; the name box is inset on both sides
    pub fn name_max_width(&self) -> u32 {
        self.photo_size.saturating_sub(2 * self.name_inset)
    }

    /// Card height with `name_lines` lines under the photo (at least one)
    pub fn card_height(&self, name_lines: usize) -> u32 {
        let lines = name_lines.max(1) as u32;
        self.padding + self.photo_size + self.gap + lines * self.name_line_px() + self.padding
    }
}

/// Which text of the card is being measured or drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRole {
    Quote,
    Name,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && y >= self.y && x < self.x + self.width as i32 && y < self.y + self.height as i32
    }
}

/// One line of text with the top-left corner of its line box
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    pub x: i32,
    pub y: i32,
    pub width: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardLayout {
    pub width: u32,
    pub height: u32,
    pub photo: Rect,
    pub quote_block: Rect,
    pub quote_lines: Vec<PlacedLine>,
    /// Name lines, each right-aligned inside the name box
    pub name_lines: Vec<PlacedLine>,
}

pub struct CardRenderer {
    quote: Typeface,
    name: Typeface,
    style: CardStyle,
}

impl CardRenderer {
    /// Renderer using the bundled quote and name typefaces.
    pub fn new(style: CardStyle) -> PolaroidResult<Self> {
        Ok(Self::with_typefaces(Typeface::bundled_quote()?, Typeface::bundled_name()?, style))
    }

    pub fn with_typefaces(quote: Typeface, name: Typeface, style: CardStyle) -> Self {
        Self { quote, name, style }
    }

    /// One font for both quote and name.
    pub fn from_font_bytes(bytes: Vec<u8>, style: CardStyle) -> PolaroidResult<Self> {
        let face = Typeface::from_bytes(CUSTOM_FAMILY, bytes)?;
        Ok(Self::with_typefaces(face.clone(), face, style))
    }

    pub fn from_font_file(path: impl AsRef<Path>, style: CardStyle) -> PolaroidResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        debug!("Loaded font from {}", path.display());
        Self::from_font_bytes(bytes, style)
    }

    pub fn style(&self) -> &CardStyle {
        &self.style
    }

    pub fn typeface(&self, role: TextRole) -> &Typeface {
        match role {
            TextRole::Quote => &self.quote,
            TextRole::Name => &self.name,
        }
    }

    /// `@font-face` rules for every typeface this renderer draws with
    pub fn font_face_css(&self) -> String {
        let mut css = self.quote.font_face_css();
        if self.name.family() != self.quote.family() {
            css.push_str(&self.name.font_face_css());
        }
        css
    }

    fn font(&self, role: TextRole) -> &Font<'static> {
        self.typeface(role).font()
    }

    /// Advance width of `text` at `px`, kerning included.
    pub fn text_width(&self, role: TextRole, px: f32, text: &str) -> f32 {
        let scale = Scale::uniform(px);
        self.font(role)
            .layout(text, scale, point(0.0, 0.0))
            .last()
            .map(|g| g.position().x + g.unpositioned().h_metrics().advance_width)
            .unwrap_or(0.0)
    }

    /// Greedy word wrap within `max_width`, keeping spaces as typed.
    ///
    /// Explicit newlines start a new line. Breaks happen at single spaces;
    /// the space a line breaks at is dropped and trailing spaces do not
    /// count towards the width. A single word wider than `max_width` keeps
    /// its own line.
    pub fn wrap_text(&self, role: TextRole, px: f32, text: &str, max_width: f32) -> Vec<String> {
        let mut lines = Vec::new();
        for paragraph in text.split('\n') {
            let mut words = paragraph.split(' ');
            let mut current = words.next().unwrap_or_default().to_string();
            for word in words {
                let candidate = format!("{} {}", current, word);
                let fits = self.text_width(role, px, candidate.trim_end()) <= max_width;
                if fits || word.is_empty() || current.trim().is_empty() {
                    current = candidate;
                } else {
                    let line = std::mem::replace(&mut current, word.to_string());
                    lines.push(line.trim_end().to_string());
                }
            }
            lines.push(current);
        }
        lines
    }

    pub fn layout(&self, card: &CardSnapshot) -> CardLayout {
        let s = &self.style;
        let width = s.card_width();
        let photo = Rect {
            x: s.padding as i32,
            y: s.padding as i32,
            width: s.photo_size,
            height: s.photo_size,
        };

        let inner_x = photo.x + s.overlay_padding_x as i32;
        let inner_y = photo.y + s.overlay_padding_y as i32;
        let inner_w = s.photo_size.saturating_sub(2 * s.overlay_padding_x);
        let inner_h = s.photo_size.saturating_sub(2 * s.overlay_padding_y);
        let wrap_width = s.quote_max_width.min(inner_w) as f32;

        let measured = self.measure_lines(TextRole::Quote, s.quote_px, &card.quote, wrap_width);

        let line_px = s.quote_line_px();
        let block_w = measured.iter().map(|(_, w)| *w).max().unwrap_or(0);
        let block_h = line_px * measured.len() as u32;

        let h_anchor = card.alignment.horizontal.anchor();
        let v_anchor = card.alignment.vertical.anchor();
        let block_x = inner_x + h_anchor.offset(inner_w as i32 - block_w as i32);
        let block_y = inner_y + v_anchor.offset(inner_h as i32 - block_h as i32);

        let quote_lines = measured
            .into_iter()
            .enumerate()
            .map(|(i, (text, w))| PlacedLine {
                x: block_x + h_anchor.offset(block_w as i32 - w as i32),
                y: block_y + (i as u32 * line_px) as i32,
                width: w,
                text,
            })
            .collect();

        let name_text = format!("\u{2013}{}", card.name);
        let name_left = (s.padding + s.name_inset) as i32;
        let name_right = name_left + s.name_max_width() as i32;
        let name_top = (s.padding + s.photo_size + s.gap) as i32;
        let name_line_px = s.name_line_px();
        // Right-aligned; an unbreakable line overflows to the right like the preview
        let name_lines: Vec<PlacedLine> = self
            .measure_lines(TextRole::Name, s.name_px, &name_text, s.name_max_width() as f32)
            .into_iter()
            .enumerate()
            .map(|(i, (text, w))| PlacedLine {
                x: (name_right - w as i32).max(name_left),
                y: name_top + (i as u32 * name_line_px) as i32,
                width: w,
                text,
            })
            .collect();

        CardLayout {
            width,
            height: s.card_height(name_lines.len()),
            photo,
            quote_block: Rect {
                x: block_x,
                y: block_y,
                width: block_w,
                height: block_h,
            },
            quote_lines,
            name_lines,
        }
    }

    /// Wrap `text` and pair each line with its visible width.
    fn measure_lines(&self, role: TextRole, px: f32, text: &str, max_width: f32) -> Vec<(String, u32)> {
        self.wrap_text(role, px, text, max_width)
            .into_iter()
            .map(|line| {
                let w = self.text_width(role, px, line.trim_end()).ceil() as u32;
                (line, w)
            })
            .collect()
    }

    pub fn render(&self, card: &CardSnapshot) -> PolaroidResult<RgbaImage> {
        let s = &self.style;
        let layout = self.layout(card);
        let mut canvas: RgbaImage = ImageBuffer::from_pixel(layout.width, layout.height, s.background);

        match &card.photo {
            Some(photo) => {
                if photo.width() == 0 || photo.height() == 0 {
                    return Err(PolaroidError::Render("photo has no pixels".to_string()));
                }
                let covered = cover_square(photo, s.photo_size);
                overlay(&mut canvas, &covered, layout.photo.x as u32, layout.photo.y as u32);
            }
            None => fill_rect(&mut canvas, layout.photo, s.blank_photo),
        }
        fill_rect(&mut canvas, layout.photo, s.tint);

        let quote_line_px = s.quote_line_px() as f32;
        for line in &layout.quote_lines {
            self.draw_line(&mut canvas, TextRole::Quote, s.quote_px, quote_line_px, line, s.quote_color);
        }
        let name_line_px = s.name_line_px() as f32;
        for line in &layout.name_lines {
            self.draw_line(&mut canvas, TextRole::Name, s.name_px, name_line_px, line, s.name_color);
        }

        debug!(
            width = layout.width,
            height = layout.height,
            quote_lines = layout.quote_lines.len(),
            name_lines = layout.name_lines.len(),
            alignment = %card.alignment,
            "Rendered card"
        );
        Ok(canvas)
    }

    /// Render and encode as PNG.
    pub fn render_png(&self, card: &CardSnapshot) -> PolaroidResult<Vec<u8>> {
        let canvas = self.render(card)?;
        let mut buffer = Vec::new();
        DynamicImage::ImageRgba8(canvas).write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)?;
        Ok(buffer)
    }

    /// Draw `line` vertically centered in its line box of `line_px`.
    fn draw_line(
        &self,
        img: &mut RgbaImage,
        role: TextRole,
        px: f32,
        line_px: f32,
        line: &PlacedLine,
        color: Rgba<u8>,
    ) {
        if line.text.trim().is_empty() {
            return;
        }
        let font = self.font(role);
        let scale = Scale::uniform(px);
        let v = font.v_metrics(scale);
        let half_leading = (line_px - (v.ascent - v.descent)) / 2.0;
        let baseline = line.y as f32 + half_leading + v.ascent;

        for glyph in font.layout(&line.text, scale, point(line.x as f32, baseline)) {
            let Some(bb) = glyph.pixel_bounding_box() else {
                continue;
            };
            glyph.draw(|gx, gy, coverage| {
                let x = gx as i32 + bb.min.x;
                let y = gy as i32 + bb.min.y;
                if x < 0 || y < 0 || x >= img.width() as i32 || y >= img.height() as i32 {
                    return;
                }
                let a = (coverage * color.0[3] as f32 / 255.0).clamp(0.0, 1.0);
                if a > 0.0 {
                    blend(img.get_pixel_mut(x as u32, y as u32), color, a);
                }
            });
        }
    }
}

impl std::fmt::Debug for CardRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CardRenderer")
            .field("quote", &self.quote)
            .field("name", &self.name)
            .field("style", &self.style)
            .finish()
    }
}

/// Center-crop to a square and resize to `size`×`size` (CSS `object-cover`).
fn cover_square(photo: &RgbaImage, size: u32) -> RgbaImage {
    let min_dim = photo.width().min(photo.height());
    let left = (photo.width() - min_dim) / 2;
    let top = (photo.height() - min_dim) / 2;
    let cropped = image::imageops::crop_imm(photo, left, top, min_dim, min_dim).to_image();
    if min_dim == size {
        cropped
    } else {
        image::imageops::resize(&cropped, size, size, FilterType::Lanczos3)
    }
}

fn blend(dst: &mut Rgba<u8>, src: Rgba<u8>, a: f32) {
    let inv = 1.0 - a;
    for c in 0..3 {
        dst.0[c] = (src.0[c] as f32 * a + dst.0[c] as f32 * inv).round() as u8;
    }
    dst.0[3] = 255;
}

fn overlay(base: &mut RgbaImage, over: &RgbaImage, x: u32, y: u32) {
    for (ox, oy, p) in over.enumerate_pixels() {
        let (bx, by) = (x + ox, y + oy);
        if bx >= base.width() || by >= base.height() {
            continue;
        }
        let a = p.0[3] as f32 / 255.0;
        if a > 0.0 {
            blend(base.get_pixel_mut(bx, by), *p, a);
        }
    }
}

fn fill_rect(img: &mut RgbaImage, rect: Rect, color: Rgba<u8>) {
    let a = color.0[3] as f32 / 255.0;
    let x0 = rect.x.max(0) as u32;
    let y0 = rect.y.max(0) as u32;
    let x1 = ((rect.x + rect.width as i32).max(0) as u32).min(img.width());
    let y1 = ((rect.y + rect.height as i32).max(0) as u32).min(img.height());
    for y in y0..y1 {
        for x in x0..x1 {
            blend(img.get_pixel_mut(x, y), color, a);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alignment::{Alignment, Direction, HorizontalAlign, VerticalAlign};
    use std::sync::Arc;

    fn renderer() -> CardRenderer {
        CardRenderer::new(CardStyle::default()).unwrap()
    }

    fn card(quote: &str, direction: Direction) -> CardSnapshot {
        CardSnapshot::new(quote, "Ben", direction.alignment())
    }

    fn is_ink(p: &Rgba<u8>) -> bool {
        p.0[0] >= 240 && p.0[1] >= 240 && p.0[2] >= 240
    }

    /// Count near-white pixels per quadrant of the photo area: [tl, tr, bl, br]
    fn ink_quadrants(img: &RgbaImage, photo: Rect) -> [usize; 4] {
        let mut counts = [0usize; 4];
        let mid_x = photo.x + photo.width as i32 / 2;
        let mid_y = photo.y + photo.height as i32 / 2;
        for (x, y, p) in img.enumerate_pixels() {
            let (x, y) = (x as i32, y as i32);
            if !photo.contains(x, y) || !is_ink(p) {
                continue;
            }
            let idx = (if y < mid_y { 0 } else { 2 }) + (if x < mid_x { 0 } else { 1 });
            counts[idx] += 1;
        }
        counts
    }

    #[test]
    fn test_card_dimensions() {
        let r = renderer();
        let s = r.style();
        let img = r.render(&card("Hello", Direction::Center)).unwrap();
        assert_eq!(img.width(), s.photo_size + 2 * s.padding);
        assert_eq!(
            img.height(),
            s.padding + s.photo_size + s.gap + (s.name_px * s.name_line_height).round() as u32 + s.padding
        );
        assert_eq!(img.height(), s.card_height(1));
    }

    #[test]
    fn test_top_left_quote_lands_top_left() {
        let r = renderer();
        let c = card("Hi", Direction::NorthWest);
        let img = r.render(&c).unwrap();
        let [tl, tr, bl, br] = ink_quadrants(&img, r.layout(&c).photo);
        assert!(tl > 0, "no ink in top-left");
        assert_eq!((tr, bl, br), (0, 0, 0));
    }

    #[test]
    fn test_bottom_right_quote_lands_bottom_right() {
        let r = renderer();
        let c = card("Hi", Direction::SouthEast);
        let img = r.render(&c).unwrap();
        let [tl, tr, bl, br] = ink_quadrants(&img, r.layout(&c).photo);
        assert!(br > 0, "no ink in bottom-right");
        assert_eq!((tl, tr, bl), (0, 0, 0));
    }

    #[test]
    fn test_horizontal_anchor_ordering() {
        let r = renderer();
        let x = |h| {
            let c = CardSnapshot::new("Hello", "Ben", Alignment::new(VerticalAlign::Center, h));
            r.layout(&c).quote_block.x
        };
        let (left, center, right) = (x(HorizontalAlign::Left), x(HorizontalAlign::Center), x(HorizontalAlign::Right));
        assert!(left < center && center < right);

        let s = r.style();
        assert_eq!(left, (s.padding + s.overlay_padding_x) as i32);
    }

    #[test]
    fn test_vertical_anchor_ordering() {
        let r = renderer();
        let y = |v| {
            let c = CardSnapshot::new("Hello", "Ben", Alignment::new(v, HorizontalAlign::Center));
            r.layout(&c).quote_block.y
        };
        assert!(y(VerticalAlign::Top) < y(VerticalAlign::Center));
        assert!(y(VerticalAlign::Center) < y(VerticalAlign::Bottom));
    }

    #[test]
    fn test_name_is_right_aligned_regardless_of_alignment() {
        let r = renderer();
        let names: Vec<Vec<PlacedLine>> = Direction::GRID
            .iter()
            .map(|d| r.layout(&card("Hello", *d)).name_lines)
            .collect();
        assert!(names.windows(2).all(|w| w[0] == w[1]));

        let s = r.style();
        assert_eq!(names[0].len(), 1);
        let name = &names[0][0];
        assert_eq!(name.text, "\u{2013}Ben");
        assert_eq!(name.x + name.width as i32, (s.card_width() - s.padding - s.name_inset) as i32);
        assert_eq!(name.y, (s.padding + s.photo_size + s.gap) as i32);
    }

    #[test]
    fn test_long_name_wraps_inside_card() {
        let r = renderer();
        let s = r.style();
        let left = (s.padding + s.name_inset) as i32;
        let right = (s.card_width() - s.padding - s.name_inset) as i32;

        for name in ["Johann Wolfgang von Goethe", "Johann Wolfgang von Goethe und Johann Sebastian Bach"] {
            let layout = r.layout(&CardSnapshot::new("Hi", name, Alignment::default()));
            for line in &layout.name_lines {
                assert!(line.x >= left, "name starts off the card at x={}", line.x);
                assert!(line.x + line.width as i32 <= right, "name line too wide: {}", line.text);
                assert_eq!(line.x + line.width as i32, right, "name line not right-aligned");
            }
            assert_eq!(layout.height, s.card_height(layout.name_lines.len()));
        }

        let snapshot = CardSnapshot::new(
            "Hi",
            "Johann Wolfgang von Goethe und Johann Sebastian Bach",
            Alignment::default(),
        );
        let long = r.layout(&snapshot);
        assert!(long.name_lines.len() > 1);
        assert_eq!(long.name_lines[1].y - long.name_lines[0].y, (s.name_px * s.name_line_height).round() as i32);

        let img = r.render(&snapshot).unwrap();
        assert_eq!(img.height(), s.card_height(long.name_lines.len()));
    }

    #[test]
    fn test_unbreakable_name_starts_at_left_edge() {
        let r = renderer();
        let s = r.style();
        let layout = r.layout(&CardSnapshot::new(
            "Hi",
            "Pneumonoultramicroscopicsilicovolcanoconiosis",
            Alignment::default(),
        ));
        assert_eq!(layout.name_lines.len(), 1);
        assert_eq!(layout.name_lines[0].x, (s.padding + s.name_inset) as i32);
    }

    #[test]
    fn test_quote_and_name_use_different_typefaces() {
        let r = renderer();
        assert_ne!(r.typeface(TextRole::Quote).family(), r.typeface(TextRole::Name).family());
        let text = "Several people are typing.";
        assert_ne!(
            r.text_width(TextRole::Quote, 48.0, text),
            r.text_width(TextRole::Name, 48.0, text)
        );

        let css = r.font_face_css();
        assert_eq!(css.matches("@font-face").count(), 2);
        assert!(css.contains("'Polaroid Quote'") && css.contains("'Polaroid Name'"));
    }

    #[test]
    fn test_font_override_applies_to_both_roles() {
        let bytes = std::fs::read(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/fonts/DejaVuSerif-Italic.ttf")).unwrap();
        let r = CardRenderer::from_font_bytes(bytes, CardStyle::default()).unwrap();
        assert_eq!(r.typeface(TextRole::Quote).family(), r.typeface(TextRole::Name).family());
        assert_eq!(r.font_face_css().matches("@font-face").count(), 1);
    }

    #[test]
    fn test_wrap_respects_max_width() {
        let r = renderer();
        let text = "Several people are typing and nobody is listening to what anyone says";
        let lines = r.wrap_text(TextRole::Quote, 48.0, text, 448.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(r.text_width(TextRole::Quote, 48.0, line) <= 448.0, "line too wide: {}", line);
        }
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn test_wrap_keeps_newlines_and_long_words() {
        let r = renderer();
        let lines = r.wrap_text(TextRole::Quote, 48.0, "one\ntwo", 448.0);
        assert_eq!(lines, vec!["one".to_string(), "two".to_string()]);

        let long = "Pneumonoultramicroscopicsilicovolcanoconiosis";
        let lines = r.wrap_text(TextRole::Quote, 48.0, long, 100.0);
        assert_eq!(lines, vec![long.to_string()]);
    }

    #[test]
    fn test_wrap_keeps_runs_of_spaces() {
        let r = renderer();
        let lines = r.wrap_text(TextRole::Quote, 48.0, "a  b", 448.0);
        assert_eq!(lines, vec!["a  b".to_string()]);

        let lines = r.wrap_text(TextRole::Quote, 48.0, "  indented", 448.0);
        assert_eq!(lines, vec!["  indented".to_string()]);

        let spaced = r.layout(&CardSnapshot::new("a    b", "Ben", Alignment::default()));
        let single = r.layout(&CardSnapshot::new("a b", "Ben", Alignment::default()));
        assert!(spaced.quote_block.width > single.quote_block.width);
    }

    #[test]
    fn test_photo_is_covered_and_tinted() {
        let r = CardRenderer::new(CardStyle::for_photo_size(100)).unwrap();
        let red: RgbaImage = ImageBuffer::from_pixel(10, 20, Rgba([255, 0, 0, 255]));
        let c = card("x", Direction::NorthWest).with_photo(Arc::new(red));
        let img = r.render(&c).unwrap();
        let photo = r.layout(&c).photo;
        let p = img.get_pixel(
            (photo.x + photo.width as i32 - 5) as u32,
            (photo.y + photo.height as i32 - 5) as u32,
        );
        assert!(p.0[0] > 150 && p.0[1] < 40 && p.0[2] < 40, "unexpected pixel {:?}", p);
        assert!(p.0[0] < 255, "tint missing");
    }

    #[test]
    fn test_scaled_style() {
        let s = CardStyle::for_photo_size(350);
        assert_eq!(s.padding, 16);
        assert_eq!(s.quote_max_width, 224);
        assert_eq!(s.quote_px, 24.0);
    }

    #[test]
    fn test_png_signature() {
        let r = CardRenderer::new(CardStyle::for_photo_size(64)).unwrap();
        let png = r.render_png(&card("Hello", Direction::Center)).unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_rejects_non_font_bytes() {
        let err = CardRenderer::from_font_bytes(vec![1, 2, 3], CardStyle::default()).unwrap_err();
        assert!(matches!(err, PolaroidError::Font(_)));
    }
}
