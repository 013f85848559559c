//! Quote placement within the photo area.
//!
//! An [`Alignment`] is a (vertical, horizontal) pair. Both halves are closed
//! enums, so only the nine pairs of the 3×3 grid are representable. Each pair
//! maps to a fixed set of flexbox directives for the webview preview and to a
//! pair of [`Anchor`]s for the PNG rasterizer, so both agree on placement.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PolaroidError;

/// Vertical position of the quote block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    Top,
    #[default]
    Center,
    Bottom,
}

/// Horizontal position of the quote block (and its text alignment)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// Where along an axis a block sits inside its container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Center,
    End,
}

impl Anchor {
    /// Offset of a block inside a container with `free` spare pixels.
    ///
    /// `free` may be negative when the block overflows; the block then
    /// overflows symmetrically for `Center` and towards the far edge
    /// for `Start`.
    pub fn offset(self, free: i32) -> i32 {
        match self {
            Anchor::Start => 0,
            Anchor::Center => free / 2,
            Anchor::End => free,
        }
    }
}

impl VerticalAlign {
    pub const ALL: [VerticalAlign; 3] = [VerticalAlign::Top, VerticalAlign::Center, VerticalAlign::Bottom];

    pub fn anchor(self) -> Anchor {
        match self {
            VerticalAlign::Top => Anchor::Start,
            VerticalAlign::Center => Anchor::Center,
            VerticalAlign::Bottom => Anchor::End,
        }
    }

    /// Cross-axis flexbox value
    pub fn align_items(self) -> &'static str {
        match self {
            VerticalAlign::Top => "flex-start",
            VerticalAlign::Center => "center",
            VerticalAlign::Bottom => "flex-end",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            VerticalAlign::Top => "top",
            VerticalAlign::Center => "center",
            VerticalAlign::Bottom => "bottom",
        }
    }
}

impl HorizontalAlign {
    pub const ALL: [HorizontalAlign; 3] =
        [HorizontalAlign::Left, HorizontalAlign::Center, HorizontalAlign::Right];

    pub fn anchor(self) -> Anchor {
        match self {
            HorizontalAlign::Left => Anchor::Start,
            HorizontalAlign::Center => Anchor::Center,
            HorizontalAlign::Right => Anchor::End,
        }
    }

    /// Main-axis flexbox value
    pub fn justify_content(self) -> &'static str {
        match self {
            HorizontalAlign::Left => "flex-start",
            HorizontalAlign::Center => "center",
            HorizontalAlign::Right => "flex-end",
        }
    }

    pub fn text_align(self) -> &'static str {
        match self {
            HorizontalAlign::Left => "left",
            HorizontalAlign::Center => "center",
            HorizontalAlign::Right => "right",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HorizontalAlign::Left => "left",
            HorizontalAlign::Center => "center",
            HorizontalAlign::Right => "right",
        }
    }
}

/// Layout directives applied to the quote overlay container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutDirectives {
    pub align_items: &'static str,
    pub justify_content: &'static str,
    pub text_align: &'static str,
}

impl LayoutDirectives {
    /// Render as inline CSS declarations.
    pub fn to_css(&self) -> String {
        format!(
            "align-items: {}; justify-content: {}; text-align: {};",
            self.align_items, self.justify_content, self.text_align
        )
    }
}

/// A (vertical, horizontal) alignment pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Alignment {
    pub vertical: VerticalAlign,
    pub horizontal: HorizontalAlign,
}

impl Alignment {
    pub const fn new(vertical: VerticalAlign, horizontal: HorizontalAlign) -> Self {
        Self { vertical, horizontal }
    }

    /// All nine pairs, row by row from top-left.
    pub fn all() -> impl Iterator<Item = Alignment> {
        VerticalAlign::ALL
            .into_iter()
            .flat_map(|v| HorizontalAlign::ALL.into_iter().map(move |h| Alignment::new(v, h)))
    }

    pub fn directives(self) -> LayoutDirectives {
        LayoutDirectives {
            align_items: self.vertical.align_items(),
            justify_content: self.horizontal.justify_content(),
            text_align: self.horizontal.text_align(),
        }
    }

    /// Canonical kebab-case name ("top-left", "center", "bottom", ...)
    pub fn name(self) -> &'static str {
        Direction::from(self).name()
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Alignment {
    type Err = PolaroidError;

    /// Accepts the canonical names, compass abbreviations (`nw`, `n`, ...)
    /// and explicit `vertical-horizontal` pairs such as `center-left`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        if let Some(direction) = Direction::GRID
            .iter()
            .find(|d| d.name() == key || d.compass() == key)
        {
            return Ok(direction.alignment());
        }

        let (v, h) = key
            .split_once('-')
            .ok_or_else(|| PolaroidError::InvalidAlignment(s.to_string()))?;
        let vertical = VerticalAlign::ALL
            .into_iter()
            .find(|x| x.as_str() == v)
            .ok_or_else(|| PolaroidError::InvalidAlignment(s.to_string()))?;
        let horizontal = HorizontalAlign::ALL
            .into_iter()
            .find(|x| x.as_str() == h)
            .ok_or_else(|| PolaroidError::InvalidAlignment(s.to_string()))?;
        Ok(Alignment::new(vertical, horizontal))
    }
}

/// One of the nine directional controls of the alignment grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    NorthWest,
    North,
    NorthEast,
    West,
    Center,
    East,
    SouthWest,
    South,
    SouthEast,
}

impl Direction {
    /// Controls in grid order (row-major, top-left first)
    pub const GRID: [Direction; 9] = [
        Direction::NorthWest,
        Direction::North,
        Direction::NorthEast,
        Direction::West,
        Direction::Center,
        Direction::East,
        Direction::SouthWest,
        Direction::South,
        Direction::SouthEast,
    ];

    /// The alignment pair this control selects
    pub fn alignment(self) -> Alignment {
        use HorizontalAlign as H;
        use VerticalAlign as V;
        match self {
            Direction::NorthWest => Alignment::new(V::Top, H::Left),
            Direction::North => Alignment::new(V::Top, H::Center),
            Direction::NorthEast => Alignment::new(V::Top, H::Right),
            Direction::West => Alignment::new(V::Center, H::Left),
            Direction::Center => Alignment::new(V::Center, H::Center),
            Direction::East => Alignment::new(V::Center, H::Right),
            Direction::SouthWest => Alignment::new(V::Bottom, H::Left),
            Direction::South => Alignment::new(V::Bottom, H::Center),
            Direction::SouthEast => Alignment::new(V::Bottom, H::Right),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::NorthWest => "top-left",
            Direction::North => "top",
            Direction::NorthEast => "top-right",
            Direction::West => "left",
            Direction::Center => "center",
            Direction::East => "right",
            Direction::SouthWest => "bottom-left",
            Direction::South => "bottom",
            Direction::SouthEast => "bottom-right",
        }
    }

    pub fn compass(self) -> &'static str {
        match self {
            Direction::NorthWest => "nw",
            Direction::North => "n",
            Direction::NorthEast => "ne",
            Direction::West => "w",
            Direction::Center => "c",
            Direction::East => "e",
            Direction::SouthWest => "sw",
            Direction::South => "s",
            Direction::SouthEast => "se",
        }
    }
}

impl From<Alignment> for Direction {
    fn from(alignment: Alignment) -> Self {
        use HorizontalAlign as H;
        use VerticalAlign as V;
        match (alignment.vertical, alignment.horizontal) {
            (V::Top, H::Left) => Direction::NorthWest,
            (V::Top, H::Center) => Direction::North,
            (V::Top, H::Right) => Direction::NorthEast,
            (V::Center, H::Left) => Direction::West,
            (V::Center, H::Center) => Direction::Center,
            (V::Center, H::Right) => Direction::East,
            (V::Bottom, H::Left) => Direction::SouthWest,
            (V::Bottom, H::Center) => Direction::South,
            (V::Bottom, H::Right) => Direction::SouthEast,
        }
    }
}
