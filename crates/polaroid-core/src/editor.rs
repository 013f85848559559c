//! Card editor state.
//!
//! [`EditorState`] holds everything the editor shows: the quote, the author
//! name, the alignment pair and the photo lifecycle. Text fields store
//! exactly what was typed; placeholders are applied only by the `display_*`
//! accessors and by [`EditorState::snapshot`].
//!
//! Photo requests are split into [`EditorState::begin_image_request`] and
//! [`EditorState::complete_image_request`] so the fetch itself can run on
//! any executor. Every request gets a [`RequestTicket`]; a completion only
//! commits when its ticket is the most recently issued one, so overlapping
//! "New Image" clicks resolve to the latest request regardless of which
//! response arrives last.

use std::fmt;
use std::sync::Arc;

use image::RgbaImage;
use tracing::{debug, warn};

use crate::alignment::{Alignment, HorizontalAlign, VerticalAlign};
use crate::error::PolaroidResult;
use crate::source::FetchedImage;

pub const DEFAULT_AUTHOR: &str = "Ben";
pub const DEFAULT_QUOTE: &str = "Several people are typing.";
pub const QUOTE_PLACEHOLDER: &str = "Quote goes here";
pub const NAME_PLACEHOLDER: &str = "Name goes here";

/// Identifies one issued photo request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Photo lifecycle: `Idle → Loading → {Ready, Failed}`
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ImageState {
    #[default]
    Idle,
    Loading,
    Ready(FetchedImage),
    Failed(String),
}

impl ImageState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ImageState::Loading)
    }

    pub fn image(&self) -> Option<&FetchedImage> {
        match self {
            ImageState::Ready(image) => Some(image),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            ImageState::Failed(reason) => Some(reason),
            _ => None,
        }
    }

    /// Short lowercase name of the lifecycle phase
    pub fn phase(&self) -> &'static str {
        match self {
            ImageState::Idle => "idle",
            ImageState::Loading => "loading",
            ImageState::Ready(_) => "ready",
            ImageState::Failed(_) => "failed",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditorState {
    quote_text: String,
    author_name: String,
    image: ImageState,
    alignment: Alignment,
    issued: u64,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorState {
    /// Editor with default text, centered quote and no photo yet.
    pub fn new() -> Self {
        Self {
            quote_text: DEFAULT_QUOTE.to_string(),
            author_name: DEFAULT_AUTHOR.to_string(),
            image: ImageState::Idle,
            alignment: Alignment::default(),
            issued: 0,
        }
    }

    /// Editor as it looks right after mounting: the first photo request is
    /// already in flight.
    pub fn mounted() -> (Self, RequestTicket) {
        let mut state = Self::new();
        let ticket = state.begin_image_request();
        (state, ticket)
    }

    pub fn quote_text(&self) -> &str {
        &self.quote_text
    }

    pub fn author_name(&self) -> &str {
        &self.author_name
    }

    pub fn image(&self) -> &ImageState {
        &self.image
    }

    pub fn is_loading(&self) -> bool {
        self.image.is_loading()
    }

    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    pub fn vertical_align(&self) -> VerticalAlign {
        self.alignment.vertical
    }

    pub fn horizontal_align(&self) -> HorizontalAlign {
        self.alignment.horizontal
    }

    /// Quote as rendered: the placeholder when the field is empty
    pub fn display_quote(&self) -> &str {
        if self.quote_text.is_empty() {
            QUOTE_PLACEHOLDER
        } else {
            &self.quote_text
        }
    }

    /// Author name as rendered: the placeholder when the field is empty
    pub fn display_name(&self) -> &str {
        if self.author_name.is_empty() {
            NAME_PLACEHOLDER
        } else {
            &self.author_name
        }
    }

    pub fn update_quote_text(&mut self, text: impl Into<String>) {
        self.quote_text = text.into();
    }

    pub fn update_author_name(&mut self, text: impl Into<String>) {
        self.author_name = text.into();
    }

    /// Replace both halves of the alignment pair.
    pub fn set_alignment(&mut self, vertical: VerticalAlign, horizontal: HorizontalAlign) {
        self.alignment = Alignment::new(vertical, horizontal);
    }

    pub fn set_alignment_pair(&mut self, alignment: Alignment) {
        self.alignment = alignment;
    }

    /// Enter `Loading` and issue a new ticket, superseding any request
    /// still in flight.
    pub fn begin_image_request(&mut self) -> RequestTicket {
        self.issued += 1;
        self.image = ImageState::Loading;
        debug!(ticket = self.issued, "Photo request issued");
        RequestTicket(self.issued)
    }

    /// The ticket of the most recently issued request, if any
    pub fn latest_ticket(&self) -> Option<RequestTicket> {
        (self.issued > 0).then_some(RequestTicket(self.issued))
    }

    /// Commit the outcome of a photo request.
    ///
    /// Returns `false` and leaves the state untouched when `ticket` has been
    /// superseded by a newer request.
    pub fn complete_image_request(
        &mut self,
        ticket: RequestTicket,
        result: PolaroidResult<FetchedImage>,
    ) -> bool {
        if ticket.0 != self.issued {
            debug!(
                ticket = ticket.0,
                latest = self.issued,
                "Discarding stale photo response"
            );
            return false;
        }

        self.image = match result {
            Ok(image) => ImageState::Ready(image),
            Err(e) => {
                warn!(ticket = ticket.0, "Photo request failed: {}", e);
                ImageState::Failed(e.to_string())
            }
        };
        debug!(ticket = ticket.0, phase = self.image.phase(), "Photo request completed");
        true
    }

    /// Owned copy of what the card shows, placeholders applied
    pub fn snapshot(&self) -> CardSnapshot {
        CardSnapshot {
            photo: self.image.image().map(|image| Arc::clone(image.pixels())),
            quote: self.display_quote().to_string(),
            name: self.display_name().to_string(),
            alignment: self.alignment,
        }
    }
}

/// Everything needed to rasterize one card, detached from the editor
#[derive(Clone, PartialEq)]
pub struct CardSnapshot {
    /// `None` while no photo is ready; the photo area is painted blank
    pub photo: Option<Arc<RgbaImage>>,
    pub quote: String,
    pub name: String,
    pub alignment: Alignment,
}

impl CardSnapshot {
    pub fn new(quote: impl Into<String>, name: impl Into<String>, alignment: Alignment) -> Self {
        Self {
            photo: None,
            quote: quote.into(),
            name: name.into(),
            alignment,
        }
    }

    pub fn with_photo(mut self, photo: Arc<RgbaImage>) -> Self {
        self.photo = Some(photo);
        self
    }
}

impl fmt::Debug for CardSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardSnapshot")
            .field("photo", &self.photo.as_ref().map(|p| p.dimensions()))
            .field("quote", &self.quote)
            .field("name", &self.name)
            .field("alignment", &self.alignment)
            .finish()
    }
}
