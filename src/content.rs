// ABOUTME: Content model for the reveal-deck library
// ABOUTME: Defines the closed set of content kinds a slide can carry

use crate::errors::{DeckError, Result};

/// Kind of a native media element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Video,
    Audio,
}

impl MediaKind {
    /// Parse a media kind from its wire name.
    ///
    /// Anything outside "video"/"audio" is rejected with `InvalidArgument`.
    pub fn parse(kind: &str) -> Result<Self> {
        match kind {
            "video" => Ok(MediaKind::Video),
            "audio" => Ok(MediaKind::Audio),
            other => Err(DeckError::InvalidArgument(format!(
                "media kind must be 'video' or 'audio', got '{}'",
                other
            ))),
        }
    }

    /// The HTML element name for this kind.
    pub fn tag(self) -> &'static str {
        match self {
            MediaKind::Video => "video",
            MediaKind::Audio => "audio",
        }
    }
}

/// One discrete unit of slide body material.
///
/// Each variant carries exactly the payload its renderer needs, so an
/// invalid kind/payload combination cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Text(String),
    BulletList(Vec<String>),
    NumberedList(Vec<String>),
    /// A display equation with an optional symbol legend.
    ///
    /// The legend is a sequence of (symbol, description) pairs rendered in
    /// insertion order.
    Equation {
        equation: String,
        description: Vec<(String, String)>,
    },
    Image {
        url: String,
        caption: Option<String>,
    },
    Code {
        code: String,
        language: String,
    },
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    /// Raw mermaid diagram definition.
    Diagram(String),
    Media {
        url: String,
        kind: MediaKind,
    },
    /// Raw markdown, passed through verbatim for reveal.js to parse.
    Markdown(String),
}
