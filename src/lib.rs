// ABOUTME: Library module for the reveal-deck crate.
// ABOUTME: Builds reveal.js presentations in memory and renders them to HTML.

// Reexport modules
pub mod content;
pub mod errors;
pub mod html;
pub mod layout;
pub mod presentation;
pub mod slide;
pub mod template;
pub mod utils;

// Reexport common types and functions
pub use content::{Content, MediaKind};
pub use errors::{DeckError, Result};
pub use html::{content_to_fragment, generate_slide_fragment};
pub use layout::{ContentAlign, LayoutConfig, LayoutKind, TitleSize};
pub use presentation::Presentation;
pub use slide::Slide;

#[cfg(test)]
mod tests;
