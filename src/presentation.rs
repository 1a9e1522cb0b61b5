// ABOUTME: Presentation type owning the slide sequence and global settings
// ABOUTME: Assembles slide fragments into the document template and exports

use crate::errors::Result;
use crate::html::generate_slide_fragment;
use crate::slide::Slide;
use crate::template::fill_template;
use crate::utils::ensure_parent_directory_exists;
use log::info;
use std::fs;
use std::path::Path;

/// An ordered slide deck plus the global settings substituted into the
/// document shell. Slides render in insertion order.
///
/// ```
/// use reveal_deck::Presentation;
///
/// let mut pres = Presentation::new();
/// pres.create_slide("Hello").add_text("World");
/// let html = pres.render(false);
/// assert!(html.contains("<p>World</p>"));
/// ```
#[derive(Debug, Clone)]
pub struct Presentation {
    /// Reveal.js theme name, e.g. "black", "white", "moon", "night".
    pub theme: String,
    /// Transition effect: "none", "fade", "slide", "convex", "concave", "zoom".
    pub transition: String,
    /// Include the on-page PDF export button and print script.
    pub enable_pdf_export: bool,
    slides: Vec<Slide>,
}

impl Default for Presentation {
    fn default() -> Self {
        Self {
            theme: "black".to_string(),
            transition: "fade".to_string(),
            enable_pdf_export: false,
            slides: Vec::new(),
        }
    }
}

impl Presentation {
    /// Create an empty presentation with the default theme and transition.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty presentation with the given theme and transition.
    pub fn with_settings(theme: &str, transition: &str, enable_pdf_export: bool) -> Self {
        Self {
            theme: theme.to_string(),
            transition: transition.to_string(),
            enable_pdf_export,
            slides: Vec::new(),
        }
    }

    /// Append a new slide and return a handle for building it.
    ///
    /// The slide is owned by this presentation from the moment it is
    /// created; the returned reference is the only way to mutate it.
    pub fn create_slide(&mut self, title: &str) -> &mut Slide {
        self.slides.push(Slide::new(title));
        let index = self.slides.len() - 1;
        &mut self.slides[index]
    }

    /// The slides in render order.
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Render the presentation as a complete HTML document.
    ///
    /// With `auto_advance` the deck advances on a fixed interval and loops.
    pub fn render(&self, auto_advance: bool) -> String {
        let slides_html = self
            .slides
            .iter()
            .map(generate_slide_fragment)
            .collect::<Vec<_>>()
            .join("\n");
        fill_template(
            &self.theme,
            &self.transition,
            &slides_html,
            self.enable_pdf_export,
            auto_advance,
        )
    }

    /// Render and write the presentation to `path` as UTF-8 HTML.
    ///
    /// Parent directories are created as needed. The write is a single
    /// blocking call with no retry; on failure the file contents are
    /// unspecified.
    pub fn export(&self, path: &Path, auto_advance: bool) -> Result<()> {
        info!("Exporting presentation to {:?}", path);
        let html = self.render(auto_advance);
        ensure_parent_directory_exists(path)?;
        fs::write(path, html)?;
        info!("Presentation written to {:?}", path);
        Ok(())
    }
}
