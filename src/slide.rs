// ABOUTME: Slide type and fluent builder operations
// ABOUTME: Accumulates content and enforces layout-specific constraints

use crate::content::{Content, MediaKind};
use crate::errors::{DeckError, Result};
use crate::layout::{ContentAlign, LayoutConfig, LayoutKind, TitleSize};

/// One ordered unit of a presentation: a title, a layout, and content.
///
/// A slide is owned by exactly one [`Presentation`](crate::Presentation) once
/// created; all mutation happens through the `&mut Slide` handle returned by
/// [`create_slide`](crate::Presentation::create_slide). Infallible builder
/// operations return `&mut Self` for chaining; operations that validate
/// their arguments return `Result<&mut Self>` so `?` continues the chain.
///
/// ```
/// use reveal_deck::Presentation;
///
/// let mut pres = Presentation::new();
/// pres.create_slide("Welcome")
///     .add_text("Programmatic slide decks")
///     .add_bullet_points(vec!["fluent builder", "static HTML output"]);
/// ```
#[derive(Debug, Clone)]
pub struct Slide {
    pub title: String,
    pub layout: LayoutKind,
    pub layout_config: LayoutConfig,
    pub contents: Vec<Content>,
    /// Column content for two-column layouts; index 0 is left, 1 is right.
    pub columns: [Vec<Content>; 2],
    /// Column headers, set only for the Comparison layout.
    pub comparison_headers: Option<(String, String)>,
    /// True once any markdown content has been added; never reverts.
    pub is_markdown: bool,
}

impl Slide {
    /// Create a slide with the default TitleContent layout.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            layout: LayoutKind::TitleContent,
            layout_config: LayoutConfig::new(LayoutKind::TitleContent),
            contents: Vec::new(),
            columns: [Vec::new(), Vec::new()],
            comparison_headers: None,
            is_markdown: false,
        }
    }

    /// Set the layout kind, keeping the rest of the layout configuration.
    pub fn set_layout(&mut self, layout: LayoutKind) -> &mut Self {
        self.layout = layout;
        self.layout_config.kind = layout;
        self
    }

    /// Replace the layout configuration wholesale.
    ///
    /// The configuration is rebuilt from the current layout plus the given
    /// values; there is no partial merge, so a value not supplied by the
    /// caller reverts to its default rather than keeping its prior setting.
    pub fn configure_layout(
        &mut self,
        title_size: TitleSize,
        content_align: ContentAlign,
        background: Option<&str>,
        extra_classes: &[&str],
    ) -> &mut Self {
        self.layout_config = LayoutConfig {
            kind: self.layout,
            title_size,
            content_align,
            background: background.map(str::to_string),
            extra_classes: extra_classes.iter().map(|c| c.to_string()).collect(),
        };
        self
    }

    /// Append content to one column of a two-column layout.
    ///
    /// Fails with `InvalidLayout` unless the current layout is TwoColumns or
    /// Comparison, and with `InvalidArgument` unless `column` is 0 or 1.
    pub fn add_to_column(&mut self, column: usize, content: Content) -> Result<&mut Self> {
        if !self.layout.has_columns() {
            return Err(DeckError::InvalidLayout(
                "column-specific content only available in two-column layouts".to_string(),
            ));
        }
        if column > 1 {
            return Err(DeckError::InvalidArgument(format!(
                "column must be 0 or 1, got {}",
                column
            )));
        }
        self.columns[column].push(content);
        Ok(self)
    }

    /// Set the column headers of a Comparison slide.
    pub fn add_comparison(&mut self, left_title: &str, right_title: &str) -> Result<&mut Self> {
        if self.layout != LayoutKind::Comparison {
            return Err(DeckError::InvalidLayout(
                "comparison headers only available in comparison layout".to_string(),
            ));
        }
        self.comparison_headers = Some((left_title.to_string(), right_title.to_string()));
        Ok(self)
    }

    pub fn add_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.contents.push(Content::Text(text.into()));
        self
    }

    pub fn add_bullet_points<S: Into<String>>(&mut self, points: Vec<S>) -> &mut Self {
        self.contents
            .push(Content::BulletList(points.into_iter().map(Into::into).collect()));
        self
    }

    pub fn add_numbered_list<S: Into<String>>(&mut self, items: Vec<S>) -> &mut Self {
        self.contents
            .push(Content::NumberedList(items.into_iter().map(Into::into).collect()));
        self
    }

    /// Add a display equation with an optional symbol legend.
    ///
    /// Legend entries render in the order given.
    pub fn add_equation(
        &mut self,
        equation: impl Into<String>,
        description: &[(&str, &str)],
    ) -> &mut Self {
        self.contents.push(Content::Equation {
            equation: equation.into(),
            description: description
                .iter()
                .map(|(sym, desc)| (sym.to_string(), desc.to_string()))
                .collect(),
        });
        self
    }

    pub fn add_image(&mut self, url: impl Into<String>, caption: Option<&str>) -> &mut Self {
        self.contents.push(Content::Image {
            url: url.into(),
            caption: caption.map(str::to_string),
        });
        self
    }

    /// Add a code block; `language` selects the syntax-highlighting mode.
    pub fn add_code(&mut self, code: impl Into<String>, language: Option<&str>) -> &mut Self {
        self.contents.push(Content::Code {
            code: code.into(),
            language: language.unwrap_or("python").to_string(),
        });
        self
    }

    /// Add a table. Row shapes are not validated against the header count;
    /// a ragged row renders exactly the cells it has.
    pub fn add_table<S: Into<String>>(&mut self, headers: Vec<S>, rows: Vec<Vec<S>>) -> &mut Self {
        self.contents.push(Content::Table {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        });
        self
    }

    /// Add a mermaid diagram definition.
    pub fn add_diagram(&mut self, diagram_source: impl Into<String>) -> &mut Self {
        self.contents.push(Content::Diagram(diagram_source.into()));
        self
    }

    /// Add a video or audio element.
    ///
    /// Fails with `InvalidArgument` for any kind other than "video" or
    /// "audio"; nothing is recorded on failure.
    pub fn add_media(&mut self, url: impl Into<String>, kind: &str) -> Result<&mut Self> {
        let kind = MediaKind::parse(kind)?;
        self.contents.push(Content::Media {
            url: url.into(),
            kind,
        });
        Ok(self)
    }

    /// Add raw markdown, switching the whole slide to markdown rendering.
    pub fn add_markdown(&mut self, markdown: impl Into<String>) -> &mut Self {
        self.is_markdown = true;
        self.contents.push(Content::Markdown(markdown.into()));
        self
    }
}
