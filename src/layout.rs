// ABOUTME: Layout catalog for the reveal-deck library
// ABOUTME: Defines slide layout kinds and per-slide layout configuration

/// The set of slide arrangements a slide can use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutKind {
    /// Title only.
    Title,
    /// Title and content, the default.
    TitleContent,
    /// Title and two side-by-side columns.
    TwoColumns,
    /// Title and content in two rows.
    TitleTwoContent,
    /// Two columns with per-column headers.
    Comparison,
    /// Big title for section breaks.
    Section,
    /// No title, custom content only.
    Blank,
    /// Centered image with caption.
    ImageWithCaption,
    /// Quote with optional attribution.
    Quote,
}

impl LayoutKind {
    /// Layouts that accept column-specific content.
    pub fn has_columns(self) -> bool {
        matches!(self, LayoutKind::TwoColumns | LayoutKind::Comparison)
    }
}

/// Heading element used for the slide title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TitleSize {
    H1,
    #[default]
    H2,
    H3,
}

impl TitleSize {
    /// The HTML tag name for this size.
    pub fn tag(self) -> &'static str {
        match self {
            TitleSize::H1 => "h1",
            TitleSize::H2 => "h2",
            TitleSize::H3 => "h3",
        }
    }
}

/// Horizontal alignment of the content container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl ContentAlign {
    /// The CSS class applied to the content container.
    pub fn class(self) -> &'static str {
        match self {
            ContentAlign::Left => "left",
            ContentAlign::Center => "center",
            ContentAlign::Right => "right",
        }
    }
}

/// Per-slide layout configuration.
///
/// `kind` always mirrors the owning slide's current layout; changing the
/// layout resyncs it.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    pub kind: LayoutKind,
    pub title_size: TitleSize,
    pub content_align: ContentAlign,
    /// Background color (hex or named) or image URL.
    pub background: Option<String>,
    /// Additional CSS classes appended to the section element.
    pub extra_classes: Vec<String>,
}

impl LayoutConfig {
    /// Create a configuration with defaults for the given layout.
    pub fn new(kind: LayoutKind) -> Self {
        Self {
            kind,
            title_size: TitleSize::default(),
            content_align: ContentAlign::default(),
            background: None,
            extra_classes: Vec::new(),
        }
    }
}
