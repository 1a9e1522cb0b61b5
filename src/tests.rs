use super::*;
use crate::content::Content;
use crate::errors::DeckError;
use crate::layout::{ContentAlign, LayoutKind, TitleSize};
use crate::slide::Slide;

#[test]
fn test_content_to_fragment_is_pure() {
    let content = Content::Table {
        headers: vec!["H1".to_string(), "H2".to_string()],
        rows: vec![vec!["1".to_string(), "2".to_string()]],
    };
    let first = content_to_fragment(&content);
    let second = content_to_fragment(&content);
    assert_eq!(first, second);
}

#[test]
fn test_text_fragment() {
    let fragment = content_to_fragment(&Content::Text("Hello".to_string()));
    assert_eq!(fragment, "<p>Hello</p>");
}

#[test]
fn test_bullet_list_fragment_preserves_order() {
    let fragment = content_to_fragment(&Content::BulletList(vec![
        "a".to_string(),
        "b".to_string(),
    ]));
    assert_eq!(fragment.matches("<li>").count(), 2);
    assert!(fragment.starts_with("<ul>"));
    assert!(fragment.ends_with("</ul>"));
    let a_pos = fragment.find("<li>a</li>").expect("first item missing");
    let b_pos = fragment.find("<li>b</li>").expect("second item missing");
    assert!(a_pos < b_pos);
}

#[test]
fn test_numbered_list_fragment() {
    let fragment = content_to_fragment(&Content::NumberedList(vec!["one".to_string()]));
    assert!(fragment.starts_with("<ol>"));
    assert!(fragment.contains("<li>one</li>"));
    assert!(fragment.ends_with("</ol>"));
}

#[test]
fn test_equation_fragment_with_legend() {
    let fragment = content_to_fragment(&Content::Equation {
        equation: "E = mc^2".to_string(),
        description: vec![
            ("E".to_string(), "energy".to_string()),
            ("m".to_string(), "mass".to_string()),
        ],
    });
    assert!(fragment.contains("$$\nE = mc^2\n$$"));
    assert!(fragment.contains("<p>Where:</p>"));
    let e_pos = fragment.find("<strong>E</strong>: energy").unwrap();
    let m_pos = fragment.find("<strong>m</strong>: mass").unwrap();
    assert!(e_pos < m_pos, "legend must keep insertion order");
}

#[test]
fn test_equation_fragment_without_legend() {
    let fragment = content_to_fragment(&Content::Equation {
        equation: "a^2 + b^2 = c^2".to_string(),
        description: Vec::new(),
    });
    assert!(fragment.contains("$$"));
    assert!(!fragment.contains("Where:"));
    assert!(!fragment.contains("<ul>"));
}

#[test]
fn test_image_fragment_with_and_without_caption() {
    let with_caption = content_to_fragment(&Content::Image {
        url: "pic.png".to_string(),
        caption: Some("A picture".to_string()),
    });
    assert!(with_caption.contains(r#"<img src="pic.png" alt="A picture""#));
    assert!(with_caption.contains("<p>A picture</p>"));

    let without_caption = content_to_fragment(&Content::Image {
        url: "pic.png".to_string(),
        caption: None,
    });
    assert!(without_caption.contains(r#"alt="""#));
    assert!(!without_caption.contains("<p>"));
}

#[test]
fn test_code_fragment_tags_language() {
    let fragment = content_to_fragment(&Content::Code {
        code: "print('hi')".to_string(),
        language: "python".to_string(),
    });
    assert_eq!(
        fragment,
        r#"<pre><code class="language-python">print('hi')</code></pre>"#
    );
}

#[test]
fn test_table_fragment_shape() {
    let fragment = content_to_fragment(&Content::Table {
        headers: vec!["H1".to_string(), "H2".to_string()],
        rows: vec![
            vec!["1".to_string(), "2".to_string()],
            vec!["3".to_string(), "4".to_string()],
        ],
    });
    assert_eq!(fragment.matches("<th>").count(), 2);
    assert_eq!(fragment.matches("<tr>").count(), 3); // header row + 2 body rows
    assert_eq!(fragment.matches("<td>").count(), 4);
    assert!(fragment.contains("<th>H1</th><th>H2</th>"));
    assert!(fragment.contains("<tr><td>1</td><td>2</td></tr>"));
    assert!(fragment.contains("<tr><td>3</td><td>4</td></tr>"));
}

#[test]
fn test_ragged_table_rows_render_as_is() {
    let fragment = content_to_fragment(&Content::Table {
        headers: vec!["H1".to_string(), "H2".to_string()],
        rows: vec![vec!["only".to_string()]],
    });
    assert!(fragment.contains("<tr><td>only</td></tr>"));
}

#[test]
fn test_diagram_fragment() {
    let fragment = content_to_fragment(&Content::Diagram("graph TD; A-->B;".to_string()));
    assert_eq!(fragment, r#"<div class="mermaid">graph TD; A-->B;</div>"#);
}

#[test]
fn test_media_fragment_youtube_embed() {
    let fragment = content_to_fragment(&Content::Media {
        url: "https://www.youtube.com/embed/abc123".to_string(),
        kind: MediaKind::Video,
    });
    assert!(fragment.starts_with("<iframe"));
    assert!(fragment.contains("allowfullscreen"));
}

#[test]
fn test_media_fragment_native_elements() {
    let video = content_to_fragment(&Content::Media {
        url: "https://example.com/clip.mp4".to_string(),
        kind: MediaKind::Video,
    });
    assert!(video.starts_with("<video"));
    assert!(video.contains("controls"));
    assert!(video.ends_with("</video>"));

    let audio = content_to_fragment(&Content::Media {
        url: "https://example.com/clip.mp3".to_string(),
        kind: MediaKind::Audio,
    });
    assert!(audio.starts_with("<audio"));
    assert!(audio.ends_with("</audio>"));
}

#[test]
fn test_markdown_fragment_passes_through() {
    let fragment = content_to_fragment(&Content::Markdown("# Raw *markdown*".to_string()));
    assert_eq!(fragment, "# Raw *markdown*");
}

#[test]
fn test_add_to_column_rejects_non_column_layouts() {
    let non_column = [
        LayoutKind::Title,
        LayoutKind::TitleContent,
        LayoutKind::TitleTwoContent,
        LayoutKind::Section,
        LayoutKind::Blank,
        LayoutKind::ImageWithCaption,
        LayoutKind::Quote,
    ];
    for layout in non_column {
        let mut slide = Slide::new("T");
        slide.set_layout(layout);
        let result = slide.add_to_column(0, Content::Text("x".to_string()));
        assert!(
            matches!(result, Err(DeckError::InvalidLayout(_))),
            "layout {:?} must reject column content",
            layout
        );
        assert!(slide.columns[0].is_empty());
    }
}

#[test]
fn test_add_to_column_rejects_out_of_range_index() {
    let mut slide = Slide::new("T");
    slide.set_layout(LayoutKind::TwoColumns);
    let result = slide.add_to_column(2, Content::Text("x".to_string()));
    assert!(matches!(result, Err(DeckError::InvalidArgument(_))));
}

#[test]
fn test_add_comparison_requires_comparison_layout() {
    let mut slide = Slide::new("T");
    slide.set_layout(LayoutKind::TwoColumns);
    let result = slide.add_comparison("Left", "Right");
    assert!(matches!(result, Err(DeckError::InvalidLayout(_))));
    assert!(slide.comparison_headers.is_none());
}

#[test]
fn test_comparison_headers_render_once_each_in_order() {
    let mut pres = Presentation::new();
    let slide = pres.create_slide("Compare");
    slide.set_layout(LayoutKind::Comparison);
    slide.add_comparison("Before", "After").unwrap();
    slide
        .add_to_column(0, Content::Text("old".to_string()))
        .unwrap();
    slide
        .add_to_column(1, Content::Text("new".to_string()))
        .unwrap();

    let html = pres.render(false);
    assert_eq!(html.matches("<h3>Before</h3>").count(), 1);
    assert_eq!(html.matches("<h3>After</h3>").count(), 1);
    let before = html.find("<h3>Before</h3>").unwrap();
    let after = html.find("<h3>After</h3>").unwrap();
    assert!(before < after);
}

#[test]
fn test_add_media_invalid_kind_records_nothing() {
    let mut slide = Slide::new("T");
    let result = slide.add_media("https://example.com/a.gif", "gif");
    assert!(matches!(result, Err(DeckError::InvalidArgument(_))));
    assert!(slide.contents.is_empty());
}

#[test]
fn test_add_markdown_switches_slide_to_markdown_mode() {
    let mut slide = Slide::new("T");
    slide.set_layout(LayoutKind::TwoColumns);
    slide.add_markdown("# Hi");
    assert!(slide.is_markdown);

    let fragment = generate_slide_fragment(&slide);
    assert!(fragment.contains("data-markdown"));
    assert!(fragment.contains("data-template"));
    assert!(fragment.contains("# Hi"));
    assert!(!fragment.contains("two-columns"));
}

#[test]
fn test_set_layout_resyncs_config_kind() {
    let mut slide = Slide::new("T");
    assert_eq!(slide.layout_config.kind, LayoutKind::TitleContent);
    slide.set_layout(LayoutKind::Section);
    assert_eq!(slide.layout, LayoutKind::Section);
    assert_eq!(slide.layout_config.kind, LayoutKind::Section);
}

#[test]
fn test_configure_layout_replaces_wholesale() {
    let mut slide = Slide::new("T");
    slide.configure_layout(
        TitleSize::H1,
        ContentAlign::Center,
        Some("#212121"),
        &["dark"],
    );
    assert_eq!(slide.layout_config.background.as_deref(), Some("#212121"));

    // Re-configuring without a background reverts it to the default,
    // not to the prior value.
    slide.configure_layout(TitleSize::H3, ContentAlign::Right, None, &[]);
    assert_eq!(slide.layout_config.title_size, TitleSize::H3);
    assert!(slide.layout_config.background.is_none());
    assert!(slide.layout_config.extra_classes.is_empty());
}

#[test]
fn test_background_and_extra_classes_in_fragment() {
    let mut slide = Slide::new("T");
    slide.configure_layout(
        TitleSize::H2,
        ContentAlign::Left,
        Some("#f0f0f0"),
        &["custom-slide", "dark-mode"],
    );
    let fragment = generate_slide_fragment(&slide);
    assert!(fragment.contains(r##"data-background="#f0f0f0""##));
    assert!(fragment.contains(r#"class="custom-slide dark-mode""#));
}

#[test]
fn test_section_layout_renders_big_title_only() {
    let mut slide = Slide::new("Part Two");
    slide.set_layout(LayoutKind::Section);
    slide.add_text("ignored body");
    let fragment = generate_slide_fragment(&slide);
    assert!(fragment.contains("<h1>Part Two</h1>"));
    assert!(!fragment.contains("<p>ignored body</p>"));
}

#[test]
fn test_blank_layout_renders_content_without_title() {
    let mut slide = Slide::new("Hidden");
    slide.set_layout(LayoutKind::Blank);
    slide.add_text("just this");
    let fragment = generate_slide_fragment(&slide);
    assert!(fragment.contains("<p>just this</p>"));
    assert!(!fragment.contains("Hidden"));
}

#[test]
fn test_quote_layout_with_attribution() {
    let mut slide = Slide::new("Q");
    slide.set_layout(LayoutKind::Quote);
    slide.add_text("Simplicity is the soul of efficiency.");
    slide.add_text("Austin Freeman");
    let fragment = generate_slide_fragment(&slide);
    assert!(fragment.contains("<blockquote>"));
    assert!(fragment.contains("Simplicity is the soul of efficiency."));
    assert!(fragment.contains("<cite>Austin Freeman</cite>"));
}

#[test]
fn test_quote_layout_without_attribution() {
    let mut slide = Slide::new("Q");
    slide.set_layout(LayoutKind::Quote);
    slide.add_text("Less is more.");
    let fragment = generate_slide_fragment(&slide);
    assert!(fragment.contains("Less is more."));
    assert!(fragment.contains("<cite></cite>"));
}

#[test]
fn test_empty_presentation_renders_full_shell() {
    let pres = Presentation::new();
    let html = pres.render(false);
    assert!(html.contains("<!DOCTYPE html>"));
    assert!(html.contains(r#"<div class="reveal">"#));
    assert!(html.contains(r#"<div class="slides">"#));
    assert!(html.contains("Reveal.initialize"));
    assert!(!html.contains("<section"));
}

#[test]
fn test_basic_slide_renders_title_and_text() {
    let mut pres = Presentation::new();
    pres.create_slide("T").add_text("hi");
    let html = pres.render(false);
    assert!(html.contains("<h2>T</h2>"));
    assert!(html.contains("<p>hi</p>"));
    assert!(html.contains("<section"));
}

#[test]
fn test_slides_render_in_insertion_order() {
    let mut pres = Presentation::new();
    pres.create_slide("First");
    pres.create_slide("Second");
    let html = pres.render(false);
    let first = html.find("<h2>First</h2>").unwrap();
    let second = html.find("<h2>Second</h2>").unwrap();
    assert!(first < second);
}

#[test]
fn test_theme_and_transition_substituted() {
    let pres = Presentation::with_settings("night", "slide", false);
    let html = pres.render(false);
    assert!(html.contains("theme/night.min.css"));
    assert!(html.contains("transition: 'slide'"));
}

#[test]
fn test_pdf_export_toggles_button_and_script() {
    let with_pdf = Presentation::with_settings("black", "fade", true);
    let html = with_pdf.render(false);
    assert!(html.contains("Export to PDF"));
    assert!(html.contains("window.print()"));
    assert!(html.contains("pdfExportPlugin"));

    let without_pdf = Presentation::new();
    let html = without_pdf.render(false);
    assert!(!html.contains("Export to PDF"));
    assert!(!html.contains("window.print()"));
    assert!(!html.contains("pdfExportPlugin"));
}

#[test]
fn test_auto_advance_toggles_timing_and_loop() {
    let pres = Presentation::new();
    let auto = pres.render(true);
    assert!(auto.contains("autoSlide: 15000"));
    assert!(auto.contains("loop: true"));

    let manual = pres.render(false);
    assert!(!manual.contains("autoSlide"));
    assert!(!manual.contains("loop: true"));
}

#[test]
fn test_two_columns_render_side_by_side() {
    let mut pres = Presentation::new();
    let slide = pres.create_slide("Cols");
    slide.set_layout(LayoutKind::TwoColumns);
    slide
        .add_to_column(0, Content::Text("left side".to_string()))
        .unwrap();
    slide
        .add_to_column(1, Content::Text("right side".to_string()))
        .unwrap();

    let html = pres.render(false);
    assert!(html.contains(r#"<div class="two-columns">"#));
    let left = html.find("left side").unwrap();
    let right = html.find("right side").unwrap();
    assert!(left < right);
}

#[test]
fn test_title_alignment_class_applied() {
    let mut pres = Presentation::new();
    pres.create_slide("T")
        .configure_layout(TitleSize::H1, ContentAlign::Center, None, &[])
        .add_text("centered");
    let html = pres.render(false);
    assert!(html.contains("<h1>T</h1>"));
    assert!(html.contains(r#"<div class="content center">"#));
}
