// ABOUTME: HTML generation module for the reveal-deck library
// ABOUTME: Converts content items and slides to reveal.js section fragments

use crate::content::Content;
use crate::layout::LayoutKind;
use crate::slide::Slide;
use url::Url;

/// Convert one content item to its HTML fragment.
///
/// This is a pure function over the content model; markdown content is
/// passed through untouched for reveal.js's markdown plugin to process.
pub fn content_to_fragment(content: &Content) -> String {
    match content {
        Content::Markdown(markdown) => markdown.clone(),

        Content::Text(text) => format!("<p>{}</p>", text),

        Content::BulletList(points) => {
            let items = points
                .iter()
                .map(|item| format!("<li>{}</li>", item))
                .collect::<Vec<_>>()
                .join("\n");
            format!("<ul>\n{}\n</ul>", items)
        }

        Content::NumberedList(items) => {
            let items = items
                .iter()
                .map(|item| format!("<li>{}</li>", item))
                .collect::<Vec<_>>()
                .join("\n");
            format!("<ol>\n{}\n</ol>", items)
        }

        Content::Equation {
            equation,
            description,
        } => {
            let legend = if description.is_empty() {
                String::new()
            } else {
                let items = description
                    .iter()
                    .map(|(symbol, desc)| format!("<li><strong>{}</strong>: {}</li>", symbol, desc))
                    .collect::<Vec<_>>()
                    .join("\n");
                format!("<p>Where:</p><ul>{}</ul>", items)
            };
            format!("<p>$$\n{}\n$$</p>\n{}", equation, legend)
        }

        Content::Image { url, caption } => {
            let caption = caption.as_deref().unwrap_or("");
            let caption_html = if caption.is_empty() {
                String::new()
            } else {
                format!("<p>{}</p>", caption)
            };
            format!(
                "<img src=\"{}\" alt=\"{}\" style=\"max-width: 100%;\">\n{}",
                url, caption, caption_html
            )
        }

        Content::Code { code, language } => {
            format!(
                r#"<pre><code class="language-{}">{}</code></pre>"#,
                language, code
            )
        }

        Content::Table { headers, rows } => {
            let header_html = headers
                .iter()
                .map(|h| format!("<th>{}</th>", h))
                .collect::<String>();
            // Rows are rendered cell by cell in positional order; a ragged
            // row yields exactly the cells it contains.
            let rows_html = rows
                .iter()
                .map(|row| {
                    let cells = row
                        .iter()
                        .map(|cell| format!("<td>{}</td>", cell))
                        .collect::<String>();
                    format!("<tr>{}</tr>", cells)
                })
                .collect::<String>();
            format!(
                "<table>\n<thead><tr>{}</tr></thead>\n<tbody>{}</tbody>\n</table>",
                header_html, rows_html
            )
        }

        Content::Diagram(definition) => {
            format!(r#"<div class="mermaid">{}</div>"#, definition)
        }

        Content::Media { url, kind } => {
            if is_youtube_url(url) {
                format!(
                    r#"<iframe width="720" height="480" src="{}" frameborder="0" allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture" allowfullscreen></iframe>"#,
                    url
                )
            } else {
                format!(
                    r#"<{tag} src="{url}" controls style="max-width: 100%;"></{tag}>"#,
                    tag = kind.tag(),
                    url = url
                )
            }
        }
    }
}

/// Whether a media URL points at YouTube and should be embedded as an iframe.
fn is_youtube_url(raw: &str) -> bool {
    Url::parse(raw)
        .ok()
        .and_then(|url| url.host_str().map(str::to_string))
        .map(|host| host == "youtube.com" || host.ends_with(".youtube.com"))
        .unwrap_or(false)
}

/// Generate the complete `<section>` fragment for a slide.
///
/// Markdown slides ignore the layout and render as a single markdown-mode
/// section; everything else dispatches on the layout kind. Rendering is
/// total: once a slide passes builder validation this never fails.
pub fn generate_slide_fragment(slide: &Slide) -> String {
    if slide.is_markdown {
        // Markdown content goes through verbatim; any other content on the
        // slide is converted first so the whole body stays one template.
        let body = slide
            .contents
            .iter()
            .map(content_to_fragment)
            .collect::<Vec<_>>()
            .join("\n");
        return format!(
            "<section data-markdown data-auto-animate>\n<textarea data-template>\n{}\n</textarea>\n</section>",
            body
        );
    }

    let attrs = section_attributes(slide);

    match slide.layout {
        LayoutKind::Blank => format!(
            "<section{}>\n{}\n</section>",
            attrs,
            fragment_list(&slide.contents)
        ),

        LayoutKind::Section => format!(
            "<section{} data-auto-animate>\n<h1>{}</h1>\n</section>",
            attrs, slide.title
        ),

        LayoutKind::TwoColumns | LayoutKind::Comparison => {
            let title_tag = slide.layout_config.title_size.tag();
            let headers = match (&slide.layout, &slide.comparison_headers) {
                (LayoutKind::Comparison, Some((left, right))) => format!(
                    "<div class=\"comparison-headers\">\n<div class=\"left-header\"><h3>{}</h3></div>\n<div class=\"right-header\"><h3>{}</h3></div>\n</div>\n",
                    left, right
                ),
                _ => String::new(),
            };
            format!(
                "<section{attrs}>\n<{t}>{title}</{t}>\n{headers}<div class=\"two-columns\">\n<div class=\"column\">{left}</div>\n<div class=\"column\">{right}</div>\n</div>\n</section>",
                attrs = attrs,
                t = title_tag,
                title = slide.title,
                headers = headers,
                left = fragment_list(&slide.columns[0]),
                right = fragment_list(&slide.columns[1]),
            )
        }

        LayoutKind::Quote => {
            let quote = slide.contents.first().map(quote_text).unwrap_or_default();
            let attribution = slide.contents.get(1).map(quote_text).unwrap_or_default();
            format!(
                "<section{}>\n<blockquote>\n{}\n<cite>{}</cite>\n</blockquote>\n</section>",
                attrs, quote, attribution
            )
        }

        LayoutKind::Title
        | LayoutKind::TitleContent
        | LayoutKind::TitleTwoContent
        | LayoutKind::ImageWithCaption => {
            let title_tag = slide.layout_config.title_size.tag();
            format!(
                "<section{attrs} data-auto-animate>\n<{t}>{title}</{t}>\n<div class=\"content {align}\">\n{body}\n</div>\n</section>",
                attrs = attrs,
                t = title_tag,
                title = slide.title,
                align = slide.layout_config.content_align.class(),
                body = fragment_list(&slide.contents),
            )
        }
    }
}

/// Background and class attributes shared by every non-markdown layout.
fn section_attributes(slide: &Slide) -> String {
    let mut attrs = String::new();
    if let Some(background) = &slide.layout_config.background {
        attrs.push_str(&format!(" data-background=\"{}\"", background));
    }
    if !slide.layout_config.extra_classes.is_empty() {
        attrs.push_str(&format!(
            " class=\"{}\"",
            slide.layout_config.extra_classes.join(" ")
        ));
    }
    attrs
}

/// Quoted text and attribution use the bare string of text content; other
/// content kinds fall back to their normal fragment.
fn quote_text(content: &Content) -> String {
    match content {
        Content::Text(text) => text.clone(),
        other => content_to_fragment(other),
    }
}

/// Concatenate the fragments of a content sequence in insertion order.
fn fragment_list(contents: &[Content]) -> String {
    contents
        .iter()
        .map(content_to_fragment)
        .collect::<Vec<_>>()
        .join("\n")
}
