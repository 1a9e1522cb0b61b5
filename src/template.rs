// ABOUTME: Static HTML document shell for generated presentations
// ABOUTME: Substitutes theme, transition and feature toggles into the template

/// Document shell with named substitution points.
///
/// `{{theme}}` and `{{transition}}` select the reveal.js theme stylesheet
/// and transition; `{{slides}}` receives the concatenated section fragments
/// verbatim; the remaining points are filled conditionally by
/// [`fill_template`].
const DOCUMENT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/reveal.js/4.5.0/reveal.min.css">
    <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/reveal.js/4.5.0/theme/{{theme}}.min.css">

    <script src="https://cdn.jsdelivr.net/npm/mermaid@11.4.1/dist/mermaid.min.js"></script>

    <!-- Code syntax highlighting -->
    <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/reveal.js/4.5.0/plugin/highlight/monokai.min.css">

    <style>
        .reveal img {
            max-width: auto;
            height: auto;
        }

        .pdf-btn {
            position: fixed;
            top: 30px;
            right: 30px;
            z-index: 100;
            padding: 10px 20px;
            background: #333;
            color: white;
            border: none;
            border-radius: 5px;
            cursor: pointer;
            font-size: 16px;
        }
        .pdf-btn:hover {
            background: #555;
        }
        @media print {
            .pdf-btn {
                display: none;
            }
        }
    </style>
</head>
<body>
    <div class="reveal">
        <div class="slides">
{{slides}}
        </div>
    </div>

    {{pdf_button}}

    <script src="https://cdnjs.cloudflare.com/ajax/libs/reveal.js/4.5.0/reveal.js"></script>
    <script src="https://cdnjs.cloudflare.com/ajax/libs/reveal.js/4.5.0/plugin/markdown/markdown.min.js"></script>
    <script src="https://cdnjs.cloudflare.com/ajax/libs/reveal.js/4.5.0/plugin/highlight/highlight.min.js"></script>
    <script src="https://cdnjs.cloudflare.com/ajax/libs/reveal.js/4.5.0/plugin/math/math.min.js"></script>
    <script src="https://cdnjs.cloudflare.com/ajax/libs/reveal.js/4.5.0/plugin/zoom/zoom.min.js"></script>

    <script>
        {{pdf_script}}

        {{pdf_plugin}}

        Reveal.initialize({
            {{auto_slides}}
            view: 'scroll',
            scrollProgress: true,
            hash: true,
            transition: '{{transition}}',
            plugins: [
                RevealMarkdown,
                RevealHighlight,
                RevealMath,
                RevealZoom{{pdf_plugin_entry}}
            ]
        });
    </script>
</body>
</html>
"#;

const PDF_BUTTON: &str = r#"<button onclick="exportPDF()" class="pdf-btn">Export to PDF</button>"#;

const PDF_SCRIPT: &str = r#"function exportPDF() {
            alert('To export as PDF:\n\n' +
                  '1. Press Ctrl+P (Cmd+P on Mac)\n' +
                  '2. Change the destination to "Save as PDF"\n' +
                  '3. Under More settings:\n' +
                  '   - Enable "Background graphics"\n' +
                  '   - Set the layout to "Landscape"\n' +
                  '   - Set margins to "None"\n' +
                  '4. Click Save');

            window.print();
        }"#;

const PDF_PLUGIN: &str = r#"let pdfExportPlugin = { src: 'https://cdnjs.cloudflare.com/ajax/libs/reveal.js/4.5.0/plugin/pdf-export/pdfexport.js', async: true };"#;

const AUTO_SLIDES: &str = "autoSlide: 15000,\n            loop: true,";

/// Fill the document shell with the presentation's global settings and the
/// concatenated slide fragments.
pub fn fill_template(
    theme: &str,
    transition: &str,
    slides_html: &str,
    pdf_export: bool,
    auto_advance: bool,
) -> String {
    DOCUMENT_TEMPLATE
        .replace("{{theme}}", theme)
        .replace("{{transition}}", transition)
        .replace("{{slides}}", slides_html)
        .replace("{{pdf_button}}", if pdf_export { PDF_BUTTON } else { "" })
        .replace("{{pdf_script}}", if pdf_export { PDF_SCRIPT } else { "" })
        .replace("{{pdf_plugin}}", if pdf_export { PDF_PLUGIN } else { "" })
        .replace(
            "{{pdf_plugin_entry}}",
            if pdf_export { ",\n                pdfExportPlugin" } else { "" },
        )
        .replace("{{auto_slides}}", if auto_advance { AUTO_SLIDES } else { "" })
}
