// ABOUTME: Main entry point for the reveal-deck demo binary.
// ABOUTME: Builds a showcase presentation and exports it to HTML.

use clap::Parser;
use reveal_deck::{Content, ContentAlign, LayoutKind, Presentation, TitleSize};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Generate a showcase reveal.js presentation", long_about = None)]
struct Cli {
    /// Path of the HTML file to write
    #[arg(short, long, default_value = "output/presentation.html")]
    output: PathBuf,

    /// Reveal.js theme (black, white, league, beige, sky, night, serif,
    /// simple, solarized, moon, dracula)
    #[arg(long, default_value = "moon")]
    theme: String,

    /// Slide transition (none, fade, slide, convex, concave, zoom)
    #[arg(long, default_value = "zoom")]
    transition: String,

    /// Include the PDF export button and print script
    #[arg(long)]
    pdf_export: bool,

    /// Auto-advance slides on a fixed interval, looping
    #[arg(long)]
    auto_advance: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut pres = Presentation::with_settings(&cli.theme, &cli.transition, cli.pdf_export);
    build_showcase(&mut pres)?;

    pres.export(&cli.output, cli.auto_advance)?;
    println!("Presentation written to {:?}", cli.output);
    Ok(())
}

/// One slide per content kind, exercising the builder surface end to end.
fn build_showcase(pres: &mut Presentation) -> anyhow::Result<()> {
    pres.create_slide("Presentations with reveal-deck")
        .set_layout(LayoutKind::Title)
        .configure_layout(TitleSize::H1, ContentAlign::Center, Some("#212121"), &[])
        .add_text("Building slide decks programmatically");

    pres.create_slide("What is reveal-deck?")
        .add_text("A library that assembles reveal.js presentations from code.")
        .add_bullet_points(vec![
            "Programmatic slide creation",
            "Many content kinds",
            "Static HTML output",
        ]);

    pres.create_slide("A slide with an image")
        .set_layout(LayoutKind::ImageWithCaption)
        .add_image(
            "https://revealjs.com/images/logo/reveal-black-text.svg",
            Some("Reveal.js renders the generated pages."),
        );

    pres.create_slide("A slide with code").add_code(
        "let mut pres = Presentation::new();\npres.create_slide(\"Hello\").add_text(\"World\");",
        Some("rust"),
    );

    pres.create_slide("A slide with an equation").add_equation(
        "E = mc^2",
        &[
            ("E", "energy"),
            ("m", "mass"),
            ("c", "speed of light in vacuum"),
        ],
    );

    pres.create_slide("A slide with a table").add_table(
        vec!["Feature", "Status"],
        vec![
            vec!["Bullet lists", "done"],
            vec!["Tables", "done"],
            vec!["Diagrams", "done"],
        ],
    );

    pres.create_slide("Before and after")
        .set_layout(LayoutKind::Comparison)
        .add_comparison("Hand-written HTML", "reveal-deck")?
        .add_to_column(0, Content::Text("Edit markup by hand".to_string()))?
        .add_to_column(1, Content::Text("Describe slides in code".to_string()))?;

    pres.create_slide("A diagram")
        .add_diagram("graph TD;\n    A-->B;\n    A-->C;");

    pres.create_slide("Markdown slides")
        .add_markdown("## Markdown\n\nThis slide is written in *markdown* and parsed by reveal.js.");

    Ok(())
}
