//! DOCX style registration derived from a [`StyleConfig`].

use docx_rs::{AlignmentType, Docx, RunFonts, Style, StyleType};

use crate::style::StyleConfig;

pub fn run_fonts(name: &str) -> RunFonts {
    RunFonts::new()
        .ascii(name)
        .hi_ansi(name)
        .east_asia(name)
        .cs(name)
}

/// Register the document-wide styles: the six heading levels, the code
/// block, quote and caption paragraph styles, plus body font defaults.
pub fn register_styles(docx: Docx, style: &StyleConfig) -> Docx {
    let body_fonts = run_fonts(&style.body_font);
    let code_fonts = run_fonts(&style.code_font);

    let mut docx = docx
        .default_fonts(body_fonts.clone())
        .default_size(style.body_size_pt * 2);

    for level in 1u8..=6 {
        let heading = Style::new(format!("Heading{level}"), StyleType::Paragraph)
            .name(format!("Heading {level}"))
            .fonts(body_fonts.clone())
            .size(StyleConfig::heading_size_pt(level) * 2)
            .bold()
            .color(style.heading_color.clone());
        docx = docx.add_style(heading);
    }

    let code_block = Style::new("CodeBlock", StyleType::Paragraph)
        .name("Code Block")
        .fonts(code_fonts)
        .size(style.code_size_pt * 2);

    let quote = Style::new("Quote", StyleType::Paragraph)
        .name("Quote")
        .indent(Some(720), None, None, None)
        .italic();

    let caption = Style::new("Caption", StyleType::Paragraph)
        .name("Caption")
        .italic()
        .align(AlignmentType::Center);

    docx.add_style(code_block)
        .add_style(quote)
        .add_style(caption)
}
