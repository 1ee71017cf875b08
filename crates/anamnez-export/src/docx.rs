use std::io::Cursor;

use docx_rs::{
    AlignmentType, BreakType, Docx, PageMargin, Paragraph, Run, RunFonts, Style, StyleType,
};

use crate::blocks::{parse_blocks, parse_inline, Block, Span};
use crate::error::ExportError;
use crate::styles::DocumentStyles;

/// Generate a DOCX document from rendered template output.
///
/// Same block model as the PDF writer: everything before the first page
/// break is the cover and is centered; `#` headings map to DOCX heading
/// styles.
pub fn generate_docx(rendered: &str, styles: &DocumentStyles) -> Result<Vec<u8>, ExportError> {
    let margin = styles.margin_twips();
    let mut docx = Docx::new()
        .page_margin(
            PageMargin::new()
                .top(margin)
                .bottom(margin)
                .left(margin)
                .right(margin),
        )
        .add_style(heading_style("Title", "title", styles.title_size))
        .add_style(heading_style("Heading1", "heading 1", styles.heading_size(1)))
        .add_style(heading_style("Heading2", "heading 2", styles.heading_size(2)))
        .add_style(heading_style("Heading3", "heading 3", styles.heading_size(3)));

    let mut on_cover = true;
    for block in parse_blocks(rendered) {
        let alignment = if on_cover {
            AlignmentType::Center
        } else {
            AlignmentType::Left
        };

        let paragraph = match block {
            Block::Heading { level, text } => {
                let style_id = match level {
                    1 if on_cover => "Title",
                    1 => "Heading1",
                    2 => "Heading2",
                    _ => "Heading3",
                };
                Paragraph::new()
                    .style(style_id)
                    .align(alignment)
                    .add_run(Run::new().add_text(text).bold())
            }
            Block::Bullet(text) => {
                let bullet = Run::new()
                    .add_text("\u{2022} ")
                    .fonts(body_fonts(styles));
                add_spans(Paragraph::new().align(alignment).add_run(bullet), text, styles)
            }
            Block::Paragraph(text) => add_spans(Paragraph::new().align(alignment), text, styles),
            Block::Literal(text) => Paragraph::new()
                .align(alignment)
                .add_run(body_run(text, styles)),
            Block::Blank => Paragraph::new(),
            Block::PageBreak => {
                on_cover = false;
                Paragraph::new().add_run(Run::new().add_break(BreakType::Page))
            }
        };
        docx = docx.add_paragraph(paragraph);
    }

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| ExportError::Docx(e.to_string()))?;

    Ok(buf.into_inner())
}

fn heading_style(style_id: &str, name: &str, size_pt: usize) -> Style {
    Style::new(style_id, StyleType::Paragraph)
        .name(name)
        .size(size_pt * 2) // OOXML uses half-points
}

/// Turkish letters fall outside the ASCII slot, so set the high-ANSI font too.
fn body_fonts(styles: &DocumentStyles) -> RunFonts {
    RunFonts::new()
        .ascii(&styles.body_font)
        .hi_ansi(&styles.body_font)
}

fn body_run(text: &str, styles: &DocumentStyles) -> Run {
    Run::new()
        .add_text(text)
        .size(styles.body_size * 2)
        .fonts(body_fonts(styles))
}

fn add_spans(mut para: Paragraph, text: &str, styles: &DocumentStyles) -> Paragraph {
    for span in parse_inline(text) {
        let mut run = body_run(span.text(), styles);
        if let Span::Bold(_) = span {
            run = run.bold();
        }
        para = para.add_run(run);
    }
    para
}
