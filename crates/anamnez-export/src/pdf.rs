use printpdf::{
    BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference,
};

use crate::blocks::{parse_blocks, parse_inline, Block, Span};
use crate::error::ExportError;
use crate::styles::DocumentStyles;

/// US Letter, in millimetres.
const PAGE_WIDTH: f32 = 215.9;
const PAGE_HEIGHT: f32 = 279.4;

const PT_TO_MM: f32 = 0.3528;
/// Average glyph advance as a fraction of the font size. Deliberately on the
/// wide side so wrapped lines never run past the margin.
const GLYPH_WIDTH: f32 = 0.52;
const LINE_SPACING: f32 = 1.4;
/// Space above the cover title.
const COVER_OFFSET: f32 = 42.0;
const LAYER_NAME: &str = "Layer 1";

/// Options for [`generate_pdf`].
#[derive(Debug, Clone, Default)]
pub struct PdfOptions {
    pub styles: DocumentStyles,
    /// A TrueType font embedded for all text. Without one the builtin
    /// Helvetica is used and text is folded to ASCII, since builtin fonts
    /// cannot encode letters like ş, ğ or ı.
    pub font: Option<Vec<u8>>,
    pub title: String,
}

/// Generate a PDF from rendered template output.
///
/// Everything before the first page break is the cover and is centered.
/// Text is word-wrapped to the page width and flows onto new pages as
/// needed.
pub fn generate_pdf(rendered: &str, options: &PdfOptions) -> Result<Vec<u8>, ExportError> {
    let (doc, page, layer) =
        PdfDocument::new(&options.title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), LAYER_NAME);

    let fonts = Fonts::load(&doc, options.font.as_deref())?;
    let layer = doc.get_page(page).get_layer(layer);
    let margin = options.styles.margin_mm();

    let mut writer = PageWriter {
        doc: &doc,
        layer,
        fonts: &fonts,
        margin,
        y: PAGE_HEIGHT - margin - COVER_OFFSET,
        page_has_content: false,
    };

    let styles = &options.styles;
    let mut on_cover = true;

    for block in parse_blocks(rendered) {
        match block {
            Block::Heading { level, text } => {
                let size = (if level == 1 && on_cover {
                    styles.title_size
                } else {
                    styles.heading_size(level)
                }) as f32;
                if writer.page_has_content {
                    writer.space(size * 0.6 * PT_TO_MM);
                }
                writer.paragraph(&[Span::Bold(text)], size, on_cover, 0.0);
                writer.space(size * 0.3 * PT_TO_MM);
            }
            Block::Bullet(text) => {
                let size = styles.body_size as f32;
                let mut spans = vec![Span::Plain("\u{2022} ")];
                spans.extend(parse_inline(text));
                writer.paragraph(&spans, size, on_cover, 4.0);
            }
            Block::Paragraph(text) => {
                writer.paragraph(&parse_inline(text), styles.body_size as f32, on_cover, 0.0);
            }
            Block::Literal(text) => {
                writer.paragraph(&[Span::Plain(text)], styles.body_size as f32, on_cover, 0.0);
            }
            Block::Blank => {
                writer.space(styles.body_size as f32 * 0.8 * PT_TO_MM);
            }
            Block::PageBreak => {
                on_cover = false;
                writer.new_page();
            }
        }
    }

    Ok(doc.save_to_bytes()?)
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    ascii_only: bool,
}

impl Fonts {
    fn load(doc: &PdfDocumentReference, ttf: Option<&[u8]>) -> Result<Self, ExportError> {
        match ttf {
            Some(bytes) => {
                // A single embedded face; bold spans reuse it.
                let font = doc.add_external_font(bytes)?;
                Ok(Self {
                    regular: font.clone(),
                    bold: font,
                    ascii_only: false,
                })
            }
            None => Ok(Self {
                regular: doc.add_builtin_font(BuiltinFont::Helvetica)?,
                bold: doc.add_builtin_font(BuiltinFont::HelveticaBold)?,
                ascii_only: true,
            }),
        }
    }
}

struct PageWriter<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    fonts: &'a Fonts,
    margin: f32,
    /// Baseline of the next line, from the page bottom.
    y: f32,
    page_has_content: bool,
}

impl PageWriter<'_> {
    fn new_page(&mut self) {
        let (page, layer) = self.doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), LAYER_NAME);
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.y = PAGE_HEIGHT - self.margin;
        self.page_has_content = false;
    }

    fn space(&mut self, mm: f32) {
        self.y -= mm;
    }

    fn paragraph(&mut self, spans: &[Span<'_>], size: f32, centered: bool, indent: f32) {
        let usable = PAGE_WIDTH - 2.0 * self.margin - indent;
        let line_height = size * LINE_SPACING * PT_TO_MM;

        for line in wrap(spans, size, usable, self.fonts.ascii_only) {
            if self.y - line_height < self.margin {
                self.new_page();
            }
            self.y -= line_height;

            let width: f32 = line.iter().map(|run| run.width).sum();
            let mut x = if centered {
                (PAGE_WIDTH - width) / 2.0
            } else {
                self.margin + indent
            };
            for run in &line {
                let font = if run.bold {
                    &self.fonts.bold
                } else {
                    &self.fonts.regular
                };
                self.layer
                    .use_text(run.text.as_str(), size, Mm(x), Mm(self.y), font);
                x += run.width;
            }
            self.page_has_content = true;
        }
    }
}

/// A same-style stretch of one output line.
struct Run {
    text: String,
    bold: bool,
    width: f32,
}

fn text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * GLYPH_WIDTH * PT_TO_MM
}

/// Greedy word wrap over styled spans.
fn wrap(spans: &[Span<'_>], size: f32, max_width: f32, ascii_only: bool) -> Vec<Vec<Run>> {
    let mut lines: Vec<Vec<Run>> = Vec::new();
    let mut line: Vec<Run> = Vec::new();
    let mut line_width = 0.0;
    let space = text_width(" ", size);

    for span in spans {
        let text = if ascii_only {
            fold_to_ascii(span.text())
        } else {
            span.text().to_string()
        };
        let bold = span.is_bold();
        // Keep a separating space when the span itself starts with one.
        let mut glue = text.starts_with(' ') && !line.is_empty();

        for word in text.split_whitespace() {
            let word_width = text_width(word, size);
            let needed = if glue { space + word_width } else { word_width };

            if !line.is_empty() && line_width + needed > max_width {
                lines.push(std::mem::take(&mut line));
                line_width = 0.0;
                glue = false;
            }

            let piece = if glue { format!(" {word}") } else { word.to_string() };
            let piece_width = if glue { space + word_width } else { word_width };
            match line.last_mut() {
                Some(run) if run.bold == bold => {
                    run.text.push_str(&piece);
                    run.width += piece_width;
                }
                _ => line.push(Run {
                    text: piece,
                    bold,
                    width: piece_width,
                }),
            }
            line_width += piece_width;
            glue = true;
        }

        if text.ends_with(' ')
            && let Some(run) = line.last_mut()
        {
            run.text.push(' ');
            run.width += space;
            line_width += space;
        }
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Replace characters the builtin PDF fonts cannot encode.
pub fn fold_to_ascii(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            'ç' => 'c',
            'Ç' => 'C',
            'ğ' => 'g',
            'Ğ' => 'G',
            'ı' => 'i',
            'İ' => 'I',
            'ö' => 'o',
            'Ö' => 'O',
            'ş' => 's',
            'Ş' => 'S',
            'ü' => 'u',
            'Ü' => 'U',
            'â' | 'à' | 'á' | 'ä' => 'a',
            'Â' | 'À' | 'Á' | 'Ä' => 'A',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'É' | 'È' | 'Ê' | 'Ë' => 'E',
            'î' | 'í' | 'ì' | 'ï' => 'i',
            'ô' | 'ó' | 'ò' => 'o',
            'û' | 'ú' | 'ù' => 'u',
            '\u{2013}' | '\u{2014}' => '-',
            '\u{2018}' | '\u{2019}' => '\'',
            '\u{201C}' | '\u{201D}' => '"',
            '\u{2022}' => '*',
            c if c.is_ascii() => c,
            _ => '?',
        })
        .collect()
}
