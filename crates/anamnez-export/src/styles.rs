/// Fonts, point sizes and margins shared by the PDF and DOCX writers.
#[derive(Debug, Clone)]
pub struct DocumentStyles {
    /// DOCX body font. PDFs use the embedded or builtin font instead.
    pub body_font: String,
    pub body_size: usize,
    /// The centered title on the cover page.
    pub title_size: usize,
    /// `#`, `##` and `###` headings after the cover. Questions are `##`.
    pub heading_sizes: [usize; 3],
    pub margin_inches: f64,
}

impl DocumentStyles {
    pub fn heading_size(&self, level: u8) -> usize {
        self.heading_sizes[usize::from(level.clamp(1, 3)) - 1]
    }

    pub fn margin_mm(&self) -> f32 {
        self.margin_inches as f32 * 25.4
    }

    pub fn margin_twips(&self) -> i32 {
        (self.margin_inches * 1440.0).round() as i32
    }
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            body_font: "Arial".to_string(),
            body_size: 11,
            title_size: 22,
            heading_sizes: [16, 13, 12],
            margin_inches: 1.0,
        }
    }
}
