use anamnez_export::docx::generate_docx;
use anamnez_export::pdf::{fold_to_ascii, generate_pdf, PdfOptions};
use anamnez_export::styles::DocumentStyles;

const RENDERED: &str = "# Anamnez Sohbet Raporu\n\nTarih: 01.03.2025 09:30\n\n---\n\n## Adınız Soyadınız:\nAyşe Yılmaz\n\n## Şu anda hamile misiniz?\nHayır\n";

#[test]
fn pdf_has_pdf_header() {
    let options = PdfOptions {
        title: "Anamnez Sohbet Raporu".to_string(),
        ..PdfOptions::default()
    };
    let bytes = generate_pdf(RENDERED, &options).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn long_transcripts_flow_onto_more_pages() {
    let mut rendered = String::from("# Rapor\n---\n");
    for i in 0..200 {
        rendered.push_str(&format!("## Soru {i}\n{}\n\n", "uzun bir yanıt ".repeat(20)));
    }
    let bytes = generate_pdf(&rendered, &PdfOptions::default()).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn docx_is_a_zip_package() {
    let bytes = generate_docx(RENDERED, &DocumentStyles::default()).unwrap();
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn folding_replaces_turkish_letters() {
    assert_eq!(fold_to_ascii("Şu anda hamile misiniz?"), "Su anda hamile misiniz?");
    assert_eq!(fold_to_ascii("İğneada çığ öğüt"), "Igneada cig ogut");
}

#[test]
fn heading_sizes_follow_level() {
    let styles = DocumentStyles::default();
    assert_eq!(styles.heading_size(1), 16);
    assert_eq!(styles.heading_size(2), 13);
    assert_eq!(styles.heading_size(3), 12);
    assert_eq!(styles.heading_size(0), 16);
    assert_eq!(styles.heading_size(9), 12);
    assert_eq!(styles.margin_twips(), 1440);
    assert!((styles.margin_mm() - 25.4).abs() < 1e-4);
}

#[test]
fn literal_answers_are_written_by_both_writers() {
    let rendered = "# Rapor\n---\n## Soru\n\\---\n## Soru 2\n\\# **Çok** kötü\n";
    assert!(generate_pdf(rendered, &PdfOptions::default()).unwrap().starts_with(b"%PDF"));
    assert!(generate_docx(rendered, &DocumentStyles::default()).unwrap().starts_with(b"PK"));
}
