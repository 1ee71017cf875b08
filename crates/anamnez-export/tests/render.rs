use anamnez_core::models::answer::Answer;
use anamnez_core::models::score::ScaleScore;
use anamnez_core::models::session::SessionId;
use anamnez_core::models::transcript::Transcript;
use anamnez_export::blocks::{parse_blocks, Block};
use anamnez_export::render::{render_transcript, TRANSCRIPT_TEMPLATE};

fn transcript(scores: Vec<ScaleScore>) -> Transcript {
    let session = SessionId::generate();
    let answers = vec![
        Answer::new(session.clone(), "Adınız Soyadınız:", "Ayşe Yılmaz"),
        Answer::new(session, "Bize başvurma nedeninizi kısaca anlatır mısınız?", "Uyku\nsorunları"),
    ];
    let now: jiff::Zoned = "2025-03-01T09:30:00+03:00[+03:00]".parse().unwrap();
    Transcript::new(&now, &answers, scores)
}

#[test]
fn default_template_has_cover_then_entries() {
    let rendered = render_transcript(TRANSCRIPT_TEMPLATE, &transcript(Vec::new())).unwrap();

    assert!(rendered.starts_with("# Anamnez Sohbet Raporu"));
    assert!(rendered.contains("Tarih: 01.03.2025 09:30"));
    let cover_break = rendered.find("---").unwrap();
    let first_entry = rendered.find("## Adınız Soyadınız:").unwrap();
    assert!(cover_break < first_entry);
    assert!(rendered.contains("Ayşe Yılmaz"));
    assert!(!rendered.contains("Ölçek Sonuçları"));
}

#[test]
fn multi_line_answers_are_flattened() {
    let rendered = render_transcript(TRANSCRIPT_TEMPLATE, &transcript(Vec::new())).unwrap();
    assert!(rendered.contains("Uyku sorunları"));
}

#[test]
fn scores_section_is_rendered_when_present() {
    let score = ScaleScore {
        scale_id: "beck_anxiety".to_string(),
        name: "Beck Anksiyete Ölçeği".to_string(),
        items_answered: 21,
        items_total: 21,
        total: 19,
        mean: 19.0 / 21.0,
        band: "Orta düzeyde anksiyete".to_string(),
    };
    let rendered = render_transcript(TRANSCRIPT_TEMPLATE, &transcript(vec![score])).unwrap();

    assert!(rendered.contains("# Ölçek Sonuçları"));
    assert!(rendered.contains("- **Beck Anksiyete Ölçeği**: toplam 19"));
    assert!(rendered.contains("(Orta düzeyde anksiyete)"));
}

#[test]
fn custom_template_is_used() {
    let rendered =
        render_transcript("{{ entries | length }} yanıt", &transcript(Vec::new())).unwrap();
    assert_eq!(rendered, "2 yanıt");
}

#[test]
fn broken_template_is_a_parse_error() {
    let err = render_transcript("{% for %}", &transcript(Vec::new())).unwrap_err();
    assert!(matches!(err, anamnez_export::error::ExportError::TemplateParse(_)));
}

#[test]
fn answers_that_look_like_markup_stay_text() {
    let session = SessionId::generate();
    let answers = vec![
        Answer::new(session.clone(), "Soru 1", "---"),
        Answer::new(session.clone(), "Soru 2", "# Çok kötü"),
        Answer::new(session.clone(), "Soru 3", "- bazen"),
        Answer::new(session.clone(), "Soru 4", "**hiç** uyuyamıyorum"),
        Answer::new(session, "Soru 5", "***"),
    ];
    let now: jiff::Zoned = "2025-03-01T09:30:00+03:00[+03:00]".parse().unwrap();
    let rendered =
        render_transcript(TRANSCRIPT_TEMPLATE, &Transcript::new(&now, &answers, Vec::new()))
            .unwrap();
    let blocks = parse_blocks(&rendered);

    for answer in ["---", "# Çok kötü", "- bazen", "**hiç** uyuyamıyorum", "***"] {
        assert!(
            blocks.contains(&Block::Literal(answer)),
            "answer {answer:?} missing from {blocks:?}"
        );
    }
    // Only the break after the cover page.
    let page_breaks = blocks.iter().filter(|b| **b == Block::PageBreak).count();
    assert_eq!(page_breaks, 1);
    let headings = blocks
        .iter()
        .filter(|b| matches!(b, Block::Heading { level: 1, .. }))
        .count();
    assert_eq!(headings, 1);
}

#[test]
fn literal_filter_is_available_to_custom_templates() {
    let rendered = render_transcript(
        "{% for e in entries %}{{ e.answer | literal }}\n{% endfor %}",
        &transcript(Vec::new()),
    )
    .unwrap();
    assert!(rendered.starts_with("\\Ayşe Yılmaz"));
}
