use std::sync::LazyLock;

use crate::definition::QuestionDefinition;
use crate::scoring::{self, Scale, ScoreBasis};
use crate::Section;

/// Answer options, in point order (0–4).
pub const OPTIONS: [&str; 5] = ["Hiç", "Çok az", "Orta derecede", "Oldukça fazla", "Aşırı düzeyde"];

const ITEMS: [&str; 14] = [
    "Sinirlilik ya da içinin titremesi",
    "Titreme",
    "Hiçbir neden yokken aniden korkuya kapılma",
    "Kendinizi korkmuş hissetme",
    "Kalbin çok hızlı çarpması",
    "Kendinizi gergin ve aşırı heyecanlı hissetme",
    "Dehşet ve panik nöbetleri",
    "Yerinizde duramayacak kadar tedirgin hissetme",
    "Kötü bir şey olacakmış gibi hissetme",
    "Korkutucu düşünceler ve hayaller",
    "Baş dönmesi ya da baygınlık hissi",
    "Nefes almada güçlük",
    "Kaslarda gerginlik",
    "Uykuya dalmada güçlük",
];

/// SCL-14 anxiety screen. 14 items rated 0–4 for the past week; the mean
/// item score is banded.
pub struct Scl14;

fn item_text(number: usize, item: &str) -> String {
    format!("SCL-14 ({number}/14) Son bir hafta içinde ne kadar yaşadınız: {item}")
}

static QUESTIONS: LazyLock<Vec<QuestionDefinition>> = LazyLock::new(|| {
    ITEMS
        .iter()
        .enumerate()
        .map(|(i, item)| QuestionDefinition::radio(item_text(i + 1, item), &OPTIONS))
        .collect()
});

static SCALE: LazyLock<Scale> = LazyLock::new(|| Scale {
    id: "scl14".to_string(),
    name: "SCL-14 Anksiyete".to_string(),
    items: QUESTIONS.iter().map(|q| q.text.clone()).collect(),
    points: scoring::points(&OPTIONS),
    basis: ScoreBasis::Mean,
    bands: scoring::bands(&[
        (0.0, "Normal düzey"),
        (1.5, "Orta düzey"),
        (2.5, "Yüksek düzey"),
    ]),
});

impl Section for Scl14 {
    fn id(&self) -> &str {
        "scl14"
    }

    fn name(&self) -> &str {
        "SCL-14 Anksiyete Ölçeği"
    }

    fn questions(&self) -> &[QuestionDefinition] {
        &QUESTIONS
    }

    fn scale(&self) -> Option<&Scale> {
        Some(&*SCALE)
    }
}
