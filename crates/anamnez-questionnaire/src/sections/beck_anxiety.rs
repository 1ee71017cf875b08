use std::sync::LazyLock;

use crate::definition::QuestionDefinition;
use crate::scoring::{self, Scale, ScoreBasis};
use crate::Section;

/// Answer options, in point order (0–3).
pub const OPTIONS: [&str; 4] = ["Hiç", "Hafif derecede", "Orta derecede", "Ciddi derecede"];

const SYMPTOMS: [&str; 21] = [
    "Bedeninizin herhangi bir yerinde uyuşma veya karıncalanma",
    "Sıcak/ateş basmaları",
    "Bacaklarda halsizlik, titreme",
    "Gevşeyememe",
    "Çok kötü şeyler olacak korkusu",
    "Baş dönmesi veya sersemlik",
    "Kalp çarpıntısı",
    "Dengeyi kaybetme duygusu",
    "Dehşete kapılma",
    "Sinirlilik",
    "Boğuluyormuş gibi olma duygusu",
    "Ellerde titreme",
    "Titreklik",
    "Kontrolü kaybetme korkusu",
    "Nefes almada güçlük",
    "Ölüm korkusu",
    "Korkuya kapılma",
    "Midede hazımsızlık ya da rahatsızlık hissi",
    "Baygınlık",
    "Yüzün kızarması",
    "Terleme (sıcağa bağlı olmayan)",
];

/// Beck Anxiety Inventory. 21 symptoms rated 0–3; the total is banded.
pub struct BeckAnxiety;

fn item_text(number: usize, symptom: &str) -> String {
    format!("Beck Anksiyete ({number}/21) Son bir haftada bu belirti sizi ne kadar rahatsız etti: {symptom}")
}

static QUESTIONS: LazyLock<Vec<QuestionDefinition>> = LazyLock::new(|| {
    SYMPTOMS
        .iter()
        .enumerate()
        .map(|(i, symptom)| QuestionDefinition::radio(item_text(i + 1, symptom), &OPTIONS))
        .collect()
});

static SCALE: LazyLock<Scale> = LazyLock::new(|| Scale {
    id: "beck_anxiety".to_string(),
    name: "Beck Anksiyete Ölçeği".to_string(),
    items: QUESTIONS.iter().map(|q| q.text.clone()).collect(),
    points: scoring::points(&OPTIONS),
    basis: ScoreBasis::Total,
    bands: scoring::bands(&[
        (0.0, "Düşük düzeyde anksiyete"),
        (18.0, "Orta düzeyde anksiyete"),
        (25.0, "Yüksek düzeyde anksiyete"),
    ]),
});

impl Section for BeckAnxiety {
    fn id(&self) -> &str {
        "beck_anxiety"
    }

    fn name(&self) -> &str {
        "Beck Anksiyete Ölçeği"
    }

    fn questions(&self) -> &[QuestionDefinition] {
        &QUESTIONS
    }

    fn scale(&self) -> Option<&Scale> {
        Some(&*SCALE)
    }
}
