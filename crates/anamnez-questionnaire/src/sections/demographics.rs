use crate::definition::QuestionDefinition;
use crate::Section;

pub const NAME: &str = "Adınız Soyadınız:";
pub const AGE: &str = "Yaşınız:";
pub const GENDER: &str = "Cinsiyetiniz:";
pub const PREGNANT: &str = "Şu anda hamile misiniz?";

/// Identity and basic demographic data, asked first.
pub struct Demographics;

impl Section for Demographics {
    fn id(&self) -> &str {
        "demographics"
    }

    fn name(&self) -> &str {
        "Demografik Bilgiler"
    }

    fn questions(&self) -> &[QuestionDefinition] {
        static QUESTIONS: std::sync::LazyLock<Vec<QuestionDefinition>> =
            std::sync::LazyLock::new(|| {
                vec![
                    QuestionDefinition::text(NAME),
                    QuestionDefinition::text(AGE).range(0.0, 120.0),
                    QuestionDefinition::radio(GENDER, &["Kadın", "Erkek"]),
                    QuestionDefinition::radio(PREGNANT, &["Evet", "Hayır", "Emin değilim"])
                        .when(GENDER, &["Kadın"]),
                    QuestionDefinition::radio(
                        "Medeni durumunuz:",
                        &["Bekar", "Evli", "Boşanmış", "Dul"],
                    ),
                    QuestionDefinition::radio(
                        "Eğitim durumunuz:",
                        &["İlkokul", "Ortaokul", "Lise", "Üniversite", "Lisansüstü"],
                    ),
                ]
            });
        &QUESTIONS
    }
}
