use crate::definition::QuestionDefinition;
use crate::Section;

use super::demographics::PREGNANT;

pub const COMPLAINT: &str = "Bize başvurma nedeninizi kısaca anlatır mısınız?";
pub const PRIOR_SUPPORT: &str = "Daha önce psikolojik destek aldınız mı?";
pub const PRIOR_SUPPORT_DETAILS: &str =
    "Aldığınız destek hakkında bilgi verir misiniz? (ne zaman, ne kadar süre)";
pub const MEDICATION: &str = "Şu anda düzenli kullandığınız bir ilaç var mı?";
pub const MEDICATION_DETAILS: &str = "Kullandığınız ilaçları ve dozlarını yazar mısınız?";
pub const MEDICATION_IN_PREGNANCY: &str =
    "İlaçlarınızı hamileliğiniz boyunca hekiminizin bilgisi dahilinde mi kullanıyorsunuz?";
pub const SLEEP: &str = "Son bir ayda yaşadığınız uyku sorunlarını seçiniz:";

/// Presenting complaint and treatment history.
pub struct History;

impl Section for History {
    fn id(&self) -> &str {
        "history"
    }

    fn name(&self) -> &str {
        "Anamnez"
    }

    fn questions(&self) -> &[QuestionDefinition] {
        static QUESTIONS: std::sync::LazyLock<Vec<QuestionDefinition>> =
            std::sync::LazyLock::new(|| {
                vec![
                    QuestionDefinition::text(COMPLAINT),
                    QuestionDefinition::radio(PRIOR_SUPPORT, &["Evet", "Hayır"]),
                    QuestionDefinition::text(PRIOR_SUPPORT_DETAILS).when(PRIOR_SUPPORT, &["Evet"]),
                    QuestionDefinition::radio(MEDICATION, &["Evet", "Hayır"]),
                    QuestionDefinition::text(MEDICATION_DETAILS).when(MEDICATION, &["Evet"]),
                    QuestionDefinition::radio(MEDICATION_IN_PREGNANCY, &["Evet", "Hayır"])
                        .when(PREGNANT, &["Evet"])
                        .when(MEDICATION, &["Evet"]),
                    QuestionDefinition::checkbox(
                        SLEEP,
                        &[
                            "Uykuya dalmada güçlük",
                            "Sık uyanma",
                            "Erken uyanma",
                            "Aşırı uyuma",
                            "Uyku sorunum yok",
                        ],
                    ),
                ]
            });
        &QUESTIONS
    }
}
