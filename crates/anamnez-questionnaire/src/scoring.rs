use anamnez_core::models::score::ScaleScore;

use crate::questionnaire::Questionnaire;
use crate::sequencer::AnswerLookup;

/// Which aggregate the interpretation bands apply to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBasis {
    /// Sum of item points.
    Total,
    /// Sum of item points divided by the item count.
    Mean,
}

/// An interpretation band; applies from `from` (inclusive) up to the next
/// band's `from`.
#[derive(Debug, Clone)]
pub struct Band {
    pub from: f64,
    pub label: String,
}

/// A psychometric scale scored from a fixed set of questions.
#[derive(Debug, Clone)]
pub struct Scale {
    pub id: String,
    pub name: String,
    /// Question texts of the scale items.
    pub items: Vec<String>,
    /// Answer option -> points.
    pub points: Vec<(String, u32)>,
    pub basis: ScoreBasis,
    /// Ascending by `from`.
    pub bands: Vec<Band>,
}

impl Scale {
    /// Score the scale, or `None` until every item has a scorable answer.
    pub fn score<A: AnswerLookup + ?Sized>(&self, answers: &A) -> Option<ScaleScore> {
        let mut total = 0;
        for item in &self.items {
            let given = answers.answer_for(item)?;
            let Some(points) = self.points_for(given) else {
                tracing::debug!(scale = %self.id, "answer has no point value, scale not scored");
                return None;
            };
            total += points;
        }

        let items_total = self.items.len();
        let mean = if items_total == 0 {
            0.0
        } else {
            f64::from(total) / items_total as f64
        };
        let value = match self.basis {
            ScoreBasis::Total => f64::from(total),
            ScoreBasis::Mean => mean,
        };

        Some(ScaleScore {
            scale_id: self.id.clone(),
            name: self.name.clone(),
            items_answered: items_total,
            items_total,
            total,
            mean,
            band: self.band_for(value).to_string(),
        })
    }

    fn points_for(&self, answer: &str) -> Option<u32> {
        self.points
            .iter()
            .find(|(option, _)| option == answer)
            .map(|(_, points)| *points)
    }

    fn band_for(&self, value: f64) -> &str {
        self.bands
            .iter()
            .rev()
            .find(|b| value >= b.from)
            .or_else(|| self.bands.first())
            .map(|b| b.label.as_str())
            .unwrap_or_default()
    }
}

/// Score every built-in scale that the session has fully answered.
///
/// Scales with an item the loaded questionnaire does not ask are skipped, so
/// an override catalog only reports the scales it actually serves.
pub fn score_scales<A: AnswerLookup + ?Sized>(
    questionnaire: &Questionnaire,
    answers: &A,
) -> Vec<ScaleScore> {
    crate::all_sections()
        .iter()
        .filter_map(|section| section.scale())
        .filter(|scale| scale.items.iter().all(|item| questionnaire.get(item).is_some()))
        .filter_map(|scale| scale.score(answers))
        .collect()
}

pub(crate) fn points(options: &[&str]) -> Vec<(String, u32)> {
    options
        .iter()
        .zip(0u32..)
        .map(|(option, points)| (option.to_string(), points))
        .collect()
}

pub(crate) fn bands(bands: &[(f64, &str)]) -> Vec<Band> {
    bands
        .iter()
        .map(|(from, label)| Band {
            from: *from,
            label: label.to_string(),
        })
        .collect()
}
