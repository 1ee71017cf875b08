use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Computed result of one psychometric scale for a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScaleScore {
    pub scale_id: String,
    pub name: String,
    pub items_answered: usize,
    pub items_total: usize,
    /// Sum of item points.
    pub total: u32,
    /// `total / items_total`.
    pub mean: f64,
    /// Interpretation band, e.g. "Normal düzey".
    pub band: String,
}
