//! Data types emitted by the aggregation pipeline.

use serde::Serialize;

/// Per-animal weight-gain summary, one per animal with at least two valid
/// chronologically-ordered weighings.
///
/// `ganho_total` is final minus initial weight; `ganho_diario` is the mean of
/// the per-pair daily rates, which skips same-day pairs — the two are
/// deliberately not reconciled.
#[derive(Debug, Clone, Serialize)]
pub struct GainSummary {
    pub animal: String,
    /// Location of the last valid weighing.
    pub local: String,
    /// Sex as recorded on the last valid weighing, trimmed and uppercased.
    pub sexo: String,
    /// Age in months at the last valid weighing.
    pub idade_meses: f64,
    pub peso_inicial: f64,
    pub peso_final: f64,
    pub ganho_total: f64,
    /// Average daily gain, rounded to 4 decimal places.
    pub ganho_diario: f64,
    /// Days between the first and last valid weighing.
    pub periodo_dias: i64,
    /// Count of valid weighings behind this summary.
    pub total_pesagens: usize,
}
