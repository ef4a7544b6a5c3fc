//! Headline comparison: orchestrates one submission end to end.
//!
//! Flow: validate input → scoring call → parse → select top → CTA call.
//!
//! At most two completion calls per submission, strictly one after the other.
//! Any failure before the CTA call ends the submission with an `AppError` and the
//! CTA call is never made. A failed CTA call keeps the scorecard and reports the
//! error in its place.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::llm_client::{CompletionService, MODEL};
use crate::models::headline::{CtaSuggestions, HeadlineInput, ScoreTable};
use crate::scoring::parser::parse_analysis;
use crate::scoring::prompts::{build_cta_prompt, build_scoring_prompt, CTA_SYSTEM, SCORING_SYSTEM};
use crate::scoring::ranking::select_top;

/// Everything produced by one successful submission.
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    pub submission_id: Uuid,
    pub evaluated_at: DateTime<Utc>,
    pub columns: Vec<String>,
    pub records: ScoreTable,
    /// Row of `records` with the highest CTR potential.
    pub top_index: usize,
    pub top_headline: String,
    pub ranking: String,
    /// Raw scoring response, shown in the full-analysis panel.
    pub analysis: String,
    pub cta_suggestions: Option<CtaSuggestions>,
    pub cta_error: Option<String>,
}

/// Runs the comparison for the raw headline fields of one submission.
pub async fn compare_headlines(
    llm: &dyn CompletionService,
    fields: &[String],
) -> Result<Comparison, AppError> {
    let submission_id = Uuid::new_v4();
    run_comparison(llm, fields, submission_id)
        .instrument(info_span!("compare", %submission_id))
        .await
}

async fn run_comparison(
    llm: &dyn CompletionService,
    fields: &[String],
    submission_id: Uuid,
) -> Result<Comparison, AppError> {
    // Step 1: Input guard (no network call on failure)
    let input = match HeadlineInput::from_fields(fields) {
        Ok(input) => input,
        Err(e) => {
            warn!("Submission rejected: {e}");
            return Err(e);
        }
    };

    // Step 2: Scoring call
    let submitted = input.headlines().len();
    info!("Evaluating {submitted} headlines with {MODEL}");
    let analysis = llm
        .complete(SCORING_SYSTEM, &build_scoring_prompt(&input))
        .await
        .map_err(|e| AppError::Llm(format!("Scoring call failed: {e}")))?;

    // Step 3: Parse
    let parsed = parse_analysis(&analysis, submitted)?;
    if parsed.table.is_empty() {
        warn!("Scorecard has no rows");
    } else if parsed.table.len() < submitted {
        warn!(
            "Scorecard has {} rows for {submitted} headlines",
            parsed.table.len()
        );
    } else {
        info!("Scorecard parsed: {} rows", parsed.table.len());
    }

    // Step 4: Pick the top headline
    let top = select_top(&parsed.table)?;
    let top_index = top.index;
    let top_headline = top.record.headline.clone();
    info!(
        "Top headline: {top_headline:?} (ctr_potential={})",
        top.record.ctr_potential
    );

    // Step 5: CTA suggestions for the top headline
    info!("Generating CTA suggestions for the top headline");
    let (cta_suggestions, cta_error) = match llm
        .complete(CTA_SYSTEM, &build_cta_prompt(&top_headline))
        .await
    {
        Ok(text) => (Some(CtaSuggestions(text)), None),
        Err(e) => {
            warn!("CTA call failed: {e}");
            (None, Some(format!("Error generating CTA suggestions: {e}")))
        }
    };

    Ok(Comparison {
        submission_id,
        evaluated_at: Utc::now(),
        columns: ScoreTable::columns(),
        records: parsed.table,
        top_index,
        top_headline,
        ranking: parsed.ranking,
        analysis,
        cta_suggestions,
        cta_error,
    })
}
