//! Response Parser: turns the scoring completion into a `ScoreTable`.
//!
//! Expected shape: a JSON array of score objects, then `RANKING_MARKER`, then the
//! ranked list. The marker is only looked for after the array, so headlines may
//! contain it. Anything else fails closed with a `ParseError`; rows are never
//! silently dropped.

use serde_json::Deserializer;
use thiserror::Error;

use crate::models::headline::{ScoreRecord, ScoreTable, SCORE_RANGE};
use crate::scoring::prompts::RANKING_MARKER;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("response is missing the '{}' section", RANKING_MARKER)]
    MissingRankingMarker,

    #[error("response does not start with a scorecard")]
    MissingScorecard,

    #[error("scorecard is not a valid JSON array: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("score '{field}' for \"{headline}\" is {value}, expected 1-10")]
    ScoreOutOfRange {
        headline: String,
        field: &'static str,
        value: u8,
    },

    #[error("got {got} scored headlines for {expected} submitted")]
    TooManyRecords { got: usize, expected: usize },
}

/// A successfully parsed scoring response.
#[derive(Debug, Clone)]
pub struct ParsedAnalysis {
    pub table: ScoreTable,
    /// Text after the ranking marker. Kept for display only, never tabulated.
    pub ranking: String,
}

/// Parses the scoring response for `expected` submitted headlines.
pub fn parse_analysis(raw: &str, expected: usize) -> Result<ParsedAnalysis, ParseError> {
    let body = strip_opening_fence(raw);

    let mut stream = Deserializer::from_str(body).into_iter::<Vec<ScoreRecord>>();
    let records = stream.next().ok_or(ParseError::MissingScorecard)??;
    let rest = &body[stream.byte_offset()..];

    let (_, ranking) = rest
        .split_once(RANKING_MARKER)
        .ok_or(ParseError::MissingRankingMarker)?;

    if records.len() > expected {
        return Err(ParseError::TooManyRecords {
            got: records.len(),
            expected,
        });
    }

    for record in &records {
        if let Some((field, value)) = record
            .scores()
            .into_iter()
            .find(|(_, value)| !SCORE_RANGE.contains(value))
        {
            return Err(ParseError::ScoreOutOfRange {
                headline: record.headline.clone(),
                field,
                value,
            });
        }
    }

    let ranking = ranking.trim_start_matches(':').trim().to_string();

    Ok(ParsedAnalysis {
        table: ScoreTable::new(records),
        ranking,
    })
}

/// Drops a leading ```json (or bare ```) fence the model may wrap the array in.
fn strip_opening_fence(raw: &str) -> &str {
    let text = raw.trim_start();
    text.strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"))
        .unwrap_or(text)
}
