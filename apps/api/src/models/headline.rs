use serde::{Deserialize, Serialize};

use crate::errors::AppError;

pub const MIN_HEADLINES: usize = 2;
pub const MAX_HEADLINES: usize = 5;

/// Lowest and highest score the model may assign to an attribute.
pub const SCORE_RANGE: std::ops::RangeInclusive<u8> = 1..=10;

/// Field names of `ScoreRecord` in scorecard display order.
pub const SCORECARD_FIELDS: [&str; 8] = [
    "headline",
    "ctr_potential",
    "clarity",
    "emotional_pull",
    "curiosity",
    "persuasive_strength",
    "framework",
    "explanation",
];

/// The headlines submitted for one comparison, in submission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlineInput(Vec<String>);

impl HeadlineInput {
    /// Builds the input from raw form fields. Blank fields are skipped; runs of
    /// whitespace (line breaks included) collapse to one space so every
    /// headline stays on a single line.
    pub fn from_fields<I, S>(fields: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let headlines: Vec<String> = fields
            .into_iter()
            .map(|f| f.as_ref().split_whitespace().collect::<Vec<_>>().join(" "))
            .filter(|f| !f.is_empty())
            .collect();

        if headlines.len() < MIN_HEADLINES {
            return Err(AppError::Validation(format!(
                "Please enter at least {MIN_HEADLINES} headlines for comparison."
            )));
        }
        if headlines.len() > MAX_HEADLINES {
            return Err(AppError::Validation(format!(
                "At most {MAX_HEADLINES} headlines can be compared at once (got {}).",
                headlines.len()
            )));
        }

        Ok(Self(headlines))
    }

    pub fn headlines(&self) -> &[String] {
        &self.0
    }
}

/// Scores for a single headline as returned by the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub headline: String,
    pub clarity: u8,
    pub emotional_pull: u8,
    pub curiosity: u8,
    pub persuasive_strength: u8,
    pub ctr_potential: u8,
    pub framework: String,
    #[serde(default)]
    pub explanation: Option<String>,
}

impl ScoreRecord {
    /// (field name, value) pairs for the five 1–10 attributes.
    pub fn scores(&self) -> [(&'static str, u8); 5] {
        [
            ("clarity", self.clarity),
            ("emotional_pull", self.emotional_pull),
            ("curiosity", self.curiosity),
            ("persuasive_strength", self.persuasive_strength),
            ("ctr_potential", self.ctr_potential),
        ]
    }

    /// Cell values in `SCORECARD_FIELDS` order.
    pub fn cells(&self) -> Vec<String> {
        vec![
            self.headline.clone(),
            self.ctr_potential.to_string(),
            self.clarity.to_string(),
            self.emotional_pull.to_string(),
            self.curiosity.to_string(),
            self.persuasive_strength.to_string(),
            self.framework.clone(),
            self.explanation.clone().unwrap_or_default(),
        ]
    }
}

/// Parsed scorecard, in the order the model wrote the records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ScoreTable {
    records: Vec<ScoreRecord>,
}

impl ScoreTable {
    pub fn new(records: Vec<ScoreRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[ScoreRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Human-readable column headers in display order.
    pub fn columns() -> Vec<String> {
        SCORECARD_FIELDS.iter().map(|f| column_label(f)).collect()
    }
}

/// CTA suggestion block for the top headline. Displayed as-is, never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CtaSuggestions(pub String);

/// Normalises a field name into a column header: `emotional_pull` → `Emotional Pull`.
/// The `ctr` acronym stays upper-case.
pub fn column_label(field: &str) -> String {
    field
        .split('_')
        .filter(|w| !w.is_empty())
        .map(|word| {
            if word.eq_ignore_ascii_case("ctr") {
                return word.to_uppercase();
            }
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
