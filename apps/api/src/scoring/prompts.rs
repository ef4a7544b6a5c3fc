// Prompt constants and builders for headline scoring and CTA suggestions.
// The scoring prompt and `parser::parse_analysis` share one contract:
// a JSON array, then RANKING_MARKER, then the ranked list.

use crate::models::headline::HeadlineInput;

/// Separates the JSON scorecard from the free-text ranking that follows it.
pub const RANKING_MARKER: &str = "**Overall Ranking**";

/// System instruction for the scoring call.
pub const SCORING_SYSTEM: &str = "You are an expert copywriting analyst. \
    You return the scorecard as a valid JSON array exactly as requested, \
    followed only by the ranking section. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies outside the requested structure.";

/// Scoring prompt template. Replace `{headlines_block}` and `{ranking_marker}` before sending.
pub const SCORING_PROMPT_TEMPLATE: &str = r#"You are a seasoned copywriting expert with deep experience in direct response marketing and high-converting digital ads. You're helping a team evaluate multiple headline options.

Analyze each headline for the following attributes:
- Clarity
- Emotional Pull
- Curiosity
- Persuasive Strength
- CTR Potential

Rate each attribute with a whole number from 1 to 10. Then identify the likely persuasion framework (e.g. AIDA, PAS, None) and explain your scores briefly.

Headlines to evaluate:
{headlines_block}

Return a JSON ARRAY with one object per headline, in the order given, using this EXACT schema (no extra fields):
[
  {
    "headline": "the headline text exactly as given",
    "clarity": 8,
    "emotional_pull": 6,
    "curiosity": 7,
    "persuasive_strength": 7,
    "ctr_potential": 8,
    "framework": "AIDA",
    "explanation": "One or two sentences explaining the scores."
  }
]

HARD RULES:
- Every score MUST be a JSON integer between 1 and 10, never a string.
- Include every headline exactly once and no others.

After the JSON array, write a line containing exactly:
{ranking_marker}
followed by every headline ranked from strongest to weakest, one per line, each as a numbered entry."#;

/// System instruction for the CTA suggestion call.
pub const CTA_SYSTEM: &str = "You are a top-tier direct response copywriter.";

/// CTA prompt template. Replace `{headline}` before sending.
pub const CTA_PROMPT_TEMPLATE: &str = r#"You are an expert direct response copywriter. Based on the following high-performing headline:

"{headline}"

Generate:
1. Three persuasive subheadlines or lead-in sentences (1-2 lines max) that could follow this in an ad or landing page.
2. Three short CTA button suggestions (1-4 words each) that match the tone and promise of the headline.

Respond using this structure:

---
**Subheadlines:**
- <subheadline 1>
- <subheadline 2>
- <subheadline 3>

**CTA Buttons:**
- <button 1>
- <button 2>
- <button 3>
---"#;

/// Builds the scoring prompt. Headlines are enumerated `1.`..`N.` and interpolated verbatim.
pub fn build_scoring_prompt(input: &HeadlineInput) -> String {
    let headlines_block = input
        .headlines()
        .iter()
        .enumerate()
        .map(|(i, headline)| format!("{}. {headline}", i + 1))
        .collect::<Vec<_>>()
        .join("\n");

    SCORING_PROMPT_TEMPLATE
        .replace("{ranking_marker}", RANKING_MARKER)
        .replace("{headlines_block}", &headlines_block)
}

/// Builds the CTA prompt for the top headline.
pub fn build_cta_prompt(headline: &str) -> String {
    CTA_PROMPT_TEMPLATE.replace("{headline}", headline)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Lines of the form `<digits>. <text>`, as (number, text).
    fn enumerated_lines(prompt: &str) -> Vec<(usize, &str)> {
        prompt
            .lines()
            .filter_map(|line| {
                let (number, text) = line.split_once(". ")?;
                Some((number.parse::<usize>().ok()?, text))
            })
            .collect()
    }

    fn input(headlines: &[&str]) -> HeadlineInput {
        HeadlineInput::from_fields(headlines).unwrap()
    }

    #[test]
    fn test_scoring_prompt_enumerates_each_headline_verbatim() {
        let samples: [&[&str]; 4] = [
            &["Save 50% Today Only", "The Secret Marketers Don't Want You to Know"],
            &["A", "B", "C"],
            &["One {curly}", "Two \"quoted\"", "Three: colon", "Four 4. four"],
            &["h1", "h2", "h3", "h4", "h5"],
        ];

        for headlines in samples {
            let prompt = build_scoring_prompt(&input(headlines));
            let lines = enumerated_lines(&prompt);
            assert_eq!(lines.len(), headlines.len(), "prompt:\n{prompt}");
            for (i, (number, text)) in lines.iter().enumerate() {
                assert_eq!(*number, i + 1);
                assert_eq!(*text, headlines[i]);
            }
        }
    }

    #[test]
    fn test_line_break_in_headline_cannot_add_an_entry() {
        let prompt = build_scoring_prompt(&input(&["A\n3. injected", "B"]));
        let lines = enumerated_lines(&prompt);
        assert_eq!(lines, vec![(1, "A 3. injected"), (2, "B")]);
    }

    #[test]
    fn test_scoring_prompt_names_fields_and_marker() {
        let prompt = build_scoring_prompt(&input(&["First", "Second"]));
        for field in [
            "\"headline\"",
            "\"clarity\"",
            "\"emotional_pull\"",
            "\"curiosity\"",
            "\"persuasive_strength\"",
            "\"ctr_potential\"",
            "\"framework\"",
            "\"explanation\"",
        ] {
            assert!(prompt.contains(field), "missing {field}");
        }
        assert!(prompt.contains(RANKING_MARKER));
        assert!(!prompt.contains("{ranking_marker}"));
        assert!(!prompt.contains("{headlines_block}"));
    }

    #[test]
    fn test_cta_prompt_quotes_headline_and_asks_for_three_each() {
        let prompt = build_cta_prompt("Save 50% Today Only");
        assert!(prompt.contains("\"Save 50% Today Only\""));
        assert!(prompt.contains("Three persuasive subheadlines"));
        assert!(prompt.contains("Three short CTA button suggestions"));
        assert!(prompt.contains("**Subheadlines:**"));
        assert!(prompt.contains("**CTA Buttons:**"));
        assert_eq!(prompt.matches("- <subheadline").count(), 3);
        assert_eq!(prompt.matches("- <button").count(), 3);
    }
}
