use thiserror::Error;

use crate::models::headline::{ScoreRecord, ScoreTable};

/// Ranking was asked to pick from a scorecard with no rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot pick a top headline from an empty scorecard")]
pub struct EmptyTableError;

/// The winning row and its position in the table (used for highlighting).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopPick<'a> {
    pub index: usize,
    pub record: &'a ScoreRecord,
}

/// Picks the row with the highest `ctr_potential`. On ties the first row wins.
pub fn select_top(table: &ScoreTable) -> Result<TopPick<'_>, EmptyTableError> {
    let mut rows = table.records().iter().enumerate();
    let (index, record) = rows.next().ok_or(EmptyTableError)?;
    let mut top = TopPick { index, record };

    for (index, record) in rows {
        if record.ctr_potential > top.record.ctr_potential {
            top = TopPick { index, record };
        }
    }

    Ok(top)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(headline: &str, ctr_potential: u8) -> ScoreRecord {
        ScoreRecord {
            headline: headline.to_string(),
            clarity: 5,
            emotional_pull: 5,
            curiosity: 5,
            persuasive_strength: 5,
            ctr_potential,
            framework: "None".to_string(),
            explanation: None,
        }
    }

    fn table(rows: &[(&str, u8)]) -> ScoreTable {
        ScoreTable::new(rows.iter().map(|(h, c)| record(h, *c)).collect())
    }

    #[test]
    fn test_strict_maximum_wins() {
        let t = table(&[("A", 4), ("B", 9), ("C", 7)]);
        let top = select_top(&t).unwrap();
        assert_eq!(top.index, 1);
        assert_eq!(top.record.headline, "B");
    }

    #[test]
    fn test_tie_goes_to_first_occurrence() {
        let t = table(&[("A", 3), ("B", 8), ("C", 8), ("D", 8)]);
        let top = select_top(&t).unwrap();
        assert_eq!(top.index, 1);
        assert_eq!(top.record.headline, "B");
    }

    #[test]
    fn test_all_equal_picks_first_row() {
        let t = table(&[("A", 6), ("B", 6)]);
        assert_eq!(select_top(&t).unwrap().index, 0);
    }

    #[test]
    fn test_single_row() {
        let t = table(&[("Only", 1)]);
        assert_eq!(select_top(&t).unwrap().record.headline, "Only");
    }

    #[test]
    fn test_result_is_maximal_for_every_ordering() {
        let scores = [2u8, 9, 5, 9, 1];
        for rotation in 0..scores.len() {
            let mut rotated = scores;
            rotated.rotate_left(rotation);
            let rows: Vec<(String, u8)> = rotated
                .iter()
                .enumerate()
                .map(|(i, s)| (format!("H{i}"), *s))
                .collect();
            let t = ScoreTable::new(rows.iter().map(|(h, s)| record(h, *s)).collect());

            let top = select_top(&t).unwrap();
            assert!(t.records().iter().all(|r| r.ctr_potential <= top.record.ctr_potential));
            let first_max = rotated.iter().position(|s| *s == 9).unwrap();
            assert_eq!(top.index, first_max);
        }
    }

    #[test]
    fn test_empty_table_errors() {
        assert_eq!(select_top(&ScoreTable::default()), Err(EmptyTableError));
    }
}
