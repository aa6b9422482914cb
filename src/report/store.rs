//! CSV persistence of result sequences

use crate::models::SentimentResult;
use anyhow::{Context, Result};
use csv::{Reader, Writer};
use std::fs::File;
use std::path::Path;

/// Save results to a CSV file with the header row
/// `Headline,Compound_Score,Sentiment_Label`, one record per headline in
/// input order, no index column.
pub fn save_results<P: AsRef<Path>>(results: &[SentimentResult], path: P) -> Result<()> {
    let file = File::create(&path)
        .with_context(|| format!("Failed to create file: {:?}", path.as_ref()))?;

    let mut writer = Writer::from_writer(file);

    for result in results {
        writer.serialize(result)?;
    }

    writer.flush()?;
    Ok(())
}

/// Load a result sequence back from a CSV file written by [`save_results`].
pub fn load_results<P: AsRef<Path>>(path: P) -> Result<Vec<SentimentResult>> {
    let file =
        File::open(&path).with_context(|| format!("Failed to open file: {:?}", path.as_ref()))?;

    let mut reader = Reader::from_reader(file);
    let mut results = Vec::new();

    for record in reader.deserialize() {
        let result: SentimentResult = record.context("Failed to parse result row")?;
        results.push(result);
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SentimentLabel;
    use tempfile::tempdir;

    fn results() -> Vec<SentimentResult> {
        vec![
            SentimentResult {
                headline: "Exchange suffers breach, minor losses".to_string(),
                compound_score: -0.7351,
                label: SentimentLabel::Negative,
            },
            SentimentResult {
                headline: "Steady rise signals strong holding".to_string(),
                compound_score: 0.6486,
                label: SentimentLabel::Positive,
            },
        ]
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("results.csv");

        let original = results();
        save_results(&original, &path).unwrap();
        let loaded = load_results(&path).unwrap();

        assert_eq!(loaded.len(), original.len());
        for (a, b) in original.iter().zip(&loaded) {
            assert_eq!(a.headline, b.headline);
            assert_eq!(a.label, b.label);
            assert!((a.compound_score - b.compound_score).abs() < 1e-9);
        }
    }

    #[test]
    fn test_header_row_and_quoting() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("results.csv");

        save_results(&results(), &path).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();

        assert_eq!(
            lines.next().unwrap(),
            "Headline,Compound_Score,Sentiment_Label"
        );
        // Headlines containing commas are quoted, so every record stays one
        // line and three fields.
        let first = lines.next().unwrap();
        assert!(first.starts_with("\"Exchange suffers breach"));
        assert_eq!(contents.lines().count(), 3);
    }
}
