//! Console rendering of results and summary counts

use crate::models::{SentimentLabel, SentimentResult};

const HEADLINE_COLUMN: &str = "Headline";
const SCORE_COLUMN: &str = "Compound_Score";
const LABEL_COLUMN: &str = "Sentiment_Label";

/// Render the result sequence as an aligned text table, one row per headline
/// in input order.
pub fn render_table(results: &[SentimentResult]) -> String {
    // Width in chars, not bytes: format! pads by char count, and byte
    // lengths overstate non-ASCII headlines.
    let width = results
        .iter()
        .map(|r| r.headline.chars().count())
        .chain(std::iter::once(HEADLINE_COLUMN.len()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    out.push_str(&format!(
        "{:<width$}  {:>14}  {:>15}\n",
        HEADLINE_COLUMN,
        SCORE_COLUMN,
        LABEL_COLUMN,
        width = width
    ));

    for result in results {
        out.push_str(&format!(
            "{:<width$}  {:>14.4}  {:>15}\n",
            result.headline,
            result.compound_score,
            result.label.as_str(),
            width = width
        ));
    }

    out
}

/// Render label counts, one `label    count` line per label, in the order
/// given (descending frequency as produced by [`crate::models::summarize`]).
pub fn render_summary(counts: &[(SentimentLabel, usize)]) -> String {
    let mut out = String::new();
    for (label, count) in counts {
        out.push_str(&format!("{:<9} {:>5}\n", label.as_str(), count));
    }
    out
}
