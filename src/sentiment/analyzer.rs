//! Compound sentiment scoring
//!
//! Additive rule model over lexicon valences. The raw valence sum is
//! normalized with `x / sqrt(x^2 + 15)`, so a single moderate word already
//! clears the ±0.05 classification deadband.

use crate::models::{SentimentLabel, SentimentResult};
use crate::sentiment::lexicon::Lexicon;

/// Scalar applied to a valence when a negation precedes it
const NEGATION_SCALAR: f64 = -0.74;
/// Magnitude added to a valence written in ALL CAPS within mixed-case text
const CAPS_EMPHASIS: f64 = 0.733;
/// Raw-sum increment per exclamation mark
const EXCLAMATION_BOOST: f64 = 0.292;
/// Exclamation marks beyond this count add no further emphasis
const MAX_EXCLAMATIONS: usize = 4;
/// Normalization constant of the compound score
const NORMALIZATION_ALPHA: f64 = 15.0;

/// Lexicon-based sentiment scorer. Pure computation, no side effects.
#[derive(Debug, Clone)]
pub struct SentimentAnalyzer {
    lexicon: Lexicon,
    /// How many tokens before a sentiment word are checked for negations
    /// and boosters
    negation_window: usize,
}

struct Token {
    lower: String,
    all_caps: bool,
}

impl SentimentAnalyzer {
    pub fn new(lexicon: Lexicon) -> Self {
        Self {
            lexicon,
            negation_window: 3,
        }
    }

    pub fn with_negation_window(mut self, window: usize) -> Self {
        self.negation_window = window;
        self
    }

    /// Compute the compound polarity of a text span, in [-1.0, 1.0],
    /// rounded to four decimals.
    pub fn score(&self, text: &str) -> f64 {
        let tokens = tokenize(text);
        let mixed_case = has_mixed_case(&tokens);

        let mut sum = 0.0;
        for (i, token) in tokens.iter().enumerate() {
            let Some(mut valence) = self.lexicon.valence(&token.lower) else {
                continue;
            };

            if token.all_caps && mixed_case {
                valence += CAPS_EMPHASIS * valence.signum();
            }

            let mut negated = false;
            for distance in 1..=self.negation_window.min(i) {
                let prev = &tokens[i - distance];
                // A sentiment-bearing word does not also act as a modifier.
                if self.lexicon.valence(&prev.lower).is_some() {
                    continue;
                }
                if let Some(scalar) = self.lexicon.booster(&prev.lower) {
                    let decay = match distance {
                        1 => 1.0,
                        2 => 0.95,
                        _ => 0.9,
                    };
                    valence += scalar * decay * valence.signum();
                } else if self.lexicon.is_negation(&prev.lower) {
                    negated = true;
                }
            }
            if negated {
                valence *= NEGATION_SCALAR;
            }

            sum += valence;
        }

        // Exclamation marks amplify whatever polarity is already present;
        // they never move a neutral text out of the deadband.
        if sum != 0.0 {
            let exclamations = text.matches('!').count().min(MAX_EXCLAMATIONS);
            sum += exclamations as f64 * EXCLAMATION_BOOST * sum.signum();
        }

        let compound = sum / (sum * sum + NORMALIZATION_ALPHA).sqrt();
        round4(compound.clamp(-1.0, 1.0))
    }

    /// Score a text and classify it against the ±0.05 deadband.
    pub fn classify(&self, text: &str) -> (f64, SentimentLabel) {
        let compound = self.score(text);
        (compound, SentimentLabel::from_compound(compound))
    }

    /// Score one headline into a result record.
    pub fn analyze(&self, headline: &str) -> SentimentResult {
        let (compound_score, label) = self.classify(headline);
        SentimentResult {
            headline: headline.to_string(),
            compound_score,
            label,
        }
    }

    /// Score a batch of headlines. Output order matches input order, one
    /// result per headline.
    pub fn analyze_batch(&self, headlines: &[String]) -> Vec<SentimentResult> {
        headlines.iter().map(|h| self.analyze(h)).collect()
    }
}

/// Split a text into word tokens. Surrounding punctuation is stripped;
/// internal apostrophes are kept so contractions match the negation list.
fn tokenize(text: &str) -> Vec<Token> {
    text.split_whitespace()
        .filter_map(|raw| {
            let word = raw.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'');
            let word = word.trim_matches('\'');
            if word.len() < 2 {
                return None;
            }
            Some(Token {
                lower: word.to_lowercase(),
                all_caps: is_all_caps(word),
            })
        })
        .collect()
}

fn is_all_caps(word: &str) -> bool {
    let mut has_alpha = false;
    for c in word.chars() {
        if c.is_alphabetic() {
            has_alpha = true;
            if !c.is_uppercase() {
                return false;
            }
        }
    }
    has_alpha
}

/// Caps emphasis only applies when the text mixes cased styles; a fully
/// upper-case headline carries no per-word emphasis.
fn has_mixed_case(tokens: &[Token]) -> bool {
    let alphabetic = tokens.iter().filter(|t| t.lower.chars().any(|c| c.is_alphabetic()));
    let (mut caps, mut total) = (0usize, 0usize);
    for token in alphabetic {
        total += 1;
        if token.all_caps {
            caps += 1;
        }
    }
    caps > 0 && caps < total
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::COMPOUND_THRESHOLD;
    use std::io::Cursor;

    fn analyzer() -> SentimentAnalyzer {
        let lexicon = Lexicon::from_reader(Cursor::new(
            "good\t1.9\ngreat\t3.1\nbad\t-2.5\nterrible\t-2.1\nconfidence\t2.3\n\
             fear\t-2.2\nrally\t1.6\ncrash\t-2.9\nsupport\t1.7\n",
        ))
        .unwrap();
        SentimentAnalyzer::new(lexicon)
    }

    #[test]
    fn test_positive_text_clears_deadband() {
        let (score, label) = analyzer().classify("A great rally restores confidence");

        assert!(score >= COMPOUND_THRESHOLD);
        assert_eq!(label, SentimentLabel::Positive);
    }

    #[test]
    fn test_negative_text_clears_deadband() {
        let (score, label) = analyzer().classify("Terrible crash spreads fear");

        assert!(score <= -COMPOUND_THRESHOLD);
        assert_eq!(label, SentimentLabel::Negative);
    }

    #[test]
    fn test_factual_text_is_neutral() {
        let (score, label) =
            analyzer().classify("The exchange lists four new trading pairs on Monday");

        assert!(score.abs() < COMPOUND_THRESHOLD);
        assert_eq!(label, SentimentLabel::Neutral);
    }

    #[test]
    fn test_empty_text_is_neutral() {
        let (score, label) = analyzer().classify("");

        assert_eq!(score, 0.0);
        assert_eq!(label, SentimentLabel::Neutral);
    }

    #[test]
    fn test_negation_flips_polarity() {
        let a = analyzer();

        let plain = a.score("The outlook is good");
        let negated = a.score("The outlook is not good");

        assert!(plain > 0.0);
        assert!(negated < 0.0);
    }

    #[test]
    fn test_negation_window_is_bounded() {
        let a = analyzer().with_negation_window(1);

        // "not" sits two tokens before "good", outside a window of one.
        let score = a.score("not so very good");
        assert!(score > 0.0);
    }

    #[test]
    fn test_booster_increases_magnitude() {
        let a = analyzer();

        assert!(a.score("very good news") > a.score("good news"));
        assert!(a.score("extremely bad news") < a.score("bad news"));
        assert!(a.score("slightly good news") < a.score("good news"));
    }

    #[test]
    fn test_exclamation_amplifies_but_keeps_sign() {
        let a = analyzer();

        assert!(a.score("What a rally!!") > a.score("What a rally"));
        assert!(a.score("A crash!!") < a.score("A crash"));
    }

    #[test]
    fn test_exclamation_never_leaves_deadband_on_neutral() {
        let score = analyzer().score("The meeting is on Tuesday!!!");

        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_caps_emphasis_in_mixed_case_text() {
        let a = analyzer();

        assert!(a.score("a GREAT day for markets") > a.score("a great day for markets"));
        // A fully upper-case text gets no extra emphasis over its lower-case
        // rendering.
        assert_eq!(a.score("GREAT DAY FOR MARKETS"), a.score("great day for markets"));
    }

    #[test]
    fn test_compound_bounded() {
        let a = analyzer();

        let piled_on = a.score("great great great great great great great great!!!!");
        assert!(piled_on <= 1.0);
        assert!(piled_on > 0.9);
    }

    #[test]
    fn test_punctuation_stripped_before_lookup() {
        let (score, label) = analyzer().classify("Markets in \"fear\", again.");

        assert_eq!(label, SentimentLabel::Negative);
        assert!(score < 0.0);
    }

    #[test]
    fn test_batch_preserves_order_and_length() {
        let a = analyzer();
        let headlines: Vec<String> = vec![
            "A great rally".to_string(),
            "A terrible crash".to_string(),
            "Nothing to report".to_string(),
        ];

        let results = a.analyze_batch(&headlines);

        assert_eq!(results.len(), headlines.len());
        for (result, headline) in results.iter().zip(&headlines) {
            assert_eq!(&result.headline, headline);
        }
    }
}
