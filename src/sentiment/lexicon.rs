//! Sentiment lexicon
//!
//! Word valences come from an external tab-separated resource file. Booster
//! scalars and the negation word list are fixed rule-model constants and live
//! here in code.

use std::collections::HashMap;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure kinds of the scoring stage
#[derive(Debug, Error)]
pub enum SentimentError {
    #[error("sentiment lexicon not found at '{path}'")]
    MissingLexicon { path: PathBuf },
    #[error("malformed lexicon entry on line {line}: '{content}'")]
    MalformedLexicon { line: usize, content: String },
    #[error("failed to read lexicon: {0}")]
    Io(#[from] std::io::Error),
}

/// Words that intensify or dampen the valence of a following sentiment word,
/// with the scalar added to (or subtracted from) its magnitude.
const BOOSTERS: &[(&str, f64)] = &[
    ("absolutely", 0.293),
    ("completely", 0.293),
    ("considerably", 0.293),
    ("deeply", 0.293),
    ("enormously", 0.293),
    ("especially", 0.293),
    ("exceptionally", 0.293),
    ("extremely", 0.293),
    ("greatly", 0.293),
    ("highly", 0.293),
    ("hugely", 0.293),
    ("incredibly", 0.293),
    ("majorly", 0.293),
    ("particularly", 0.293),
    ("really", 0.293),
    ("remarkably", 0.293),
    ("substantially", 0.293),
    ("totally", 0.293),
    ("tremendously", 0.293),
    ("utterly", 0.293),
    ("very", 0.293),
    ("almost", -0.293),
    ("barely", -0.293),
    ("kinda", -0.293),
    ("less", -0.293),
    ("little", -0.293),
    ("marginally", -0.293),
    ("occasionally", -0.293),
    ("partly", -0.293),
    ("slightly", -0.293),
    ("somewhat", -0.293),
];

/// Words that flip the polarity of a following sentiment word.
const NEGATIONS: &[&str] = &[
    "not", "no", "never", "neither", "nobody", "none", "nothing", "nowhere",
    "without", "hardly", "scarcely", "rarely", "seldom", "cannot",
    "aint", "ain't", "arent", "aren't", "cant", "can't", "couldnt", "couldn't",
    "didnt", "didn't", "doesnt", "doesn't", "dont", "don't", "hasnt", "hasn't",
    "havent", "haven't", "isnt", "isn't", "shouldnt", "shouldn't", "wasnt",
    "wasn't", "werent", "weren't", "wont", "won't", "wouldnt", "wouldn't",
];

/// Word → valence table loaded from the external lexicon resource
#[derive(Debug, Clone)]
pub struct Lexicon {
    valences: HashMap<String, f64>,
}

impl Lexicon {
    /// Load the lexicon from a tab-separated `word<TAB>valence` file.
    /// A missing file is the pipeline's recognized "missing resource"
    /// condition and is reported as [`SentimentError::MissingLexicon`].
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SentimentError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SentimentError::MissingLexicon {
                path: path.to_path_buf(),
            });
        }

        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Parse lexicon entries from any reader. Blank lines and lines starting
    /// with `#` are skipped.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, SentimentError> {
        let mut valences = HashMap::new();

        for (idx, line) in BufReader::new(reader).lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let mut parts = trimmed.splitn(2, '\t');
            let entry = parts
                .next()
                .zip(parts.next())
                .and_then(|(word, rest)| {
                    let valence: f64 = rest.split('\t').next()?.trim().parse().ok()?;
                    Some((word.trim().to_lowercase(), valence))
                });

            match entry {
                Some((word, valence)) => {
                    valences.insert(word, valence);
                }
                None => {
                    return Err(SentimentError::MalformedLexicon {
                        line: idx + 1,
                        content: trimmed.to_string(),
                    })
                }
            }
        }

        Ok(Self { valences })
    }

    /// Valence of a word in [-4, 4], if the word carries sentiment.
    pub fn valence(&self, word: &str) -> Option<f64> {
        self.valences.get(word).copied()
    }

    /// Booster scalar of a word: positive intensifies, negative dampens.
    pub fn booster(&self, word: &str) -> Option<f64> {
        BOOSTERS
            .iter()
            .find(|(booster, _)| *booster == word)
            .map(|(_, scalar)| *scalar)
    }

    /// Whether a word negates a following sentiment word.
    pub fn is_negation(&self, word: &str) -> bool {
        NEGATIONS.contains(&word)
    }

    /// Number of valence entries
    pub fn len(&self) -> usize {
        self.valences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.valences.is_empty()
    }
}
