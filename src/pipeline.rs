//! Pipeline orchestration
//!
//! Strictly linear: fetch headlines, score them, report to console and CSV.
//! The two recognized failure kinds (empty headline source, missing lexicon
//! resource) finish cleanly with a console message, no table and no output
//! file; every other failure propagates to the caller.

use crate::config::Config;
use crate::models::summarize;
use crate::news::{self, HeadlineOrigin};
use crate::report;
use crate::sentiment::{Lexicon, SentimentAnalyzer, SentimentError};
use anyhow::Result;
use tracing::{info, warn};

/// How a pipeline run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineOutcome {
    /// Results table printed, summary printed, CSV written
    Completed { results: usize },
    /// Empty headline source: nothing analyzed, no file written
    NoHeadlines,
    /// Lexicon resource unavailable: remediation hint printed, no file
    /// written
    MissingLexicon,
}

/// Run the full pipeline: acquire a headline batch, then score and report it.
pub async fn run(config: &Config) -> Result<PipelineOutcome> {
    println!("--- 1. Fetching Headlines ---");
    let batch = news::fetch_headlines(config).await;

    match &batch.origin {
        HeadlineOrigin::Api => {
            println!("Fetched {} headlines from the news API.", batch.headlines.len());
        }
        HeadlineOrigin::Sample { reason: Some(reason) } => {
            println!(
                "Live fetch failed ({reason}). Using {} sample headlines instead.",
                batch.headlines.len()
            );
        }
        HeadlineOrigin::Sample { reason: None } => {
            println!(
                "No API key configured. Using {} sample headlines for sentiment analysis.",
                batch.headlines.len()
            );
        }
    }

    analyze_and_report(&batch.headlines, config)
}

/// Score an ordered headline batch and report it: console table, label
/// summary, CSV file. Short-circuits before any output on an empty batch or
/// a missing lexicon.
pub fn analyze_and_report(headlines: &[String], config: &Config) -> Result<PipelineOutcome> {
    if headlines.is_empty() {
        println!("Could not retrieve any headlines for analysis.");
        return Ok(PipelineOutcome::NoHeadlines);
    }

    println!("\n--- 2. Scoring Sentiment ---");
    let lexicon = match Lexicon::from_file(&config.lexicon_path) {
        Ok(lexicon) => lexicon,
        Err(e @ SentimentError::MissingLexicon { .. }) => {
            println!("{e}");
            println!(
                "Place a tab-separated `word<TAB>valence` lexicon at '{}' and re-run.",
                config.lexicon_path.display()
            );
            return Ok(PipelineOutcome::MissingLexicon);
        }
        Err(e) => return Err(e.into()),
    };
    info!(words = lexicon.len(), "lexicon loaded");
    if lexicon.is_empty() {
        warn!("lexicon has no entries, every headline will score neutral");
    }

    let analyzer = SentimentAnalyzer::new(lexicon);
    let results = analyzer.analyze_batch(headlines);

    println!("\n--- 3. Sentiment Results ---");
    print!("{}", report::render_table(&results));

    println!("\n--- 4. Summary ---");
    let counts = summarize(&results);
    print!("{}", report::render_summary(&counts));

    report::save_results(&results, &config.output_path)?;
    println!(
        "\nSentiment analysis complete! Results saved to '{}'.",
        config.output_path.display()
    );

    Ok(PipelineOutcome::Completed {
        results: results.len(),
    })
}
