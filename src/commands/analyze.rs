//! `plagscan analyze` command - score a document against the corpus

use std::time::Instant;

use chrono::Utc;
use plagscan_core::config::ScanConfig;
use plagscan_core::error::Result;
use plagscan_core::models::{PassageMatch, SimilarityResult, UNTITLED_DOCUMENT};
use plagscan_core::CorpusStore;
use serde::Serialize;
use tracing::debug;

use crate::cli::{AnalyzeArgs, Cli};
use crate::commands::dispatch::build_aggregator;
use crate::commands::input::read_input;
use crate::commands::{passages, percent, print_json};

/// Characters of each paragraph shown in human output
const PARAGRAPH_PREVIEW_CHARS: usize = 120;

#[derive(Debug, Serialize)]
struct AnalysisReport<'a> {
    title: &'a str,
    analyzed_at: String,
    text_length: usize,
    result: &'a SimilarityResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    passages: Option<&'a [PassageMatch]>,
}

/// Execute the analyze command
pub fn execute(
    cli: &Cli,
    mut config: ScanConfig,
    args: &AnalyzeArgs,
    start: Instant,
) -> Result<()> {
    config.algorithms.cosine &= !args.no_cosine;
    config.algorithms.lexical &= !args.no_lexical;
    config.algorithms.ngram &= !args.no_ngram;

    let text = read_input(args.file.as_deref(), args.text.as_deref())?;
    let title = args.title.as_deref().unwrap_or(UNTITLED_DOCUMENT);

    let aggregator = build_aggregator(config);
    let corpus = aggregator.store().load()?;
    debug!(elapsed = ?start.elapsed(), documents = corpus.len(), "load_corpus");

    let result = aggregator.analyze_corpus(&text, &corpus);
    let matches = args
        .passages
        .then(|| aggregator.find_passages_in(&text, &corpus, args.threshold));
    debug!(elapsed = ?start.elapsed(), "analyze");

    let report = AnalysisReport {
        title,
        analyzed_at: Utc::now().to_rfc3339(),
        text_length: text.chars().count(),
        result: &result,
        passages: matches.as_deref(),
    };

    crate::output_by_format_result!(cli.format,
        json => print_json(&report),
        human => {
            print_human(cli, &report);
        }
    )
}

fn print_human(cli: &Cli, report: &AnalysisReport) {
    let result = report.result;

    if cli.quiet {
        println!("{}", percent(result.overall_score));
        return;
    }

    println!("{}", report.title);
    println!("Analyzed at {}", report.analyzed_at);
    println!();
    println!("Overall similarity: {}", percent(result.overall_score));
    println!("  Cosine:   {:.3}", result.cosine_similarity);
    println!("  Lexical:  {:.1}%", result.lexical_overlap);
    println!("  N-gram:   {:.1}", result.ngram_score);

    let algorithms: Vec<String> = result
        .details
        .algorithms_used
        .iter()
        .map(ToString::to_string)
        .collect();
    println!(
        "Algorithms: {}",
        if algorithms.is_empty() {
            "none".to_string()
        } else {
            algorithms.join(", ")
        }
    );
    println!("Corpus: {} documents", result.details.corpus_size);

    if !result.similar_passages.is_empty() {
        println!();
        println!("Similar documents:");
        for passage in &result.similar_passages {
            let lexical = passage
                .lexical_overlap
                .map(|l| format!("  lexical {:.1}%", l))
                .unwrap_or_default();
            println!(
                "  [{}] {}  cosine {:.3}{}",
                passage.reference_index, passage.reference_id, passage.cosine_similarity, lexical
            );
            println!("      {}", passage.reference_preview.replace('\n', " "));
        }
    }

    if let Some(matches) = report.passages {
        println!();
        passages::print_matches(matches, PARAGRAPH_PREVIEW_CHARS);
    }
}
