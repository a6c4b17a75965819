//! `plagscan passages` command - paragraph-level matches only

use std::time::Instant;

use plagscan_core::config::ScanConfig;
use plagscan_core::error::Result;
use plagscan_core::models::PassageMatch;
use plagscan_core::text::preview;
use serde::Serialize;
use tracing::debug;

use crate::cli::{Cli, PassagesArgs};
use crate::commands::dispatch::build_aggregator;
use crate::commands::input::read_input;
use crate::commands::print_json;

const PARAGRAPH_PREVIEW_CHARS: usize = 160;

#[derive(Debug, Serialize)]
struct PassagesReport<'a> {
    threshold: f64,
    count: usize,
    matches: &'a [PassageMatch],
}

/// Execute the passages command
pub fn execute(cli: &Cli, config: ScanConfig, args: &PassagesArgs, start: Instant) -> Result<()> {
    let text = read_input(args.file.as_deref(), args.text.as_deref())?;
    let threshold = args.threshold.unwrap_or(config.passages.threshold);

    let aggregator = build_aggregator(config);
    let matches = aggregator.find_passages(&text, Some(threshold))?;
    debug!(elapsed = ?start.elapsed(), matches = matches.len(), "find_passages");

    crate::output_by_format_result!(cli.format,
        json => print_json(&PassagesReport {
            threshold,
            count: matches.len(),
            matches: &matches,
        }),
        human => {
            if !cli.quiet || !matches.is_empty() {
                print_matches(&matches, PARAGRAPH_PREVIEW_CHARS);
            }
        }
    )
}

/// Print matches most similar first, paragraphs shortened to `preview_chars`
pub fn print_matches(matches: &[PassageMatch], preview_chars: usize) {
    if matches.is_empty() {
        println!("No matching passages found");
        return;
    }

    println!("Matching passages ({}):", matches.len());
    for m in matches {
        println!("  {:.3}  {}", m.similarity, m.corpus_id);
        println!(
            "      document: {}",
            preview(&m.document_paragraph, preview_chars).replace('\n', " ")
        );
        println!(
            "      corpus:   {}",
            preview(&m.corpus_paragraph, preview_chars).replace('\n', " ")
        );
    }
}
