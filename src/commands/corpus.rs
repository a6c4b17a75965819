//! `plagscan corpus` command - corpus statistics

use plagscan_core::config::ScanConfig;
use plagscan_core::error::Result;
use serde_json::json;

use crate::cli::Cli;
use crate::commands::dispatch::build_aggregator;
use crate::commands::print_json;

/// Execute the corpus command
pub fn execute(cli: &Cli, config: ScanConfig) -> Result<()> {
    let aggregator = build_aggregator(config);
    let info = aggregator.corpus_info()?;
    let path = aggregator.store().root().display().to_string();

    crate::output_by_format_result!(cli.format,
        json => print_json(&json!({
            "path": path,
            "corpus_size": info.corpus_size,
            "total_characters": info.total_characters,
            "average_document_length": info.average_document_length,
            "corpus_loaded": info.corpus_loaded,
        })),
        human => {
            if cli.quiet {
                println!("{}", info.corpus_size);
            } else {
                println!("Corpus: {}", path);
                println!("Documents: {}", info.corpus_size);
                println!("Total characters: {}", info.total_characters);
                println!("Average document length: {:.1}", info.average_document_length);
            }
        }
    )
}
