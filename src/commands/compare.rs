//! `plagscan compare` command - direct pairwise comparison

use std::path::Path;

use plagscan_core::config::ScanConfig;
use plagscan_core::error::Result;
use plagscan_core::models::Corpus;
use plagscan_core::SimilarityAggregator;

use crate::cli::{Cli, CompareArgs};
use crate::commands::input::read_file;
use crate::commands::{percent, print_json};

/// Execute the compare command
pub fn execute(cli: &Cli, config: ScanConfig, args: &CompareArgs) -> Result<()> {
    let (first, second) = if args.text {
        (args.first.clone(), args.second.clone())
    } else {
        (
            read_file(Path::new(&args.first))?,
            read_file(Path::new(&args.second))?,
        )
    };

    // comparison never touches the corpus
    let aggregator = SimilarityAggregator::new(config, Corpus::default());
    let comparison = aggregator.compare(&first, &second);

    crate::output_by_format_result!(cli.format,
        json => print_json(&comparison),
        human => {
            if cli.quiet {
                println!("{}", percent(comparison.overall_similarity));
            } else {
                println!("Cosine similarity: {:.3}", comparison.cosine_similarity);
                println!("Lexical overlap:   {:.1}%", comparison.lexical_overlap);
                println!("Overall:           {}", percent(comparison.overall_similarity));
                println!("Level:             {}", comparison.similarity_level);
                println!(
                    "Lengths:           {} / {} characters",
                    comparison.text_a_length, comparison.text_b_length
                );
            }
        }
    )
}
