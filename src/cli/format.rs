//! Format output dispatch helpers

/// Dispatch output by format. The json branch returns a `Result`; the
/// human branch is a block of printing statements.
///
/// ```rust,ignore
/// output_by_format_result!(cli.format,
///     json => print_json(&report),
///     human => { println!("{}", report.title); }
/// )?;
/// ```
#[macro_export]
macro_rules! output_by_format_result {
    ($format:expr, json => $json:expr, human => $human:block) => {
        match $format {
            $crate::cli::OutputFormat::Json => $json,
            $crate::cli::OutputFormat::Human => {
                $human;
                Ok(())
            }
        }
    };
}
