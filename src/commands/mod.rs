//! CLI commands for plagscan

pub mod analyze;
pub mod compare;
pub mod corpus;
pub mod dispatch;
pub mod init;
pub mod input;
pub mod passages;

/// Print a value as pretty JSON on stdout
pub fn print_json<T: serde::Serialize>(value: &T) -> plagscan_core::error::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Render a `[0, 1]` score as a percentage
pub fn percent(score: f64) -> String {
    format!("{:.1}%", score * 100.0)
}
