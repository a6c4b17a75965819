use plagscan_core::error::ScanError;
use plagscan_core::format::OutputFormat;

/// Parse an output format name
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse a similarity threshold in `[0, 1]`
pub fn parse_threshold(s: &str) -> std::result::Result<f64, String> {
    match s.trim().parse::<f64>() {
        Ok(value) if (0.0..=1.0).contains(&value) => Ok(value),
        _ => Err(ScanError::invalid_value(
            "threshold",
            format!("{} (expected 0.0 to 1.0)", s),
        )
        .to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format() {
        assert_eq!(parse_format("json"), Ok(OutputFormat::Json));
        assert!(parse_format("records")
            .unwrap_err()
            .contains("expected: human or json"));
    }

    #[test]
    fn test_parse_threshold() {
        assert_eq!(parse_threshold("0.5"), Ok(0.5));
        assert_eq!(parse_threshold(" 1 "), Ok(1.0));
        assert_eq!(
            parse_threshold("1.5").unwrap_err(),
            "invalid threshold: 1.5 (expected 0.0 to 1.0)"
        );
        assert!(parse_threshold("-0.1").is_err());
        assert!(parse_threshold("high").is_err());
        assert!(parse_threshold("NaN").is_err());
    }
}
