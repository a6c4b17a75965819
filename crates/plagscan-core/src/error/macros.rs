//! Error macros for plagscan

/// Macro for returning invalid configuration errors
#[macro_export]
macro_rules! bail_config {
    ($($arg:tt)*) => {
        return Err($crate::error::ScanError::invalid_config(format!($($arg)*)))
    };
}

/// Macro for returning usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::ScanError::UsageError($msg.to_string()))
    };
}
