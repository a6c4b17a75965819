//! Configuration for plagscan
//!
//! Configuration lives in a TOML file. Every field has a default, so an
//! empty file (or no file at all) yields the stock settings. The resolved
//! value is handed to the aggregator at construction time; nothing reads
//! configuration from process-wide state afterwards.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, ScanError};
use crate::similarity::windowed::DEFAULT_MAX_QUERIES;
use crate::similarity::WindowedQueryGenerator;

pub use types::{
    AlgorithmsConfig, AnalysisConfig, CorpusConfig, NgramConfig, PassageConfig, ScanConfig,
    Weights,
};

/// Project-local configuration file name
pub const CONFIG_FILE: &str = "plagscan.toml";

/// Environment variable naming a configuration file
pub const CONFIG_ENV_VAR: &str = "PLAGSCAN_CONFIG";

const CONFIG_DIR: &str = "plagscan";
const GLOBAL_CONFIG_FILE: &str = "config.toml";

impl ScanConfig {
    /// Load and validate configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            ScanError::invalid_config(format!("cannot read {}: {}", path.display(), e))
        })?;
        let config: ScanConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Check value ranges that serde cannot express
    pub fn validate(&self) -> Result<()> {
        for (name, weight) in [
            ("weights.cosine", self.weights.cosine),
            ("weights.lexical", self.weights.lexical),
            ("weights.ngram", self.weights.ngram),
        ] {
            if !weight.is_finite() || weight < 0.0 {
                crate::bail_config!("{} must be a finite number >= 0 (got {})", name, weight);
            }
        }

        for (name, value) in [
            ("analysis.passage_cutoff", self.analysis.passage_cutoff),
            ("passages.threshold", self.passages.threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                crate::bail_config!("{} must be in [0.0, 1.0] (got {})", name, value);
            }
        }

        if self.ngram.window_size < 2 {
            crate::bail_config!("ngram.window_size must be >= 2");
        }
        if !(1..=DEFAULT_MAX_QUERIES).contains(&self.ngram.max_queries) {
            crate::bail_config!(
                "ngram.max_queries must be in [1, {}] (got {})",
                DEFAULT_MAX_QUERIES,
                self.ngram.max_queries
            );
        }
        if !(1..=types::DEFAULT_PREVIEW_CHARS).contains(&self.analysis.preview_chars) {
            crate::bail_config!(
                "analysis.preview_chars must be in [1, {}] (got {})",
                types::DEFAULT_PREVIEW_CHARS,
                self.analysis.preview_chars
            );
        }
        if self.passages.min_words == 0 {
            crate::bail_config!("passages.min_words must be >= 1");
        }
        if self.corpus.extensions.iter().all(|e| e.trim().is_empty()) {
            crate::bail_config!("corpus.extensions must name at least one extension");
        }

        Ok(())
    }

    /// Windowed query generator for the configured window and cap
    pub fn query_generator(&self) -> WindowedQueryGenerator {
        WindowedQueryGenerator::new(self.ngram.window_size, self.ngram.max_queries)
    }

    /// Platform configuration file (`<config dir>/plagscan/config.toml`)
    pub fn global_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(GLOBAL_CONFIG_FILE))
    }

    /// Resolve configuration for a run.
    ///
    /// Order: explicit path, `PLAGSCAN_CONFIG`, `./plagscan.toml`, the
    /// platform configuration file, then built-in defaults. Returns the
    /// configuration and the file it came from, if any.
    pub fn resolve(explicit: Option<&Path>, cwd: &Path) -> Result<(Self, Option<PathBuf>)> {
        let env_path = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
        resolve_from(explicit, env_path, cwd, Self::global_path())
    }
}

fn resolve_from(
    explicit: Option<&Path>,
    env_path: Option<PathBuf>,
    cwd: &Path,
    global_path: Option<PathBuf>,
) -> Result<(ScanConfig, Option<PathBuf>)> {
    if let Some(path) = explicit.map(Path::to_path_buf).or(env_path) {
        if !path.is_file() {
            return Err(ScanError::invalid_config(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        debug!(path = %path.display(), "config_explicit");
        return Ok((ScanConfig::load(&path)?, Some(path)));
    }

    let candidates = std::iter::once(cwd.join(CONFIG_FILE)).chain(global_path);
    for path in candidates {
        if path.is_file() {
            debug!(path = %path.display(), "config_discovered");
            return Ok((ScanConfig::load(&path)?, Some(path)));
        }
    }

    debug!("config_defaults");
    Ok((ScanConfig::default(), None))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::similarity::CosineMode;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = ScanConfig::default();
        assert_eq!(config.corpus.path, PathBuf::from("corpus"));
        assert_eq!(config.corpus.extensions, vec!["txt".to_string()]);
        assert!(config.corpus.seed_placeholder);
        assert!(config.algorithms.cosine && config.algorithms.lexical && config.algorithms.ngram);
        assert_eq!(config.algorithms.cosine_mode, CosineMode::Asymmetric);
        assert_eq!(config.weights.cosine, 0.4);
        assert_eq!(config.weights.lexical, 0.4);
        assert_eq!(config.weights.ngram, 0.2);
        assert_eq!(config.ngram.window_size, 9);
        assert_eq!(config.ngram.max_queries, 100);
        assert_eq!(config.analysis.passage_cutoff, 0.7);
        assert_eq!(config.analysis.preview_chars, 200);
        assert_eq!(config.passages.threshold, 0.7);
        assert_eq!(config.passages.min_words, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_file_is_default() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "").unwrap();

        let loaded = ScanConfig::load(&path).unwrap();
        assert_eq!(loaded, ScanConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);

        let mut config = ScanConfig::default();
        config.algorithms.ngram = false;
        config.algorithms.cosine_mode = CosineMode::Symmetric;
        config.weights.cosine = 0.7;
        config.corpus.path = PathBuf::from("refs");
        config.save(&path).unwrap();

        let loaded = ScanConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(
            &path,
            "[algorithms]\nlexical = false\n\n[passages]\nthreshold = 0.5\n",
        )
        .unwrap();

        let loaded = ScanConfig::load(&path).unwrap();
        assert!(!loaded.algorithms.lexical);
        assert!(loaded.algorithms.cosine);
        assert_eq!(loaded.passages.threshold, 0.5);
        assert_eq!(loaded.passages.min_words, 10);
        assert_eq!(loaded.weights, Weights::default());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);

        for body in [
            "[weights]\ncosine = -0.1\n",
            "[passages]\nthreshold = 1.5\n",
            "[ngram]\nwindow_size = 1\n",
            "[ngram]\nmax_queries = 0\n",
            "[ngram]\nmax_queries = 500\n",
            "[analysis]\npreview_chars = 0\n",
            "[analysis]\npreview_chars = 1000\n",
            "[corpus]\nextensions = []\n",
        ] {
            fs::write(&path, body).unwrap();
            let err = ScanConfig::load(&path).unwrap_err();
            assert!(
                matches!(err, ScanError::InvalidConfig { .. }),
                "expected InvalidConfig for {:?}, got {:?}",
                body,
                err
            );
        }
    }

    #[test]
    fn test_malformed_toml_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[weights\ncosine = ").unwrap();
        assert!(matches!(
            ScanConfig::load(&path),
            Err(ScanError::TomlDe(_))
        ));
    }

    #[test]
    fn test_resolve_prefers_explicit_then_local() {
        let dir = tempdir().unwrap();
        let local = dir.path().join(CONFIG_FILE);
        fs::write(&local, "[ngram]\nwindow_size = 5\n").unwrap();
        let explicit = dir.path().join("other.toml");
        fs::write(&explicit, "[ngram]\nwindow_size = 7\n").unwrap();

        let (config, source) = resolve_from(Some(&explicit), None, dir.path(), None).unwrap();
        assert_eq!(config.ngram.window_size, 7);
        assert_eq!(source, Some(explicit.clone()));

        let (config, source) =
            resolve_from(None, Some(explicit.clone()), dir.path(), None).unwrap();
        assert_eq!(config.ngram.window_size, 7);
        assert_eq!(source, Some(explicit));

        let (config, source) = resolve_from(None, None, dir.path(), None).unwrap();
        assert_eq!(config.ngram.window_size, 5);
        assert_eq!(source, Some(local));
    }

    #[test]
    fn test_resolve_falls_back_to_global_then_defaults() {
        let dir = tempdir().unwrap();
        let global = dir.path().join("global.toml");
        fs::write(&global, "[ngram]\nmax_queries = 50\n").unwrap();
        let empty_cwd = dir.path().join("cwd");
        fs::create_dir(&empty_cwd).unwrap();

        let (config, source) =
            resolve_from(None, None, &empty_cwd, Some(global.clone())).unwrap();
        assert_eq!(config.ngram.max_queries, 50);
        assert_eq!(source, Some(global));

        let (config, source) = resolve_from(None, None, &empty_cwd, None).unwrap();
        assert_eq!(config, ScanConfig::default());
        assert!(source.is_none());
    }

    #[test]
    fn test_resolve_missing_explicit_is_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = resolve_from(Some(&missing), None, dir.path(), None).unwrap_err();
        assert!(matches!(err, ScanError::InvalidConfig { .. }));
    }
}
