use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// On-disk TOML configuration structure.
/// All fields are optional so partial configs work (merge with defaults).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    pub extraction: Option<ExtractionConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractionConfig {
    pub sort: Option<bool>,
    pub header_exclusion: Option<f32>,
    pub footer_exclusion: Option<f32>,
}

/// Resolved extraction settings handed to the facade and the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtractionOptions {
    /// Reorder text blocks into reading order.
    pub sort: bool,
    /// Fraction of page height from the top to drop as header.
    pub header_exclusion: Option<f32>,
    /// Fraction of page height from the bottom to drop as footer.
    pub footer_exclusion: Option<f32>,
}

impl Default for ExtractionOptions {
    fn default() -> Self {
        Self {
            sort: true,
            header_exclusion: None,
            footer_exclusion: None,
        }
    }
}

impl ConfigFile {
    /// Fill unset fields with [`ExtractionOptions::default`]. Ratios of zero
    /// or less disable the exclusion.
    pub fn extraction_options(&self) -> ExtractionOptions {
        let defaults = ExtractionOptions::default();
        let Some(extraction) = self.extraction.as_ref() else {
            return defaults;
        };
        ExtractionOptions {
            sort: extraction.sort.unwrap_or(defaults.sort),
            header_exclusion: extraction
                .header_exclusion
                .filter(|r| *r > 0.0)
                .or(defaults.header_exclusion),
            footer_exclusion: extraction
                .footer_exclusion
                .filter(|r| *r > 0.0)
                .or(defaults.footer_exclusion),
        }
    }
}

/// Platform config directory path: `<config_dir>/yespdf/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("yespdf").join("config.toml"))
}

/// Load config by cascading CWD `.yespdf.toml` over platform config.
/// CWD values override platform values.
pub fn load_config() -> ConfigFile {
    let platform = config_path().and_then(|p| load_from_path(&p));
    let cwd = load_from_path(Path::new(".yespdf.toml"));

    match (platform, cwd) {
        (None, None) => ConfigFile::default(),
        (Some(p), None) => p,
        (None, Some(c)) => c,
        (Some(p), Some(c)) => merge(p, c),
    }
}

/// Load a config from a specific path. Returns `None` if the file doesn't
/// exist or can't be parsed.
pub fn load_from_path(path: &Path) -> Option<ConfigFile> {
    let content = std::fs::read_to_string(path).ok()?;
    match toml::from_str(&content) {
        Ok(config) => Some(config),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring unparseable config");
            None
        }
    }
}

/// Merge two configs: `overlay` values take precedence over `base`.
pub fn merge(base: ConfigFile, overlay: ConfigFile) -> ConfigFile {
    ConfigFile {
        extraction: Some(ExtractionConfig {
            sort: overlay
                .extraction
                .as_ref()
                .and_then(|e| e.sort)
                .or_else(|| base.extraction.as_ref().and_then(|e| e.sort)),
            header_exclusion: overlay
                .extraction
                .as_ref()
                .and_then(|e| e.header_exclusion)
                .or_else(|| base.extraction.as_ref().and_then(|e| e.header_exclusion)),
            footer_exclusion: overlay
                .extraction
                .as_ref()
                .and_then(|e| e.footer_exclusion)
                .or_else(|| base.extraction.as_ref().and_then(|e| e.footer_exclusion)),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extraction_round_trip_toml() {
        let config = ConfigFile {
            extraction: Some(ExtractionConfig {
                sort: Some(false),
                footer_exclusion: Some(0.05),
                ..Default::default()
            }),
        };
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: ConfigFile = toml::from_str(&toml_str).unwrap();
        let extraction = parsed.extraction.unwrap();
        assert_eq!(extraction.sort, Some(false));
        assert_eq!(extraction.footer_exclusion, Some(0.05));
        assert!(extraction.header_exclusion.is_none());
    }

    #[test]
    fn empty_config_resolves_to_defaults() {
        let parsed: ConfigFile = toml::from_str("").unwrap();
        assert_eq!(parsed.extraction_options(), ExtractionOptions::default());
        assert!(parsed.extraction_options().sort);
    }

    #[test]
    fn non_positive_ratio_disables_exclusion() {
        let toml_str = "[extraction]\nheader_exclusion = 0.0\nfooter_exclusion = 0.05\n";
        let parsed: ConfigFile = toml::from_str(toml_str).unwrap();
        let options = parsed.extraction_options();
        assert_eq!(options.header_exclusion, None);
        assert_eq!(options.footer_exclusion, Some(0.05));
    }

    #[test]
    fn merge_overlay_wins() {
        let base = ConfigFile {
            extraction: Some(ExtractionConfig {
                sort: Some(true),
                header_exclusion: Some(0.1),
                ..Default::default()
            }),
        };
        let overlay = ConfigFile {
            extraction: Some(ExtractionConfig {
                sort: Some(false),
                ..Default::default()
            }),
        };
        let merged = merge(base, overlay).extraction.unwrap();
        assert_eq!(merged.sort, Some(false));
        assert_eq!(merged.header_exclusion, Some(0.1));
    }

    #[test]
    fn merge_base_preserved_when_overlay_absent() {
        let base = ConfigFile {
            extraction: Some(ExtractionConfig {
                footer_exclusion: Some(0.05),
                ..Default::default()
            }),
        };
        let merged = merge(base, ConfigFile::default());
        assert_eq!(merged.extraction.unwrap().footer_exclusion, Some(0.05));
    }

    #[test]
    fn load_from_path_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[extraction]\nsort = false\n").unwrap();
        let config = load_from_path(&path).unwrap();
        assert!(!config.extraction_options().sort);
    }

    #[test]
    fn load_from_path_missing_or_invalid_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_from_path(&dir.path().join("absent.toml")).is_none());

        let bad = dir.path().join("bad.toml");
        std::fs::write(&bad, "[extraction\nsort = ").unwrap();
        assert!(load_from_path(&bad).is_none());
    }
}
