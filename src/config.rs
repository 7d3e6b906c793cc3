//! Settings: built-in defaults, then `config.toml`, then command-line flags.

use crate::error::ConfigError;
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use testgen_core::EscapePolicy;
use testgen_core::storage::DEFAULT_EXTENSION;
use tracing::debug;

const MAX_CONFIG_FILE_BYTES: u64 = 1_048_576; // 1 MiB

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    output_dir: Option<PathBuf>,
    extension: Option<String>,
    escape: Option<String>,
    color: Option<bool>,
    delay_ms: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Directory generated files are written to. Must exist.
    pub output_dir: PathBuf,
    /// Extension of generated files, without the dot.
    pub extension: String,
    pub escape: EscapePolicy,
    pub color: bool,
    /// Pause shown as "generating" before the script is printed.
    pub delay: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            extension: DEFAULT_EXTENSION.to_string(),
            escape: EscapePolicy::default(),
            color: true,
            delay: Duration::ZERO,
        }
    }
}

/// Values given on the command line; `None` keeps the configured value.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub output_dir: Option<PathBuf>,
    pub extension: Option<String>,
    pub escape: Option<EscapePolicy>,
    pub color: Option<bool>,
    pub delay_ms: Option<u64>,
}

impl Settings {
    pub fn apply(&mut self, overrides: &Overrides) {
        if let Some(dir) = &overrides.output_dir {
            self.output_dir = dir.clone();
        }
        if let Some(ext) = &overrides.extension {
            self.extension = ext.clone();
        }
        if let Some(escape) = overrides.escape {
            self.escape = escape;
        }
        if let Some(color) = overrides.color {
            self.color = color;
        }
        if let Some(ms) = overrides.delay_ms {
            self.delay = Duration::from_millis(ms);
        }
    }
}

/// Load settings from `config_file`, or from the user config dir when none is
/// given. Problems are returned as warnings and the defaults are kept.
pub fn load_settings(config_file: Option<&PathBuf>, no_config: bool) -> (Settings, Vec<String>) {
    let mut settings = Settings::default();
    let mut warnings: Vec<String> = Vec::new();
    if no_config {
        return (settings, warnings);
    }

    let Some(path) = config_file.cloned().or_else(user_config_path) else {
        return (settings, warnings);
    };
    debug!(path = %path.display(), "config file");

    match read_config(&path, config_file.is_some()) {
        Ok(Some(file)) => {
            for err in merge(&mut settings, file) {
                warnings.push(err.to_string());
            }
        }
        Ok(None) => {}
        Err(err) => warnings.push(err.to_string()),
    }
    (settings, warnings)
}

fn user_config_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("", "", "testgen")?;
    let mut path = proj.config_dir().to_path_buf();
    path.push("config.toml");
    Some(path)
}

/// A missing file is only an error when it was asked for explicitly.
fn read_config(path: &Path, explicit: bool) -> Result<Option<ConfigFile>, ConfigError> {
    if !path.exists() {
        return if explicit {
            Err(ConfigError::NotFound(path.to_path_buf()))
        } else {
            Ok(None)
        };
    }
    let meta = std::fs::metadata(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    if meta.len() > MAX_CONFIG_FILE_BYTES {
        return Err(ConfigError::TooLarge {
            path: path.to_path_buf(),
            size: meta.len(),
            max: MAX_CONFIG_FILE_BYTES,
        });
    }
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str::<ConfigFile>(&content)
        .map(Some)
        .map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
}

fn merge(settings: &mut Settings, file: ConfigFile) -> Vec<ConfigError> {
    let mut errors = Vec::new();
    if let Some(dir) = file.output_dir {
        settings.output_dir = dir;
    }
    if let Some(ext) = file.extension {
        match validate_extension(&ext) {
            Ok(ext) => settings.extension = ext,
            Err(err) => errors.push(err),
        }
    }
    if let Some(escape) = file.escape {
        match escape.parse::<EscapePolicy>() {
            Ok(policy) => settings.escape = policy,
            Err(message) => errors.push(ConfigError::Invalid {
                key: "escape",
                message,
            }),
        }
    }
    if let Some(color) = file.color {
        settings.color = color;
    }
    if let Some(ms) = file.delay_ms {
        settings.delay = Duration::from_millis(ms);
    }
    errors
}

/// Strip a leading dot and reject anything that would leave the output dir.
pub fn validate_extension(raw: &str) -> Result<String, ConfigError> {
    let ext = raw.trim().trim_start_matches('.');
    if ext.contains(['/', '\\']) || ext.contains("..") {
        return Err(ConfigError::Invalid {
            key: "extension",
            message: format!("'{}' must not contain path separators", raw),
        });
    }
    Ok(ext.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_config(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join("config.toml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_no_config_uses_defaults() {
        let (settings, warnings) = load_settings(None, true);
        assert_eq!(settings, Settings::default());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_full_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            dir.path(),
            r#"
output_dir = "out"
extension = ".txt"
escape = "python"
color = false
delay_ms = 250
"#,
        );
        let (settings, warnings) = load_settings(Some(&path), false);
        assert!(warnings.is_empty(), "{:?}", warnings);
        assert_eq!(settings.output_dir, PathBuf::from("out"));
        assert_eq!(settings.extension, "txt");
        assert_eq!(settings.escape, EscapePolicy::Python);
        assert!(!settings.color);
        assert_eq!(settings.delay, Duration::from_millis(250));
    }

    #[test]
    fn test_missing_explicit_config_warns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let (settings, warnings) = load_settings(Some(&path), false);
        assert_eq!(settings, Settings::default());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("Config file not found"));
    }

    #[test]
    fn test_unknown_key_is_parse_warning() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "colour = true\n");
        let (settings, warnings) = load_settings(Some(&path), false);
        assert_eq!(settings, Settings::default());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].starts_with("Failed to parse"));
    }

    #[test]
    fn test_bad_values_keep_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            dir.path(),
            "escape = \"html\"\nextension = \"../x\"\ncolor = false\n",
        );
        let (settings, warnings) = load_settings(Some(&path), false);
        assert_eq!(warnings.len(), 2);
        assert_eq!(settings.escape, EscapePolicy::Verbatim);
        assert_eq!(settings.extension, "py");
        // valid keys still apply
        assert!(!settings.color);
    }

    #[test]
    fn test_oversized_config_refused() {
        let dir = tempfile::tempdir().unwrap();
        let big = format!("# {}\n", "x".repeat(MAX_CONFIG_FILE_BYTES as usize));
        let path = write_config(dir.path(), &big);
        let (_, warnings) = load_settings(Some(&path), false);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("file too large"));
    }

    #[test]
    fn test_overrides_win() {
        let mut settings = Settings::default();
        settings.apply(&Overrides {
            output_dir: Some(PathBuf::from("/tmp/out")),
            escape: Some(EscapePolicy::Python),
            delay_ms: Some(5),
            ..Overrides::default()
        });
        assert_eq!(settings.output_dir, PathBuf::from("/tmp/out"));
        assert_eq!(settings.escape, EscapePolicy::Python);
        assert_eq!(settings.delay, Duration::from_millis(5));
        assert_eq!(settings.extension, "py");
        assert!(settings.color);
    }

    #[test]
    fn test_validate_extension() {
        assert_eq!(validate_extension(".py").unwrap(), "py");
        assert_eq!(validate_extension("").unwrap(), "");
        assert!(validate_extension("a/b").is_err());
    }
}
