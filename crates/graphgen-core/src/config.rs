//! Configuration for one generation run.
//!
//! A run is fully described by a [`GenerateConfig`] value that is passed
//! explicitly through every stage; there are no process-wide defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Optional file read from the package directory.
pub const CONFIG_FILE_NAME: &str = "graphgen.toml";

/// Crate the generated code calls into.
pub const DEFAULT_RUNTIME_CRATE: &str = "modusgraph";

/// Configuration for a generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerateConfig {
    /// Directory holding the record declarations.
    pub package_dir: PathBuf,

    /// Output directory (defaults to `package_dir`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,

    /// Directory of the command-surface `main.rs` (defaults to `<output>/cmd/<package>`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cli_dir: Option<PathBuf>,

    /// Display name of the command surface (defaults to the package name).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cli_name: Option<String>,

    /// Wire validation hooks into the command surface.
    pub with_validator: bool,

    /// Emit the command surface at all.
    pub emit_cli: bool,

    /// Runtime crate referenced by generated code.
    pub runtime_crate: String,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            package_dir: PathBuf::from("."),
            output_dir: None,
            cli_dir: None,
            cli_name: None,
            with_validator: false,
            emit_cli: true,
            runtime_crate: DEFAULT_RUNTIME_CRATE.to_string(),
        }
    }
}

/// Values supplied on the command line; `None` keeps the loaded value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub output_dir: Option<PathBuf>,
    pub cli_dir: Option<PathBuf>,
    pub cli_name: Option<String>,
    pub with_validator: Option<bool>,
    pub emit_cli: Option<bool>,
    pub runtime_crate: Option<String>,
}

impl GenerateConfig {
    /// Configuration for `package_dir` with every other value defaulted.
    pub fn new(package_dir: impl Into<PathBuf>) -> Self {
        Self {
            package_dir: package_dir.into(),
            ..Self::default()
        }
    }

    /// Load `graphgen.toml` from `package_dir` when present.
    ///
    /// Relative paths in the file are resolved against `package_dir`.
    pub fn load(package_dir: &Path) -> ConfigResult<Self> {
        let path = package_dir.join(CONFIG_FILE_NAME);
        if !path.is_file() {
            return Ok(Self::new(package_dir));
        }

        let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        let mut config: Self =
            toml::from_str(&contents).map_err(|source| ConfigError::Toml { path, source })?;

        config.package_dir = package_dir.to_path_buf();
        config.output_dir = config.output_dir.map(|p| package_dir.join(p));
        config.cli_dir = config.cli_dir.map(|p| package_dir.join(p));
        config.validate()?;
        Ok(config)
    }

    /// Apply command-line overrides on top of loaded values.
    pub fn merge(mut self, overrides: ConfigOverrides) -> ConfigResult<Self> {
        if let Some(output_dir) = overrides.output_dir {
            self.output_dir = Some(output_dir);
        }
        if let Some(cli_dir) = overrides.cli_dir {
            self.cli_dir = Some(cli_dir);
        }
        if let Some(cli_name) = overrides.cli_name {
            self.cli_name = Some(cli_name);
        }
        if let Some(with_validator) = overrides.with_validator {
            self.with_validator = with_validator;
        }
        if let Some(emit_cli) = overrides.emit_cli {
            self.emit_cli = emit_cli;
        }
        if let Some(runtime_crate) = overrides.runtime_crate {
            self.runtime_crate = runtime_crate;
        }
        self.validate()?;
        Ok(self)
    }

    /// Builder-style output directory override.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// Builder-style command-surface directory override.
    pub fn with_cli_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cli_dir = Some(dir.into());
        self
    }

    /// Builder-style command-surface name override.
    pub fn with_cli_name(mut self, name: impl Into<String>) -> Self {
        self.cli_name = Some(name.into());
        self
    }

    /// Builder-style validator toggle.
    pub fn with_validator(mut self, enabled: bool) -> Self {
        self.with_validator = enabled;
        self
    }

    /// Builder-style command-surface toggle.
    pub fn with_emit_cli(mut self, enabled: bool) -> Self {
        self.emit_cli = enabled;
        self
    }

    /// Resolved output directory.
    pub fn output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| self.package_dir.clone())
    }

    /// Resolved command-surface directory for `package_name`.
    pub fn cli_dir(&self, package_name: &str) -> PathBuf {
        self.cli_dir
            .clone()
            .unwrap_or_else(|| self.output_dir().join("cmd").join(package_name))
    }

    fn validate(&self) -> ConfigResult<()> {
        if self.runtime_crate.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "runtime_crate must not be empty".to_string(),
            ));
        }
        if !is_rust_path(&self.runtime_crate) {
            return Err(ConfigError::Invalid(format!(
                "runtime_crate `{}` is not a Rust path (crate names use `_`, not `-`)",
                self.runtime_crate
            )));
        }
        if let Some(name) = &self.cli_name {
            if name.trim().is_empty() {
                return Err(ConfigError::Invalid("cli_name must not be empty".to_string()));
            }
        }
        Ok(())
    }
}

/// Whether `path` is a `::`-separated sequence of Rust identifiers.
fn is_rust_path(path: &str) -> bool {
    path.split("::").all(|segment| {
        let mut chars = segment.chars();
        match chars.next() {
            Some(first) if first.is_ascii_alphabetic() => {}
            Some('_') if segment.len() > 1 => {}
            _ => return false,
        }
        chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
    })
}
