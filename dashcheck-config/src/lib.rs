//! Loader for verifier configuration with optional YAML + environment overlays.
//!
//! Every field of [`VerifyConfig`] has a default, so a bare invocation with
//! no `dashcheck.yaml` and no `DASHCHECK_*` environment variables yields a
//! fully usable configuration without touching the filesystem.
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Settings for one verification pass.
#[derive(Debug, Clone, Deserialize)]
pub struct VerifyConfig {
    /// Address of the dashboard under verification.
    #[serde(default = "default_address")]
    pub address: String,
    /// Text fragment whose appearance marks a rendered dashboard.
    #[serde(default = "default_marker")]
    pub marker: String,
    /// Where the screenshot artifact is written (overwritten each run).
    #[serde(default = "default_output")]
    pub output: PathBuf,
    /// WebDriver service endpoint (Chromedriver).
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,
    /// Run the browser without a visible window.
    #[serde(default = "default_headless")]
    pub headless: bool,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            marker: default_marker(),
            output: default_output(),
            webdriver_url: default_webdriver_url(),
            headless: default_headless(),
        }
    }
}

fn default_address() -> String {
    "http://localhost:3000/".into()
}
fn default_marker() -> String {
    "Panel & Giriş".into()
}
fn default_output() -> PathBuf {
    PathBuf::from("verification/dashboard.png")
}
fn default_webdriver_url() -> String {
    "http://localhost:9515".into()
}
fn default_headless() -> bool {
    true
}

/// Builder hiding the `config` crate wiring (optional YAML + env overrides).
pub struct VerifyConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
}

impl Default for VerifyConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl VerifyConfigLoader {
    /// Start an empty loader; [`load`](Self::load) attaches the
    /// `DASHCHECK_` environment overlay on top of whatever files follow.
    ///
    /// ```
    /// use dashcheck_config::VerifyConfigLoader;
    ///
    /// let config = VerifyConfigLoader::new().load().expect("defaults load");
    /// assert_eq!(config.address, "http://localhost:3000/");
    /// assert_eq!(config.marker, "Panel & Giriş");
    /// ```
    pub fn new() -> Self {
        Self {
            builder: Config::builder(),
        }
    }

    /// Attach a YAML file. The file is optional; a missing file leaves the
    /// defaults untouched instead of failing the load.
    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.builder = self
            .builder
            .add_source(File::from(path.as_ref()).required(false));
        self
    }

    /// Allow tests to merge inline YAML snippets.
    ///
    /// ```
    /// use dashcheck_config::VerifyConfigLoader;
    ///
    /// let config = VerifyConfigLoader::new()
    ///     .with_yaml_str("marker: \"Fleet Overview\"")
    ///     .load()
    ///     .unwrap();
    ///
    /// assert_eq!(config.marker, "Fleet Overview");
    /// assert_eq!(config.headless, true);
    /// ```
    pub fn with_yaml_str(mut self, yaml: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(yaml, FileFormat::Yaml));
        self
    }

    /// Consume the builder and deserialize the merged sources.
    ///
    /// Precedence, lowest to highest: serde defaults, YAML file(s) in the
    /// order attached, `DASHCHECK_`-prefixed environment variables. The
    /// environment source is attached here so it always lands on top.
    pub fn load(self) -> Result<VerifyConfig, ConfigError> {
        self.builder
            .add_source(Environment::with_prefix("DASHCHECK").try_parsing(true))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_verifier_constants() {
        let config = VerifyConfig::default();
        assert_eq!(config.address, "http://localhost:3000/");
        assert_eq!(config.marker, "Panel & Giriş");
        assert_eq!(config.output, PathBuf::from("verification/dashboard.png"));
        assert_eq!(config.webdriver_url, "http://localhost:9515");
        assert!(config.headless);
    }

    #[test]
    fn empty_sources_fall_back_to_defaults() {
        let config = VerifyConfigLoader::new().load().expect("load defaults");
        assert_eq!(config.address, VerifyConfig::default().address);
        assert_eq!(config.output, VerifyConfig::default().output);
    }

    #[test]
    fn yaml_overrides_only_the_given_fields() {
        let config = VerifyConfigLoader::new()
            .with_yaml_str("address: \"http://127.0.0.1:8080/\"\nheadless: false")
            .load()
            .expect("load yaml");
        assert_eq!(config.address, "http://127.0.0.1:8080/");
        assert!(!config.headless);
        assert_eq!(config.marker, "Panel & Giriş");
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let config = VerifyConfigLoader::new()
            .with_file("does-not-exist.yaml")
            .load()
            .expect("absent file tolerated");
        assert_eq!(config.marker, "Panel & Giriş");
    }
}
