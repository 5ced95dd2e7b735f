//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables, `EDGEBLOCKS__SECTION__KEY`
//!    (e.g. `EDGEBLOCKS__HTTP__BEARER_TOKEN`)
//! 3. Config file (`--config`, or the platform default path)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use url::Url;

use edgeblocks_adapters::HttpClientConfig;

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "EDGEBLOCKS";

const REDACTED: &str = "********";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Content API client settings.
    pub http: HttpConfig,
    /// The page blocks are mounted on.
    pub page: PageConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub user_agent: Option<String>,
    /// Sent as `Authorization: Bearer ...` on credentialed fetches only.
    pub bearer_token: Option<String>,
    /// Sent as `Cookie` on credentialed fetches only.
    pub cookie: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Base for relative endpoint links in adventure list blocks.
    pub base_url: Option<Url>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `plain` or `json`; used when `--output-format` is
    /// left at `auto`.
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then the config file, then environment.
    ///
    /// An explicit `--config` path must exist; the default path is optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };
        Self::load_from(
            &path,
            required,
            Environment::with_prefix(ENV_PREFIX).separator("__"),
        )
    }

    fn load_from(path: &Path, required: bool, env: Environment) -> anyhow::Result<Self> {
        let defaults =
            Config::try_from(&Self::default()).context("Failed to encode default configuration")?;

        let settings = Config::builder()
            .add_source(defaults)
            .add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(env.try_parsing(true))
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?;

        settings
            .try_deserialize()
            .context("Configuration has invalid values")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.edgeblocks.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "edgeblocks", "edgeblocks")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".edgeblocks.toml"))
    }

    /// Client settings for the HTTP content adapter.
    pub fn http_client(&self) -> HttpClientConfig {
        HttpClientConfig {
            user_agent: self.http.user_agent.clone(),
            bearer_token: self.http.bearer_token.clone(),
            cookie: self.http.cookie.clone(),
        }
    }

    /// Copy safe to print: credentials masked.
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        let mask = |value: &mut Option<String>| {
            if value.is_some() {
                *value = Some(REDACTED.into());
            }
        };
        mask(&mut copy.http.bearer_token);
        mask(&mut copy.http.cookie);
        copy
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use super::*;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let map: config::Map<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .source(Some(map))
    }

    fn toml_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_have_no_credentials() {
        let cfg = AppConfig::default();
        assert!(cfg.http.bearer_token.is_none());
        assert!(cfg.page.base_url.is_none());
        assert_eq!(cfg.output.format, "auto");
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn missing_optional_file_yields_defaults() {
        let cfg =
            AppConfig::load_from(Path::new("/nonexistent/edgeblocks.toml"), false, env(&[]))
                .unwrap();
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn missing_required_file_is_error() {
        let result =
            AppConfig::load_from(Path::new("/nonexistent/edgeblocks.toml"), true, env(&[]));
        assert!(result.is_err());
    }

    #[test]
    fn file_values_are_read() {
        let file = toml_file(
            r#"
            [http]
            bearer_token = "from-file"

            [page]
            base_url = "https://www.example.com/en/"
            "#,
        );
        let cfg = AppConfig::load_from(file.path(), true, env(&[])).unwrap();
        assert_eq!(cfg.http.bearer_token.as_deref(), Some("from-file"));
        assert_eq!(
            cfg.page.base_url.as_ref().map(Url::as_str),
            Some("https://www.example.com/en/")
        );
    }

    #[test]
    fn environment_overrides_file() {
        let file = toml_file("[http]\nbearer_token = \"from-file\"\n");
        let cfg = AppConfig::load_from(
            file.path(),
            true,
            env(&[
                ("EDGEBLOCKS__HTTP__BEARER_TOKEN", "from-env"),
                ("EDGEBLOCKS__OUTPUT__NO_COLOR", "true"),
            ]),
        )
        .unwrap();
        assert_eq!(cfg.http.bearer_token.as_deref(), Some("from-env"));
        assert!(cfg.output.no_color);
    }

    #[test]
    fn invalid_base_url_is_error() {
        let file = toml_file("[page]\nbase_url = \"not a url\"\n");
        assert!(AppConfig::load_from(file.path(), true, env(&[])).is_err());
    }

    #[test]
    fn redacted_masks_only_present_secrets() {
        let mut cfg = AppConfig::default();
        cfg.http.cookie = Some("login-token=abc".into());
        let shown = cfg.redacted();
        assert_eq!(shown.http.cookie.as_deref(), Some(REDACTED));
        assert!(shown.http.bearer_token.is_none());
    }

    #[test]
    fn http_client_settings_follow_config() {
        let mut cfg = AppConfig::default();
        cfg.http.user_agent = Some("preview/1".into());
        let http = cfg.http_client();
        assert_eq!(http.user_agent.as_deref(), Some("preview/1"));
        assert!(http.cookie.is_none());
    }

    #[test]
    fn config_path_is_not_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
