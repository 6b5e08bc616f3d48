use crate::error::{ActivityError, Result};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

pub const DEFAULT_API_BASE: &str = "https://api.github.com";

pub const DEFAULT_ORGS: &[&str] = &[
    "binder-examples",
    "binderhub-ci-repos",
    "ipython",
    "jupyter",
    "jupyter-book",
    "jupyter-governance",
    "jupyter-incubator",
    "jupyter-server",
    "jupyter-standards",
    "jupyter-widgets",
    "jupyterhub",
    "jupyterlab",
    "jupyter-xeus",
    "jupytercon",
    "voila-dashboards",
    "voila-gallery",
];

#[derive(Clone, Serialize, Deserialize)]
pub struct Config {
    pub github_token: Option<String>,
    #[serde(default = "default_orgs")]
    pub orgs: Vec<String>,
    pub api_base: String,
    pub warn_threshold: u64,
    pub abort_threshold: u64,
    #[serde(default)]
    pub max_concurrency: Option<usize>,
    pub strict_rate_check: bool,
    pub name_width: usize,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("github_token", &self.github_token.as_ref().map(|_| "[REDACTED]"))
            .field("orgs", &self.orgs)
            .field("api_base", &self.api_base)
            .field("warn_threshold", &self.warn_threshold)
            .field("abort_threshold", &self.abort_threshold)
            .field("max_concurrency", &self.max_concurrency)
            .field("strict_rate_check", &self.strict_rate_check)
            .field("name_width", &self.name_width)
            .finish()
    }
}

fn default_orgs() -> Vec<String> {
    DEFAULT_ORGS.iter().map(|s| s.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            github_token: None,
            orgs: default_orgs(),
            api_base: DEFAULT_API_BASE.to_string(),
            warn_threshold: 100,
            abort_threshold: 10,
            max_concurrency: None,
            strict_rate_check: false,
            name_width: 20,
        }
    }
}

impl Config {
    pub fn load(cli_orgs: Vec<String>) -> Self {
        let config_file = config_dir().join("org-activity").join("config.toml");

        let mut figment = Figment::from(Serialized::defaults(Config::default()));

        if config_file.exists() {
            figment = figment.merge(Toml::file(&config_file));
        }

        // GH_TOKEN is merged last so it wins over a GITHUB_TOKEN left in the environment
        figment = figment
            .merge(Env::prefixed("ORG_ACTIVITY_"))
            .merge(
                Env::raw()
                    .only(&["GITHUB_TOKEN"])
                    .map(|_| "github_token".into()),
            )
            .merge(Env::raw().only(&["GH_TOKEN"]).map(|_| "github_token".into()));

        if !cli_orgs.is_empty() {
            figment = figment.merge(Serialized::default("orgs", cli_orgs));
        }

        match figment.extract::<Config>() {
            Ok(config) => config.validated(),
            Err(e) => {
                eprintln!("warning: config parse error, using defaults: {e}");
                Config::default()
            }
        }
    }

    fn validated(mut self) -> Self {
        if self.max_concurrency == Some(0) {
            eprintln!("warning: max_concurrency must be at least 1, running unbounded");
            self.max_concurrency = None;
        }
        self
    }

    /// The bearer token, rejecting a missing or blank value.
    pub fn token(&self) -> Result<&str> {
        match self.github_token.as_deref().map(str::trim) {
            Some(t) if !t.is_empty() => Ok(t),
            _ => Err(ActivityError::MissingToken),
        }
    }
}

pub fn config_dir() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join(".config"))
        })
        .unwrap_or_else(|| PathBuf::from("."))
}
