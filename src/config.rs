use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use serde::Deserialize;
use tokio::sync::Semaphore;

/// Environment variable naming an optional YAML config file.
pub const CONFIG_ENV: &str = "SERVER_CONFIG";

/// Command line arguments. Only the port is configurable from the CLI.
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "minnow",
    about = "Minimal concurrent HTTP/1.x server",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Port to listen on (default 80)
    #[arg(short = 'p', value_name = "port_number")]
    pub port: Option<u16>,
}

/// How a `/static/...` sub-path is turned into a filesystem path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathPolicy {
    /// Sub-paths containing a `..` segment are refused.
    #[default]
    Contained,
    /// The sub-path is appended to the root unchecked.
    Raw,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Ceiling on concurrently running connection tasks
    pub max_connections: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 80,
            max_connections: 10_000,
        }
    }
}

impl ServerConfig {
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StaticConfig {
    /// Content root, relative to the working directory unless absolute
    pub root: PathBuf,
    pub path_policy: PathPolicy,
}

impl Default for StaticConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("./static"),
            path_policy: PathPolicy::Contained,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub static_files: StaticConfig,
}

impl Config {
    /// Defaults, then the file named by `SERVER_CONFIG` if set, then the CLI.
    pub fn load(cli: &Cli) -> anyhow::Result<Self> {
        let mut cfg = match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::default(),
        };
        cfg.apply_cli(cli);
        Ok(cfg)
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        Self::from_yaml_str(&text)
            .with_context(|| format!("parsing config file {}", path.display()))
    }

    pub fn from_yaml_str(text: &str) -> anyhow::Result<Self> {
        let cfg: Self = serde_yaml::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Rejects values the server cannot start with.
    pub fn validate(&self) -> anyhow::Result<()> {
        let max = self.server.max_connections;
        if max == 0 {
            anyhow::bail!("max_connections must be >= 1");
        }
        if max > Semaphore::MAX_PERMITS {
            anyhow::bail!(
                "max_connections must be <= {}, got {}",
                Semaphore::MAX_PERMITS,
                max
            );
        }
        Ok(())
    }

    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(port) = cli.port {
            self.server.port = port;
        }
    }
}
