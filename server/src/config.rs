//! Startup configuration, read from flags or the environment.

use clap::Parser;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_BASE_PATH: &str = "http://localhost";

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(author, version, about = "In-memory todo REST backend", long_about = None)]
pub struct Config {
    /// Host address to listen on
    #[arg(long, env = "HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Public base URL used to build each item's `url` (the port is appended)
    #[arg(long, env = "BASE_PATH", default_value = DEFAULT_BASE_PATH)]
    pub base_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            base_path: DEFAULT_BASE_PATH.to_string(),
        }
    }
}

impl Config {
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Base for item urls: `{base_path}:{port}`.
    pub fn public_base(&self) -> String {
        format!("{}:{}", self.base_path.trim_end_matches('/'), self.port)
    }
}
