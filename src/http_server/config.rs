//! Listener settings for `reeldb serve`
//!
//! These live at the top level of `reeldb.json` next to `data_dir`. Every
//! field is optional there; the catalog listens on port 5000 on all
//! interfaces and accepts any page size unless told otherwise.

use serde::{Deserialize, Serialize};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;

/// Where the catalog listens and what it lets clients ask for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Browser origins allowed by CORS. Empty allows every origin.
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Upper bound on `per_page`; `None` leaves page size unbounded
    #[serde(default)]
    pub max_per_page: Option<usize>,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: DEFAULT_PORT,
            cors_origins: Vec::new(),
            max_per_page: None,
        }
    }
}

impl HttpServerConfig {
    /// Defaults, listening on `port`
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// `host:port`, as handed to the listener
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
