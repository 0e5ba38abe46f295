use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Process-level settings for the server and CLI.
///
/// Everything the analysis engine itself needs lives in the taxonomy file
/// referenced by `taxonomy_path`; this struct only covers the adapters around it.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub taxonomy_path: PathBuf,
    pub feed_url: String,
    pub feed_timeout_secs: u64,
    pub feed_user_agent: String,
    /// Upper bound on articles taken from one feed response.
    pub max_articles: usize,
    /// Summaries longer than this many characters are truncated by the source.
    pub summary_max_chars: usize,
}
