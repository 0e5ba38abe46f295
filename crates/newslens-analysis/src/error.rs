use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("configuration error: {0}")]
    Config(#[from] newslens_core::ConfigError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("failed to read article file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid article file {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
