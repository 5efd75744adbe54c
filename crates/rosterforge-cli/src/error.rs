use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("core error: {0}")]
    Core(#[from] rosterforge_core::Error),
    #[error("synthesis error: {0}")]
    Engine(#[from] rosterforge_engine::SynthesisError),
    #[error("sink error: {0}")]
    Sink(#[from] rosterforge_sink::SinkError),
    #[error("generation service error: {0}")]
    Llm(#[from] rosterforge_llm::LlmError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("settings parse error: {0}")]
    TomlDe(#[from] toml::de::Error),
    #[error("settings encode error: {0}")]
    TomlSer(#[from] toml::ser::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("logging setup failed: {0}")]
    Logging(String),
}

pub type CliResult<T> = Result<T, CliError>;
