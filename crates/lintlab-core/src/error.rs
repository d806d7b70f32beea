//! Error types for the lintlab scenario controller.

/// Result type alias for lintlab operations.
pub type Result<T> = std::result::Result<T, LabError>;

/// Main error type for the lintlab system.
#[derive(Debug, thiserror::Error)]
pub enum LabError {
    /// IO errors from fixture and shared-file mutation
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Scenario key absent from the registry; indicates a wiring bug,
    /// not user input
    #[error("Unknown scenario: {key}")]
    UnknownScenario { key: String },

    /// Package manifest is missing or structurally unusable
    #[error("Manifest error: {0}")]
    Manifest(String),

    /// The analyzer subprocess could not be run
    #[error("Analyzer invocation failed: {0}")]
    Tool(String),

    /// The analyzer ran but produced no usable report
    #[error("Unparsable analyzer output: {0}")]
    ToolOutput(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl LabError {
    /// Create a new unknown-scenario error
    pub fn unknown_scenario(key: impl Into<String>) -> Self {
        Self::UnknownScenario { key: key.into() }
    }

    /// Create a new manifest error
    pub fn manifest(msg: impl Into<String>) -> Self {
        Self::Manifest(msg.into())
    }

    /// Create a new analyzer invocation error
    pub fn tool(msg: impl Into<String>) -> Self {
        Self::Tool(msg.into())
    }

    /// Create a new analyzer output error
    pub fn tool_output(msg: impl Into<String>) -> Self {
        Self::ToolOutput(msg.into())
    }

    /// Create a new config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Check if this error came from parsing the analyzer's report
    pub fn is_tool_output(&self) -> bool {
        matches!(self, Self::ToolOutput(_))
    }
}
