use crate::chain::ChainError;

/// Typed outcome of a tool handler.
///
/// Handlers return `Result<String, ToolError>`; the MCP layer renders the
/// `Err` arm as descriptive text content in a normal tool result, so the
/// `Display` strings below are exactly what callers see.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("Invalid request: {0}")]
    Validation(String),

    #[error("Missing private key: set the MONAD_PRIVATE_KEY environment variable to enable transfers")]
    MissingCredential,

    #[error("Insufficient balance: tried to send {requested} MON but only {available} MON is available")]
    InsufficientFunds { requested: String, available: String },

    #[error("Could not compute average gas price: none of the {0} sampled blocks report a base fee")]
    NoBaseFee(usize),

    #[error("RPC request failed: {0}")]
    Rpc(#[from] ChainError),
}
