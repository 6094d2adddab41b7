//! Command and result envelopes for the batch endpoint.
//!
//! A request is an ordered array of [`Command`] values; the response is an
//! array of [`CommandResult`] values in matching order. Order matters: the
//! service executes commands sequentially, and a later command may depend on
//! an earlier command's side effect (mixin installation after type creation).

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One entry of a command batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Command {
    /// Command name, e.g. `fibery.schema/query`.
    pub command: String,
    /// Command arguments, shaped per command.
    pub args: Value,
}

impl Command {
    pub fn new(command: impl Into<String>, args: Value) -> Self {
        Self {
            command: command.into(),
            args,
        }
    }
}

/// One entry of a command batch response.
///
/// The shape of `result` depends on `success`: a structured object on
/// success, a diagnostic (usually a string) on failure. Callers must branch
/// on `success` before interpreting `result`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandResult {
    pub success: bool,
    #[serde(default)]
    pub result: Value,
}

/// Outcome of a database creation, tagged by the remote `success` flag.
///
/// On success the service answers with an opaque confirmation string; on
/// failure it answers with a structured diagnostic. This enum replaces the
/// "result is a string or an object depending on success" ad hoc typing with
/// a shape callers can match on.
#[derive(Debug, Clone, PartialEq)]
pub enum CreateDatabaseResult {
    Success(String),
    Failure(Value),
}

impl CreateDatabaseResult {
    pub fn is_success(&self) -> bool {
        matches!(self, CreateDatabaseResult::Success(_))
    }
}

impl From<CommandResult> for CreateDatabaseResult {
    fn from(entry: CommandResult) -> Self {
        if entry.success {
            let confirmation = match entry.result {
                Value::String(s) => s,
                other => other.to_string(),
            };
            CreateDatabaseResult::Success(confirmation)
        } else {
            CreateDatabaseResult::Failure(entry.result)
        }
    }
}
