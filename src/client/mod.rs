//! The command client: typed operations over the batch endpoint.
//!
//! Every operation is a single blocking POST of a command array. The client
//! holds no mutable state between calls; the only shared pieces are the
//! immutable [`Session`] and the reqwest connection pool.

use crate::error::{FiberyError, Result};
use crate::schema::{
    merge_system_fields, Command, CommandResult, CreateDatabaseResult, FieldDescriptor,
    TypeDescriptor,
};
use crate::session::Session;
use reqwest::blocking::Client;
use serde_json::{json, Map, Value};
use std::time::Duration;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// The mixin attached to every newly created database.
const RANK_MIXIN: &str = "fibery/rank-mixin";

/// Executes commands against one workspace's batch endpoint.
pub struct CommandClient {
    session: Session,
    client: Client,
    timeout: Duration,
}

impl CommandClient {
    /// Create a client with the default 30-second timeout.
    pub fn new(session: Session) -> Self {
        Self::with_timeout(session, DEFAULT_TIMEOUT)
    }

    /// Create a client with a custom timeout.
    pub fn with_timeout(session: Session, timeout: Duration) -> Self {
        Self {
            session,
            client: Client::builder()
                .user_agent("fibery-client")
                .timeout(timeout)
                .build()
                .expect("Failed to build HTTP client"),
            timeout,
        }
    }

    /// The session this client sends with.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The configured request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Execute a command batch in one request.
    ///
    /// This is the transport primitive under every typed operation: POST the
    /// command array with the session's authorization header, fail with
    /// [`FiberyError::RemoteRequest`] on any non-200 status (the raw body is
    /// attached verbatim, never interpreted or retried), and decode the
    /// result array otherwise.
    pub fn execute(&self, commands: &[Command]) -> Result<Vec<CommandResult>> {
        tracing::debug!(
            "Dispatching {} command(s) to {}",
            commands.len(),
            self.session.endpoint_url()
        );

        let response = self
            .client
            .post(self.session.endpoint_url())
            .header("Authorization", self.session.authorization_header())
            .json(commands)
            .send()?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            let body = response.text()?;
            return Err(FiberyError::RemoteRequest {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .map_err(|e| FiberyError::UnexpectedResponse {
                message: format!("response is not a command-result array: {}", e),
            })
    }

    /// Query the workspace schema.
    ///
    /// Returns the decoded result array verbatim; index 0 holds
    /// `{success, result}` where `result["fibery/types"]` lists the type
    /// descriptors. This is the raw escape hatch — no further validation is
    /// performed.
    pub fn get_schema(&self, with_description: bool) -> Result<Vec<CommandResult>> {
        let command = Command::new(
            "fibery.schema/query",
            json!({"with-description?": with_description}),
        );
        self.execute(&[command])
    }

    /// Look up a type descriptor by its exact, case-sensitive name.
    ///
    /// Fetches the schema once, then scans locally; first match wins. A
    /// missing schema, a missing `result`, and a name with no match all
    /// collapse to [`FiberyError::TypeNotFound`].
    pub fn get_type_by_name(&self, name: &str) -> Result<TypeDescriptor> {
        let results = self.get_schema(false)?;

        let types = results
            .first()
            .and_then(|entry| entry.result.get("fibery/types"))
            .and_then(Value::as_array);

        if let Some(types) = types {
            for candidate in types {
                if candidate.get("fibery/name").and_then(Value::as_str) == Some(name) {
                    return serde_json::from_value(candidate.clone()).map_err(|e| {
                        FiberyError::UnexpectedResponse {
                            message: format!("malformed type descriptor for '{}': {}", name, e),
                        }
                    });
                }
            }
        }

        Err(FiberyError::TypeNotFound { name: name.into() })
    }

    /// Create a database (domain type) with the given fields.
    ///
    /// The caller's field descriptors are validated before anything is sent;
    /// a malformed entry fails fast with zero network calls. The implicit
    /// system fields are then merged in, with caller-supplied fields of the
    /// same name taking precedence.
    ///
    /// One request carries two commands: the wrapped `schema.type/create`
    /// first, then `fibery.app/install-mixins` attaching the rank mixin.
    /// The type must exist before the mixin install runs against it, which
    /// is why both ride in a single ordered batch.
    ///
    /// The outcome is returned as a tagged [`CreateDatabaseResult`] rather
    /// than raised; callers branch on the variant.
    pub fn create_database(
        &self,
        name: &str,
        fields: Vec<FieldDescriptor>,
    ) -> Result<CreateDatabaseResult> {
        for field in &fields {
            field.validate()?;
        }
        let fields = merge_system_fields(fields);

        let type_create = json!({
            "command": "schema.type/create",
            "args": {
                "fibery/name": name,
                "fibery/meta": {
                    "fibery/domain?": true,
                    "fibery/secured?": true
                },
                "fibery/fields": fields
            }
        });
        let commands = [
            Command::new("fibery.schema/batch", json!({"commands": [type_create]})),
            Command::new(
                "fibery.app/install-mixins",
                json!({"types": {(name): [RANK_MIXIN]}}),
            ),
        ];

        let mut results = self.execute(&commands)?;
        if results.is_empty() {
            return Err(FiberyError::UnexpectedResponse {
                message: format!("empty result array creating database '{}'", name),
            });
        }
        Ok(CreateDatabaseResult::from(results.remove(0)))
    }

    /// Create one entity of the given type.
    ///
    /// The data mapping is passed through untouched; field names are not
    /// checked against the schema. On success the remote result object
    /// (typically the created entity including its generated id) is returned
    /// verbatim. A remote `success: false` fails with
    /// [`FiberyError::EntityCreation`] carrying the remote diagnostic.
    pub fn create_entity(
        &self,
        type_name: &str,
        entity: &Map<String, Value>,
    ) -> Result<Map<String, Value>> {
        let command = Command::new(
            "fibery.entity/create",
            json!({"type": type_name, "entity": entity}),
        );

        let mut results = self.execute(&[command])?;
        if results.is_empty() {
            return Err(FiberyError::UnexpectedResponse {
                message: format!("empty result array creating entity of '{}'", type_name),
            });
        }

        let entry = results.remove(0);
        if !entry.success {
            let diagnostic = match &entry.result {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            tracing::warn!("Entity creation for '{}' failed: {}", type_name, diagnostic);
            return Err(FiberyError::EntityCreation {
                type_name: type_name.into(),
                diagnostic,
            });
        }

        match entry.result {
            Value::Object(map) => Ok(map),
            other => Err(FiberyError::UnexpectedResponse {
                message: format!("entity/create result is not an object: {}", other),
            }),
        }
    }
}
