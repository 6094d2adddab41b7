//! fibery-client - Synchronous client library for the Fibery workspace API.
//!
//! Every Fibery operation goes through a single command-batch endpoint:
//! an HTTPS POST of a JSON array of `{"command", "args"}` objects, answered
//! by a JSON array of `{"success", "result"}` objects in matching order.
//! This crate wraps that endpoint with typed operations for querying the
//! schema, looking up types, creating databases, and creating entities.
//!
//! # Modules
//!
//! - [`client`] - The command client and its typed operations
//! - [`error`] - Error types and result aliases
//! - [`schema`] - Wire-level command and schema descriptor types
//! - [`session`] - Credentials, endpoint derivation, and the auth probe
//!
//! # Example
//!
//! ```no_run
//! use fibery_client::client::CommandClient;
//! use fibery_client::session::Session;
//!
//! let session = Session::new("my-token", "my-workspace")?;
//! let client = CommandClient::new(session);
//! let todo = client.get_type_by_name("Product Management/Task")?;
//! println!("{} has {} fields", todo.name, todo.fields.len());
//! # Ok::<(), fibery_client::FiberyError>(())
//! ```

pub mod client;
pub mod error;
pub mod schema;
pub mod session;

pub use error::{FiberyError, Result};
