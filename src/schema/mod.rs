//! Wire-level types for the Fibery command protocol.
//!
//! This module defines:
//! - The `{command, args}` / `{success, result}` envelope pair
//! - Type and field descriptors with their `fibery/*` wire names
//! - The implicit system fields every database carries

mod command;
mod system;
mod types;

pub use command::{Command, CommandResult, CreateDatabaseResult};
pub use system::{merge_system_fields, system_fields};
pub use types::{FieldDescriptor, TypeDescriptor};
