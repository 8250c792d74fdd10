//! Helpers shared by the crates of the workspace: polling of asynchronous conditions, newtype
//! wrappers and the endpoint of a started node.

pub mod futures;
pub mod macros;
pub mod types;
