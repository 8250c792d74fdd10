//! This crate launches disposable hardhat development nodes in containers.
//!
//! [`HardhatContainer`] collects the configuration of a node, a [`ContainerLifecycleManager`]
//! launches it on a [`ContainerRuntime`] and [`StartedHardhatContainer`] hands out clients of the
//! running node.

mod builder;
pub mod constants;
mod error;
mod launch_spec;
mod lifecycle;
mod runtime;
mod started;

#[cfg(test)]
mod mock;

pub use builder::*;
pub use error::*;
pub use launch_spec::*;
pub use lifecycle::*;
pub use runtime::*;
pub use started::*;
