//! The `hardhat-devnode` command line utility.

pub mod arguments;
pub mod commands;
