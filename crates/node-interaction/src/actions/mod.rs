//! The capability sets of a hardhat node client.

mod public;
mod wallet;

pub use public::*;
pub use test::*;
pub use wallet::*;
