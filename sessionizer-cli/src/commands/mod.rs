//! Command implementations.

pub mod discover;
pub mod target;

pub use discover::DiscoverCommand;
pub use target::TargetCommand;
