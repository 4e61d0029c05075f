//! CLI command implementations.

pub mod about;
pub mod info;
pub mod list;
pub mod run;
pub mod validate;
