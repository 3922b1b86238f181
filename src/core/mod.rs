//! Core library components.
//!
//! The password box itself: record model, codec, id allocation, queries,
//! persistence backends and the vault that ties them together.

pub mod cipher;
pub mod config;
pub mod constants;
pub mod domain;
pub mod id;
pub mod query;
pub mod store;
pub mod types;
pub mod vault;
