//! Core types and trait definitions for the rolo contact service.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

pub mod contact;
pub mod page;
pub mod store;
