//! Shared domain types for the clientdesk backend: primitive aliases,
//! the error taxonomy, and the HTTP route contract.

pub mod contract;
pub mod error;
pub mod types;
