//! Read-only operator routes.

pub mod access;
pub mod audit;
