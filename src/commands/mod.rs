//! Command implementations for nbfilter CLI

pub mod filter;
pub mod helpers;
