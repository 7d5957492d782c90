//! Route-level page components.

pub mod contract;
