//! Networking modules for contract action requests.
//!
//! SYSTEM CONTEXT
//! ==============
//! `gateway` performs the JSON POST round trip and `types` defines the wire
//! schema plus the failure taxonomy shared by forms and confirmable actions.

pub mod gateway;
pub mod types;
