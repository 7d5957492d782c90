//! Browser glue between the admin controller and the document.
//!
//! SYSTEM CONTEXT
//! ==============
//! `dom` answers geometry, field, and cookie queries for the controller;
//! `dispatch` runs the controller's effects and feeds completions back in.

pub mod dispatch;
pub mod dom;
