//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the admin page's interactive surfaces. Each one reads
//! its slice of `AdminState` through the `Dispatcher` context and reports
//! user and DOM events back as controller events; none of them mutate state
//! directly.

pub mod action_form;
pub mod confirm_button;
pub mod confirm_dialog;
pub mod expandable_panel;
pub mod notification_stack;
