//! Interaction state for the admin page.
//!
//! DESIGN
//! ======
//! Every module here is plain data plus transition methods; nothing touches
//! the DOM or the network. `admin` composes the pieces into one event-driven
//! controller, and the browser runtime in `util::dispatch` carries out the
//! effects it returns. That split keeps all sequencing rules testable
//! natively.

pub mod admin;
pub mod confirm;
pub mod form;
pub mod notify;
pub mod panel;
