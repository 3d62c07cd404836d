//! Page state, free of any browser dependency.
//!
//! DESIGN
//! ======
//! Each module holds one concern's data plus the pure rules that change it.
//! The `dom` layer reads events, calls in here, and renders the result.

pub mod contact_form;
pub mod nav;
pub mod scroll;
pub mod theme;
