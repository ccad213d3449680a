//! Category module
//!
//! Categories are identified by name; tasks refer to them by that name.

mod model;

pub use model::*;
