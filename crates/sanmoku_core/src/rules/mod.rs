//! Game rules for sanmoku-narabe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart
//! from state storage so the validator and controller can compose them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{Verdict, evaluate};
