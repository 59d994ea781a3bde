//! Widget styling defaults and grid placement constraints.
//!
//! Everything here is toolkit-agnostic data plus two small trait seams
//! ([`theme::StyledWidget`], [`grid::GridContainer`]) that toolkit adapters
//! implement. No module talks to a windowing system directly.

pub mod grid;
pub mod keys;
pub mod theme;
