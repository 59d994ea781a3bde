//! String helpers shared across the UI layer.
//!
//! These helpers are pure (string in/string out) so widget code can call them
//! without holding any toolkit state. Absent input is modeled as `Option`;
//! each operation documents whether absence propagates or collapses to empty.

pub mod areas;
pub mod describe;
pub mod sorted;
pub mod truncate;
pub mod version;
pub mod width;
