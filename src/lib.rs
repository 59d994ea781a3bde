//! Styling and string helpers for widget-based UIs.
//!
//! Two independent surfaces:
//! - [`text`]: pure string operations (description normalization, version
//!   tokenizing, budget-aware truncation, delimited-area removal,
//!   case-insensitive sorted insertion). Absent input is `Option`; each
//!   operation documents whether absence propagates or collapses to empty.
//! - [`style`]: widget visual defaults and grid placement constraints,
//!   expressed as toolkit-agnostic data plus small trait seams that toolkit
//!   adapters implement.
//!
//! Everything is synchronous and free of shared state, so calls from multiple
//! threads need no coordination.

pub mod style;
pub mod text;

/// Delimited-area removal (tags, HTML comments).
pub use crate::text::areas::{remove_areas, remove_html_comments, remove_tags};

/// Description normalization and emptiness checks.
pub use crate::text::describe::{friendly_description, is_empty_after_trimming};

/// Case-insensitive ordering helpers.
pub use crate::text::sorted::{sort, sorted_insert_index};

/// Character-budget and display-width truncation.
pub use crate::text::truncate::{truncate, truncate_to_width};

/// Version string tokenizing.
pub use crate::text::version::tokenize_version;

/// Grapheme and display width helpers.
pub use crate::text::width::{display_width, grapheme_width};

/// Grid placement constraints and the container seam.
pub use crate::style::grid::{
    constrain, Anchor, Fill, GridConstraints, GridContainer, Insets, LayoutError, RELATIVE,
    REMAINDER,
};

/// Widget property-key table.
pub use crate::style::keys::{PropertyKeys, WidgetKind};

/// Visual defaults, theme lookup, and the widget seam.
pub use crate::style::theme::{
    apply_defaults, resolve_style, Color, EmptyTheme, FontSpec, FontStyle, ResolvedStyle,
    StyleDefaults, StyledWidget, ThemeSource,
};
