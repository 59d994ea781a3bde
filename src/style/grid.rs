//! Grid placement constraints.
//!
//! [`GridConstraints`] describes where a widget sits in a grid-based
//! container; [`constrain`] hands it to a container behind the
//! [`GridContainer`] seam after validating the arguments.

use thiserror::Error;

/// Places the widget relative to the one added just before it.
pub const RELATIVE: i32 = -1;
/// Makes the widget the last one in its row or column.
pub const REMAINDER: i32 = 0;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("container is required for grid placement")]
    MissingContainer,
    #[error("widget is required for grid placement")]
    MissingWidget,
    #[error("container layout must be grid-based")]
    NotGridLayout,
}

/// How a widget stretches when its cell is larger than its requested size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Fill {
    #[default]
    None,
    Horizontal,
    Vertical,
    Both,
}

/// Where a widget sits inside its cell when it does not fill it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Anchor {
    Center,
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    #[default]
    NorthWest,
}

/// External padding between a widget and the edges of its cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Insets {
    pub top: i32,
    pub left: i32,
    pub bottom: i32,
    pub right: i32,
}

impl Insets {
    pub const fn new(top: i32, left: i32, bottom: i32, right: i32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }
}

/// Placement of one widget within a grid-based container.
///
/// `grid_x`/`grid_y` address the cell (zero-based, or [`RELATIVE`]);
/// `grid_width`/`grid_height` give the cell span (or [`RELATIVE`]/
/// [`REMAINDER`]). Weights control how extra space is distributed among rows
/// and columns; a zero weight receives none.
#[derive(Debug, Clone, PartialEq)]
pub struct GridConstraints {
    pub grid_x: i32,
    pub grid_y: i32,
    pub grid_width: i32,
    pub grid_height: i32,
    pub fill: Fill,
    pub anchor: Anchor,
    pub weight_x: f64,
    pub weight_y: f64,
    pub insets: Insets,
}

impl GridConstraints {
    /// A single-cell placement at `(grid_x, grid_y)` with no fill, no weight
    /// and a north-west anchor.
    pub fn cell(grid_x: i32, grid_y: i32) -> Self {
        Self {
            grid_x,
            grid_y,
            grid_width: 1,
            grid_height: 1,
            fill: Fill::default(),
            anchor: Anchor::default(),
            weight_x: 0.0,
            weight_y: 0.0,
            insets: Insets::default(),
        }
    }

    pub fn span(mut self, grid_width: i32, grid_height: i32) -> Self {
        self.grid_width = grid_width;
        self.grid_height = grid_height;
        self
    }

    pub fn fill(mut self, fill: Fill) -> Self {
        self.fill = fill;
        self
    }

    pub fn anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn weights(mut self, weight_x: f64, weight_y: f64) -> Self {
        self.weight_x = weight_x;
        self.weight_y = weight_y;
        self
    }

    pub fn insets(mut self, top: i32, left: i32, bottom: i32, right: i32) -> Self {
        self.insets = Insets::new(top, left, bottom, right);
        self
    }
}

/// Container half of the placement contract, implemented by toolkit adapters
/// for containers that can lay out by grid cell.
pub trait GridContainer {
    type Widget;

    /// Whether the container's current layout manager lays out by grid cell.
    fn supports_grid(&self) -> bool;

    /// Adds `widget` under `constraints`. Called only after [`supports_grid`]
    /// returned true.
    ///
    /// [`supports_grid`]: GridContainer::supports_grid
    fn place(&mut self, widget: Self::Widget, constraints: &GridConstraints);
}

/// Adds a widget to a grid-based container under the given constraints.
///
/// Fails with [`LayoutError`] when the container or widget is absent, or when
/// the container's layout is not grid-based. These are caller mistakes, not
/// recoverable conditions, so nothing is placed on error.
pub fn constrain<C: GridContainer>(
    container: Option<&mut C>,
    widget: Option<C::Widget>,
    constraints: &GridConstraints,
) -> Result<(), LayoutError> {
    let container = container.ok_or(LayoutError::MissingContainer)?;
    let widget = widget.ok_or(LayoutError::MissingWidget)?;

    if !container.supports_grid() {
        return Err(LayoutError::NotGridLayout);
    }

    container.place(widget, constraints);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{constrain, Anchor, Fill, GridConstraints, GridContainer, LayoutError, REMAINDER};

    struct FakeGrid {
        grid: bool,
        placed: Vec<(u32, GridConstraints)>,
    }

    impl FakeGrid {
        fn new(grid: bool) -> Self {
            Self {
                grid,
                placed: Vec::new(),
            }
        }
    }

    impl GridContainer for FakeGrid {
        type Widget = u32;

        fn supports_grid(&self) -> bool {
            self.grid
        }

        fn place(&mut self, widget: u32, constraints: &GridConstraints) {
            self.placed.push((widget, constraints.clone()));
        }
    }

    #[test]
    fn places_widget_in_grid_container() {
        let mut container = FakeGrid::new(true);
        let constraints = GridConstraints::cell(0, 1)
            .span(REMAINDER, 1)
            .fill(Fill::Horizontal)
            .weights(1.0, 0.0)
            .insets(2, 4, 2, 4);

        constrain(Some(&mut container), Some(7), &constraints).unwrap();

        assert_eq!(container.placed.len(), 1);
        let (widget, placed) = &container.placed[0];
        assert_eq!(*widget, 7);
        assert_eq!(placed.grid_y, 1);
        assert_eq!(placed.grid_width, REMAINDER);
        assert_eq!(placed.fill, Fill::Horizontal);
        assert_eq!(placed.insets.left, 4);
    }

    #[test]
    fn missing_container_is_rejected() {
        let result = constrain::<FakeGrid>(None, Some(1), &GridConstraints::cell(0, 0));
        assert_eq!(result, Err(LayoutError::MissingContainer));
    }

    #[test]
    fn missing_widget_is_rejected() {
        let mut container = FakeGrid::new(true);
        let result = constrain(Some(&mut container), None, &GridConstraints::cell(0, 0));
        assert_eq!(result, Err(LayoutError::MissingWidget));
        assert!(container.placed.is_empty());
    }

    #[test]
    fn non_grid_layout_is_rejected() {
        let mut container = FakeGrid::new(false);
        let result = constrain(Some(&mut container), Some(1), &GridConstraints::cell(0, 0));
        assert_eq!(result, Err(LayoutError::NotGridLayout));
        assert!(container.placed.is_empty());
    }

    #[test]
    fn cell_defaults_match_the_documented_values() {
        let constraints = GridConstraints::cell(2, 3);
        assert_eq!(constraints.grid_width, 1);
        assert_eq!(constraints.grid_height, 1);
        assert_eq!(constraints.fill, Fill::None);
        assert_eq!(constraints.anchor, Anchor::NorthWest);
        assert_eq!(constraints.weight_x, 0.0);
        assert_eq!(constraints.weight_y, 0.0);
    }
}
