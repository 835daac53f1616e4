//! Shared types - plain data used by the grid core, the brain and the CLI
//!
//! Everything here is dependency-free data: coordinates, placement result
//! codes, the seven standard piece kinds and the four rotation states.
//!
//! # Coordinates
//!
//! The grid is addressed as `(x, y)` with `x` growing to the right and `y`
//! growing **upwards**: row 0 is the floor, so a column's height is simply
//! one past the index of its topmost filled cell.
//!
//! # Board Dimensions
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BOARD_WIDTH` | 10 | Default playfield columns |
//! | `BOARD_HEIGHT` | 20 | Default playfield rows a piece may rest in |
//! | `TOP_SPACE` | 4 | Extra rows above the playfield used for spawning |
//!
//! # Examples
//!
//! ```
//! use tetris_grid_types::{PieceKind, PlaceResult, Rotation};
//!
//! let kind = PieceKind::from_str("pyramid").unwrap();
//! assert_eq!(kind, PieceKind::Pyramid);
//! assert_eq!(PieceKind::from_str("t"), Some(PieceKind::Pyramid));
//!
//! assert_eq!(Rotation::North.rotate_ccw(), Rotation::West);
//! assert!(PlaceResult::RowFilled.is_success());
//! assert!(!PlaceResult::Bad.is_success());
//! ```

use std::fmt;

/// Default playfield width in cells
pub const BOARD_WIDTH: usize = 10;

/// Default playfield height in cells
pub const BOARD_HEIGHT: usize = 20;

/// Rows above the playfield kept free so a piece can spawn over the stack
pub const TOP_SPACE: usize = 4;

/// An integer cell offset or grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

/// Outcome of placing a shape on the grid.
///
/// `Ok` and `RowFilled` are successes. `OutOfBounds` and `Bad` are ordinary
/// outcomes, not faults, but they may leave a partial placement behind: the
/// caller must `undo()` before mutating the grid again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaceResult {
    /// Every cell was placed and no row became full
    Ok,
    /// Every cell was placed and at least one touched row is now full
    RowFilled,
    /// A cell fell outside the grid; iteration stopped there
    OutOfBounds,
    /// A cell landed on an already filled cell; iteration stopped there
    Bad,
}

impl PlaceResult {
    /// True for `Ok` and `RowFilled`
    pub fn is_success(&self) -> bool {
        matches!(self, PlaceResult::Ok | PlaceResult::RowFilled)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PlaceResult::Ok => "ok",
            PlaceResult::RowFilled => "row_filled",
            PlaceResult::OutOfBounds => "out_of_bounds",
            PlaceResult::Bad => "bad",
        }
    }
}

impl fmt::Display for PlaceResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The seven standard tetrominoes
///
/// Names follow the classic shape literals rather than guideline letters;
/// the guideline letter is accepted as an alias when parsing:
/// - **Stick** (`i`): four in a column
/// - **L1** (`l`), **L2** (`j`): the two L shapes
/// - **S1** (`z`), **S2** (`s`): the two skew shapes
/// - **Square** (`o`): 2x2 block
/// - **Pyramid** (`t`): three in a row with one on top of the middle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    Stick,
    L1,
    L2,
    S1,
    S2,
    Square,
    Pyramid,
}

impl PieceKind {
    /// All kinds in library order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::Stick,
        PieceKind::L1,
        PieceKind::L2,
        PieceKind::S1,
        PieceKind::S2,
        PieceKind::Square,
        PieceKind::Pyramid,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_grid_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("Stick"), Some(PieceKind::Stick));
    /// assert_eq!(PieceKind::from_str("o"), Some(PieceKind::Square));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "stick" | "i" => Some(PieceKind::Stick),
            "l1" | "l" => Some(PieceKind::L1),
            "l2" | "j" => Some(PieceKind::L2),
            "s1" | "z" => Some(PieceKind::S1),
            "s2" | "s" => Some(PieceKind::S2),
            "square" | "o" => Some(PieceKind::Square),
            "pyramid" | "t" => Some(PieceKind::Pyramid),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::Stick => "stick",
            PieceKind::L1 => "l1",
            PieceKind::L2 => "l2",
            PieceKind::S1 => "s1",
            PieceKind::S2 => "s2",
            PieceKind::Square => "square",
            PieceKind::Pyramid => "pyramid",
        }
    }

    /// Position of this kind in [`PieceKind::ALL`]
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four rotation states of a piece
///
/// The library rotates shapes a quarter turn counter-clockwise, so the
/// cycle reached by repeated fast rotation is North → West → South → East →
/// North. Shapes with rotational symmetry map several states onto the same
/// orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    West,
    South,
    East,
}

impl Rotation {
    /// All states in fast-rotation order
    pub const ALL: [Rotation; 4] = [
        Rotation::North,
        Rotation::West,
        Rotation::South,
        Rotation::East,
    ];

    /// Number of counter-clockwise quarter turns from North
    pub fn quarter_turns(&self) -> usize {
        match self {
            Rotation::North => 0,
            Rotation::West => 1,
            Rotation::South => 2,
            Rotation::East => 3,
        }
    }

    /// Rotation state after `turns` counter-clockwise quarter turns from North
    pub fn from_quarter_turns(turns: usize) -> Self {
        Self::ALL[turns % 4]
    }

    /// Rotate clockwise (90°)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_grid_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::East.rotate_cw(), Rotation::South);
    /// assert_eq!(Rotation::South.rotate_cw(), Rotation::West);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        Self::from_quarter_turns(self.quarter_turns() + 3)
    }

    /// Rotate counter-clockwise (the direction fast rotation follows)
    pub fn rotate_ccw(&self) -> Self {
        Self::from_quarter_turns(self.quarter_turns() + 1)
    }

    /// Parse rotation from string
    ///
    /// Accepts full names or single letters (case-insensitive):
    /// "north" | "n", "east" | "e", "south" | "s", "west" | "w"
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "north" | "n" => Some(Rotation::North),
            "east" | "e" => Some(Rotation::East),
            "south" | "s" => Some(Rotation::South),
            "west" | "w" => Some(Rotation::West),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Rotation::North => "north",
            Rotation::East => "east",
            Rotation::South => "south",
            Rotation::West => "west",
        }
    }
}
