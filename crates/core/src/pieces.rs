//! Pieces module - the standard shape library and precomputed rotation families
//!
//! Every standard shape is rotated once at library construction until the
//! rotation returns to the starting orientation. The distinct orientations
//! are stored in a fixed array per family, and "fast rotation" is just an
//! index step within that array, so no shape ever points at another.

use std::ops::Deref;

use arrayvec::ArrayVec;

use crate::shape::Shape;
use crate::types::{PieceKind, Point, Rotation};

/// Maximum number of distinct orientations a shape can have
pub const MAX_ORIENTATIONS: usize = 4;

/// Cell offsets of each standard piece in its spawn orientation
pub fn spawn_cells(kind: PieceKind) -> [(i32, i32); 4] {
    match kind {
        PieceKind::Stick => [(0, 0), (0, 1), (0, 2), (0, 3)],
        PieceKind::L1 => [(0, 0), (0, 1), (0, 2), (1, 0)],
        PieceKind::L2 => [(0, 0), (1, 0), (1, 1), (1, 2)],
        PieceKind::S1 => [(0, 0), (1, 0), (1, 1), (2, 1)],
        PieceKind::S2 => [(0, 1), (1, 1), (1, 0), (2, 0)],
        PieceKind::Square => [(0, 0), (0, 1), (1, 0), (1, 1)],
        PieceKind::Pyramid => [(0, 0), (1, 0), (1, 1), (2, 0)],
    }
}

/// Spawn shape for a standard piece kind
pub fn spawn_shape(kind: PieceKind) -> Shape {
    Shape::build(
        spawn_cells(kind)
            .iter()
            .map(|&(x, y)| Point::new(x, y))
            .collect(),
    )
}

/// The distinct orientations of one shape, in fast-rotation order
#[derive(Debug, Clone)]
pub struct ShapeFamily {
    kind: PieceKind,
    orientations: ArrayVec<Shape, MAX_ORIENTATIONS>,
}

impl ShapeFamily {
    /// Rotate `base` until it comes back to itself
    pub fn new(kind: PieceKind, base: Shape) -> Self {
        let mut orientations = ArrayVec::new();
        let mut current = base;
        loop {
            let next = current.rotated_once();
            orientations.push(current);
            if orientations.is_full() || next == orientations[0] {
                break;
            }
            current = next;
        }
        Self { kind, orientations }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Rotational period: 1 for the square, 2 for the stick and skews, 4 otherwise
    pub fn period(&self) -> usize {
        self.orientations.len()
    }

    /// Distinct orientations, starting with the spawn orientation
    pub fn orientations(&self) -> &[Shape] {
        &self.orientations
    }

    /// Orientation after `index` quarter turns (wraps at the period)
    pub fn orientation(&self, index: usize) -> &Shape {
        &self.orientations[index % self.period()]
    }

    /// Orientation for a rotation state
    pub fn get(&self, rotation: Rotation) -> &Shape {
        self.orientation(rotation.quarter_turns())
    }
}

/// A handle to one orientation of a library shape
///
/// Dereferences to the underlying [`Shape`].
#[derive(Debug, Clone, Copy)]
pub struct Piece<'a> {
    family: &'a ShapeFamily,
    index: usize,
}

impl<'a> Piece<'a> {
    pub fn kind(&self) -> PieceKind {
        self.family.kind
    }

    pub fn shape(&self) -> &'a Shape {
        &self.family.orientations[self.index]
    }

    /// Position within the family, `0..period`
    pub fn orientation_index(&self) -> usize {
        self.index
    }

    pub fn family(&self) -> &'a ShapeFamily {
        self.family
    }

    /// The next orientation, read from the precomputed family
    pub fn fast_rotation(&self) -> Piece<'a> {
        Piece {
            family: self.family,
            index: (self.index + 1) % self.family.period(),
        }
    }

    /// All distinct orientations starting at this one
    pub fn rotations(&self) -> impl Iterator<Item = Piece<'a>> + 'a {
        let family = self.family;
        let start = self.index;
        (0..family.period()).map(move |step| Piece {
            family,
            index: (start + step) % family.period(),
        })
    }
}

impl Deref for Piece<'_> {
    type Target = Shape;

    fn deref(&self) -> &Shape {
        self.shape()
    }
}

/// The seven standard shapes with their rotation families
#[derive(Debug, Clone)]
pub struct ShapeLibrary {
    /// Indexed by `PieceKind::index()`
    families: Vec<ShapeFamily>,
}

impl ShapeLibrary {
    /// Build the standard library
    pub fn standard() -> Self {
        let families = PieceKind::ALL
            .iter()
            .map(|&kind| ShapeFamily::new(kind, spawn_shape(kind)))
            .collect();
        Self { families }
    }

    pub fn family(&self, kind: PieceKind) -> &ShapeFamily {
        &self.families[kind.index()]
    }

    pub fn families(&self) -> &[ShapeFamily] {
        &self.families
    }

    /// Spawn orientation of a kind
    pub fn piece(&self, kind: PieceKind) -> Piece<'_> {
        Piece {
            family: self.family(kind),
            index: 0,
        }
    }

    /// A kind in the given rotation state
    pub fn piece_at(&self, kind: PieceKind, rotation: Rotation) -> Piece<'_> {
        let family = self.family(kind);
        Piece {
            family,
            index: rotation.quarter_turns() % family.period(),
        }
    }

    /// Spawn orientations of every kind, in library order
    pub fn pieces(&self) -> impl Iterator<Item = Piece<'_>> {
        self.families.iter().map(|family| Piece { family, index: 0 })
    }

    /// Number of shape kinds
    pub fn len(&self) -> usize {
        self.families.len()
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }
}

impl Default for ShapeLibrary {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_periods() {
        let library = ShapeLibrary::standard();
        let periods: Vec<usize> = library.families().iter().map(|f| f.period()).collect();
        // stick, l1, l2, s1, s2, square, pyramid
        assert_eq!(periods, vec![2, 4, 4, 2, 2, 1, 4]);
    }

    #[test]
    fn piece_at_wraps_symmetric_shapes() {
        let library = ShapeLibrary::standard();
        let square = library.piece(PieceKind::Square);
        for rotation in Rotation::ALL {
            assert_eq!(
                library.piece_at(PieceKind::Square, rotation).shape(),
                square.shape()
            );
        }
        assert_eq!(
            library.piece_at(PieceKind::Stick, Rotation::South).shape(),
            library.piece(PieceKind::Stick).shape()
        );
    }

    #[test]
    fn rotations_visit_each_orientation_once() {
        let library = ShapeLibrary::standard();
        let pyramid = library.piece(PieceKind::Pyramid).fast_rotation();
        let indices: Vec<usize> = pyramid.rotations().map(|p| p.orientation_index()).collect();
        assert_eq!(indices, vec![1, 2, 3, 0]);
    }

    #[test]
    fn family_orientation_matches_fast_rotation() {
        let library = ShapeLibrary::standard();
        for family in library.families() {
            let mut piece = library.piece(family.kind());
            for turns in 0..8 {
                assert_eq!(piece.shape(), family.orientation(turns));
                piece = piece.fast_rotation();
            }
        }
    }
}
