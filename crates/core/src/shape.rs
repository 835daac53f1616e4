//! Shape module - immutable piece geometry
//!
//! A shape is a set of unit-cell offsets normalized so that the lowest x and
//! the lowest y are both 0. Width, height and the skirt are derived once at
//! construction. Shapes are cheap to share and never change after creation;
//! rotation produces a new shape.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::ShapeError;
use crate::types::Point;

/// Largest bounding-box side a shape may have
pub const MAX_SHAPE_SPAN: usize = 256;

/// Normalized piece geometry
///
/// `body()` keeps the order the cells were given in; placement walks the
/// cells in that order. Equality and hashing only look at the cell set.
#[derive(Debug, Clone)]
pub struct Shape {
    /// Normalized offsets, first-occurrence order, no duplicates
    body: Vec<Point>,
    /// Same offsets sorted, used for set equality
    canonical: Vec<Point>,
    width: usize,
    height: usize,
    /// Lowest y offset in each column of the bounding box
    skirt: Vec<usize>,
}

impl Shape {
    /// Build a shape from arbitrary offsets, normalizing the bounding box to (0, 0)
    ///
    /// Duplicate points collapse into one cell. Shapes whose bounding box is
    /// wider or taller than [`MAX_SHAPE_SPAN`] are rejected.
    pub fn new<I, P>(points: I) -> Result<Self, ShapeError>
    where
        I: IntoIterator<Item = P>,
        P: Into<Point>,
    {
        let mut body: Vec<Point> = Vec::new();
        for point in points {
            let point = point.into();
            if !body.contains(&point) {
                body.push(point);
            }
        }
        if body.is_empty() {
            return Err(ShapeError::Empty);
        }

        let width = span(body.iter().map(|p| p.x));
        let height = span(body.iter().map(|p| p.y));
        if width > MAX_SHAPE_SPAN as u64 || height > MAX_SHAPE_SPAN as u64 {
            return Err(ShapeError::TooLarge {
                width,
                height,
                max: MAX_SHAPE_SPAN,
            });
        }
        Ok(Self::build(body))
    }

    /// Parse a whitespace-delimited literal of `x y` pairs
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_grid_core::Shape;
    ///
    /// let pyramid = Shape::parse("0 0  1 0  1 1  2 0").unwrap();
    /// assert_eq!(pyramid.width(), 3);
    /// assert_eq!(pyramid.height(), 2);
    /// assert_eq!(pyramid.skirt(), &[0, 0, 0]);
    /// ```
    pub fn parse(literal: &str) -> Result<Self, ShapeError> {
        let values = literal
            .split_whitespace()
            .enumerate()
            .map(|(position, token)| {
                token
                    .parse::<i32>()
                    .map_err(|_| ShapeError::InvalidCoordinate {
                        token: token.to_string(),
                        position,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if values.len() % 2 != 0 {
            return Err(ShapeError::OddCoordinateCount(values.len()));
        }

        Self::new(values.chunks_exact(2).map(|pair| Point::new(pair[0], pair[1])))
    }

    /// Build from a non-empty, deduplicated point list whose span fits in `i32`.
    pub(crate) fn build(points: Vec<Point>) -> Self {
        let min_x = points.iter().map(|p| p.x).min().unwrap_or(0);
        let min_y = points.iter().map(|p| p.y).min().unwrap_or(0);
        let body: Vec<Point> = points
            .into_iter()
            .map(|p| Point::new(p.x - min_x, p.y - min_y))
            .collect();

        let width = body.iter().map(|p| p.x as usize + 1).max().unwrap_or(0);
        let height = body.iter().map(|p| p.y as usize + 1).max().unwrap_or(0);

        let mut skirt = vec![usize::MAX; width];
        for p in &body {
            let column = &mut skirt[p.x as usize];
            *column = (*column).min(p.y as usize);
        }

        let mut canonical = body.clone();
        canonical.sort_unstable();

        Self {
            body,
            canonical,
            width,
            height,
            skirt,
        }
    }

    /// Width of the bounding box
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the bounding box
    pub fn height(&self) -> usize {
        self.height
    }

    /// Lowest occupied offset per column; `skirt().len() == width()`
    pub fn skirt(&self) -> &[usize] {
        &self.skirt
    }

    /// Normalized cell offsets in placement order
    pub fn body(&self) -> &[Point] {
        &self.body
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false: empty shapes are rejected at construction
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Compute the quarter-turn counter-clockwise rotation of this shape
    ///
    /// Each offset maps `(x, y) → (height - 1 - y, x)`, which already lands in
    /// a box anchored at (0, 0). The receiver is left untouched.
    pub fn rotated_once(&self) -> Shape {
        let top = self.height as i32 - 1;
        let body = self
            .body
            .iter()
            .map(|p| Point::new(top - p.y, p.x))
            .collect();
        Self::build(body)
    }
}

/// Number of cells from the lowest to the highest value, inclusive
fn span(values: impl Iterator<Item = i32> + Clone) -> u64 {
    let min = values.clone().min().unwrap_or(0);
    let max = values.max().unwrap_or(0);
    (i64::from(max) - i64::from(min) + 1) as u64
}

impl PartialEq for Shape {
    fn eq(&self, other: &Self) -> bool {
        self.canonical == other.canonical
    }
}

impl Eq for Shape {}

impl Hash for Shape {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical.hash(state);
    }
}

impl FromStr for Shape {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Renders the literal form, e.g. `0 0 1 0 1 1 2 0`
impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, p) in self.body.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{p}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_normalizes_bounding_box() {
        let shape = Shape::parse("2 3  3 3  3 4  4 3").unwrap();
        assert_eq!(
            shape.body(),
            &[
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(1, 1),
                Point::new(2, 0)
            ]
        );
        assert_eq!(shape.width(), 3);
        assert_eq!(shape.height(), 2);
    }

    #[test]
    fn parse_handles_negative_offsets() {
        let shape = Shape::parse("-1 -1 0 -1").unwrap();
        assert_eq!(shape.body(), &[Point::new(0, 0), Point::new(1, 0)]);
    }

    #[test]
    fn parse_rejects_bad_literals() {
        assert_eq!(Shape::parse(""), Err(ShapeError::Empty));
        assert_eq!(Shape::parse("   "), Err(ShapeError::Empty));
        assert_eq!(
            Shape::parse("0 0 1"),
            Err(ShapeError::OddCoordinateCount(3))
        );
        assert_eq!(
            Shape::parse("0 0 x 1"),
            Err(ShapeError::InvalidCoordinate {
                token: "x".to_string(),
                position: 2
            })
        );
        assert_eq!(
            Shape::parse("2147483647 0 -2147483648 0"),
            Err(ShapeError::TooLarge {
                width: 1 << 32,
                height: 1,
                max: MAX_SHAPE_SPAN
            })
        );
        assert!(matches!(
            Shape::parse("0 0 2000000000 0"),
            Err(ShapeError::TooLarge { .. })
        ));
    }

    #[test]
    fn span_limit_is_inclusive() {
        let last = MAX_SHAPE_SPAN as i32 - 1;
        let widest = Shape::new([(0, 0), (last, 0)]).unwrap();
        assert_eq!(widest.width(), MAX_SHAPE_SPAN);
        assert!(Shape::new([(0, 0), (0, last + 1)]).is_err());
    }

    #[test]
    fn duplicate_points_collapse() {
        let shape = Shape::parse("0 0 0 0 1 0").unwrap();
        assert_eq!(shape.len(), 2);
        assert_eq!(shape, Shape::parse("1 0 0 0").unwrap());
    }

    #[test]
    fn equality_ignores_order() {
        let a = Shape::parse("0 3  0 1  0 0  0 2").unwrap();
        let b = Shape::parse("0 0  0 1  0 2  0 3").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, Shape::parse("0 0  1 0  1 1  2 0").unwrap());
    }

    #[test]
    fn rotation_sizes_of_u_shape() {
        let u1 = Shape::parse("0 3  0 2  0 1  0 0  1 0  2 0  2 1  2 2  2 3").unwrap();
        let u2 = u1.rotated_once();
        let u3 = u2.rotated_once();
        let u4 = u3.rotated_once();

        assert_eq!((u1.width(), u1.height()), (3, 4));
        assert_eq!((u2.width(), u2.height()), (4, 3));
        assert_eq!((u3.width(), u3.height()), (3, 4));
        assert_eq!((u4.width(), u4.height()), (4, 3));

        assert_eq!(u1.skirt(), &[0, 0, 0]);
        assert_eq!(u2.skirt(), &[0, 0, 0, 0]);
        assert_eq!(u3.skirt(), &[0, 3, 0]);
        assert_eq!(u4.skirt(), &[0, 0, 0, 0]);
        assert_eq!(u4.rotated_once(), u1);
    }

    #[test]
    fn skirts_of_irregular_shapes() {
        let zig_zag = Shape::parse("0 0  1 0  1 1  2 1  2 2  3 2  3 3  4 3  4 4").unwrap();
        assert_eq!((zig_zag.width(), zig_zag.height()), (5, 5));
        assert_eq!(zig_zag.skirt(), &[0, 0, 1, 2, 3]);
        assert_eq!(zig_zag.rotated_once().skirt(), &[4, 3, 2, 1, 0]);

        let snake = Shape::parse("0 0  0 1  0 2  1 2  2 2  2 1  2 0  3 0  4 0  4 1  4 2").unwrap();
        assert_eq!((snake.width(), snake.height()), (5, 3));
        assert_eq!(snake.skirt(), &[0, 2, 0, 0, 0]);
        assert_eq!(snake.rotated_once().skirt(), &[0, 0, 0]);
    }

    #[test]
    fn rotated_once_does_not_mutate() {
        let stick = Shape::parse("0 0 0 1 0 2 0 3").unwrap();
        let flat = stick.rotated_once();
        assert_eq!((stick.width(), stick.height()), (1, 4));
        assert_eq!((flat.width(), flat.height()), (4, 1));
        assert_eq!(flat, Shape::parse("0 0 1 0 2 0 3 0").unwrap());
    }

    #[test]
    fn display_round_trips_through_parse() {
        let shape = Shape::parse("0 0  1 0  1 1  2 0").unwrap();
        assert_eq!(shape.to_string(), "0 0 1 0 1 1 2 0");
        assert_eq!(shape.to_string().parse::<Shape>().unwrap(), shape);
    }
}
