//! Shared 2-D vocabulary for the grid-based solutions.
//!
//! Coordinates follow the puzzle convention: `x` is the column growing
//! rightward, `y` is the row growing downward, so "up" decreases `y`.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::num::TryFromIntError;
use std::ops::{Index, IndexMut};

use nalgebra::{DMatrix, Point2, Scalar, Vector2};

/// Integer type for grid coordinates.
///
/// Observed grid dimensions reach 140 across the inputs, so this is sized to
/// hold such with room for out-of-bounds arithmetic.
pub type Coordinate = i16;

/// A point on a grid.
pub type GridPoint = Point2<Coordinate>;

/// An unordered collection of points with fast membership tests.
pub type PointSet = HashSet<GridPoint>;

/// Accessors for the eight neighboring points.
pub trait PointNeighbors {
    #[must_use]
    fn up(self) -> Self;
    #[must_use]
    fn down(self) -> Self;
    #[must_use]
    fn left(self) -> Self;
    #[must_use]
    fn right(self) -> Self;
    #[must_use]
    fn up_left(self) -> Self;
    #[must_use]
    fn up_right(self) -> Self;
    #[must_use]
    fn down_left(self) -> Self;
    #[must_use]
    fn down_right(self) -> Self;
}

impl PointNeighbors for GridPoint {
    fn up(self) -> Self {
        Self::new(self.x, self.y - 1)
    }

    fn down(self) -> Self {
        Self::new(self.x, self.y + 1)
    }

    fn left(self) -> Self {
        Self::new(self.x - 1, self.y)
    }

    fn right(self) -> Self {
        Self::new(self.x + 1, self.y)
    }

    fn up_left(self) -> Self {
        Self::new(self.x - 1, self.y - 1)
    }

    fn up_right(self) -> Self {
        Self::new(self.x + 1, self.y - 1)
    }

    fn down_left(self) -> Self {
        Self::new(self.x - 1, self.y + 1)
    }

    fn down_right(self) -> Self {
        Self::new(self.x + 1, self.y + 1)
    }
}

/// Compare two points lexicographically by `(y, x)`, the order a row-major
/// scan discovers them in.
#[must_use]
pub fn row_major_cmp(a: GridPoint, b: GridPoint) -> Ordering {
    (a.y, a.x).cmp(&(b.y, b.x))
}

/// A cardinal direction on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardinalDirection {
    North,
    East,
    South,
    West,
}

/// The cardinal directions in clockwise order from north.
pub const CARDINAL_DIRECTIONS: [CardinalDirection; 4] = [
    CardinalDirection::North,
    CardinalDirection::East,
    CardinalDirection::South,
    CardinalDirection::West,
];

impl CardinalDirection {
    /// Create a [`Vector2`] offset of one step in the direction.
    #[must_use]
    pub fn into_vector(self) -> Vector2<Coordinate> {
        match self {
            Self::North => Vector2::new(0, -1),
            Self::East => Vector2::new(1, 0),
            Self::South => Vector2::new(0, 1),
            Self::West => Vector2::new(-1, 0),
        }
    }

    /// The direction after a 90 degree clockwise rotation.
    #[must_use]
    pub fn turn_clockwise(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    /// A single-bit mask identifying the direction, for per-cell direction
    /// sets packed in a `u8`.
    #[must_use]
    pub fn mask_bit(self) -> u8 {
        match self {
            Self::North => 1,
            Self::East => 1 << 1,
            Self::South => 1 << 2,
            Self::West => 1 << 3,
        }
    }
}

/// One-step offsets for the eight directions, cardinals and diagonals.
#[must_use]
pub fn eight_direction_vectors() -> [Vector2<Coordinate>; 8] {
    [
        Vector2::new(0, -1),
        Vector2::new(1, -1),
        Vector2::new(1, 0),
        Vector2::new(1, 1),
        Vector2::new(0, 1),
        Vector2::new(-1, 1),
        Vector2::new(-1, 0),
        Vector2::new(-1, -1),
    ]
}

/// Iterate every unordered pair of distinct items, each pair yielded once.
pub fn unique_pairs<T>(items: &[T]) -> impl Iterator<Item = (&T, &T)> {
    items.iter().enumerate().flat_map(move |(index, first)| {
        items[index + 1..].iter().map(move |second| (first, second))
    })
}

/// An error constructing a [`Grid`] from parsed rows.
#[derive(thiserror::Error, Debug)]
pub enum GridError {
    #[error("grid requires at least one row and one column")]
    Empty,

    #[error("expected grid width to be {expected} across rows, but found row width {found}")]
    UnequalRowWidths { expected: usize, found: usize },

    #[error("grid dimensions do not fit the coordinate type")]
    DimensionOverflow(#[from] TryFromIntError),
}

/// A rectangular two-dimensional array addressed by [`GridPoint`].
///
/// [`Grid::get`] returns `None` outside the bounds
/// `0 <= x < width, 0 <= y < height`; indexing out of bounds is a programmer
/// error and panics.
#[derive(Debug, Clone)]
pub struct Grid<T: Scalar> {
    cells: DMatrix<T>,
    width: Coordinate,
    height: Coordinate,
}

impl<T: Scalar> Grid<T> {
    /// Build a grid from rows of cells, top row first.
    ///
    /// # Errors
    ///
    /// Rejects an empty grid, rows of unequal width, and dimensions too
    /// large for [`Coordinate`].
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, GridError> {
        let row_count = rows.len();
        let column_count = rows.first().map_or(0, Vec::len);
        if row_count == 0 || column_count == 0 {
            return Err(GridError::Empty);
        }
        for row in &rows {
            if row.len() != column_count {
                return Err(GridError::UnequalRowWidths {
                    expected: column_count,
                    found: row.len(),
                });
            }
        }

        let width = Coordinate::try_from(column_count)?;
        let height = Coordinate::try_from(row_count)?;
        let cells = DMatrix::from_row_iterator(row_count, column_count, rows.into_iter().flatten());

        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// Build a grid of one repeated value, matching another grid's
    /// dimensions.
    #[must_use]
    pub fn filled_like<U: Scalar>(other: &Grid<U>, value: T) -> Self {
        Self {
            cells: DMatrix::from_element(
                other.cells.nrows(),
                other.cells.ncols(),
                value,
            ),
            width: other.width,
            height: other.height,
        }
    }

    #[must_use]
    pub fn width(&self) -> Coordinate {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> Coordinate {
        self.height
    }

    /// Whether the point lies within bounds.
    #[must_use]
    pub fn contains(&self, point: GridPoint) -> bool {
        (0..self.width()).contains(&point.x) && (0..self.height()).contains(&point.y)
    }

    /// The cell at the point, or `None` out of bounds.
    #[must_use]
    pub fn get(&self, point: GridPoint) -> Option<&T> {
        self.contains(point)
            .then(|| &self.cells[(point.y as usize, point.x as usize)])
    }

    /// Every point of the grid in row-major order.
    pub fn iter_points(&self) -> impl Iterator<Item = GridPoint> {
        let width = self.width();
        let height = self.height();
        (0..height).flat_map(move |y| (0..width).map(move |x| GridPoint::new(x, y)))
    }
}

impl<T: Scalar> Index<GridPoint> for Grid<T> {
    type Output = T;

    fn index(&self, point: GridPoint) -> &T {
        self.get(point)
            .unwrap_or_else(|| panic!("point out of grid bounds: {point}"))
    }
}

impl<T: Scalar> IndexMut<GridPoint> for Grid<T> {
    fn index_mut(&mut self, point: GridPoint) -> &mut T {
        assert!(self.contains(point), "point out of grid bounds: {point}");
        &mut self.cells[(point.y as usize, point.x as usize)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbor_accessors_round_trip() {
        let point = GridPoint::new(3, 7);
        assert_eq!(point.up().down(), point);
        assert_eq!(point.left().right(), point);
        assert_eq!(point.up_left().down_right(), point);
        assert_eq!(point.up_right().down_left(), point);
    }

    #[test]
    fn row_major_cmp_orders_by_row_then_column() {
        let mut points = vec![
            GridPoint::new(1, 1),
            GridPoint::new(0, 2),
            GridPoint::new(2, 0),
        ];
        points.sort_by(|a, b| row_major_cmp(*a, *b));
        assert_eq!(
            points,
            vec![
                GridPoint::new(2, 0),
                GridPoint::new(1, 1),
                GridPoint::new(0, 2),
            ]
        );
    }

    #[test]
    fn clockwise_turns_cycle_through_all_directions() {
        let mut direction = CardinalDirection::North;
        for expected in [
            CardinalDirection::East,
            CardinalDirection::South,
            CardinalDirection::West,
            CardinalDirection::North,
        ] {
            direction = direction.turn_clockwise();
            assert_eq!(direction, expected);
        }
    }

    #[test]
    fn direction_mask_bits_are_distinct() {
        let combined = CARDINAL_DIRECTIONS
            .iter()
            .fold(0u8, |acc, direction| acc | direction.mask_bit());
        assert_eq!(combined, 0b1111);
    }

    #[test]
    fn unique_pairs_yields_each_pair_once() {
        let items = [1, 2, 3, 4];
        let pairs: Vec<_> = unique_pairs(&items).map(|(a, b)| (*a, *b)).collect();
        assert_eq!(pairs, vec![(1, 2), (1, 3), (1, 4), (2, 3), (2, 4), (3, 4)]);
    }

    #[test]
    fn grid_rejects_unequal_row_widths() {
        let result = Grid::from_rows(vec![vec![1, 2], vec![3]]);
        assert!(matches!(
            result,
            Err(GridError::UnequalRowWidths {
                expected: 2,
                found: 1
            })
        ));
    }

    #[test]
    fn grid_bounds_gate_access() {
        let grid = Grid::from_rows(vec![vec![1, 2], vec![3, 4]]).expect("grid should build");
        assert_eq!(grid.width(), 2);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.get(GridPoint::new(1, 1)), Some(&4));
        assert_eq!(grid.get(GridPoint::new(2, 0)), None);
        assert_eq!(grid.get(GridPoint::new(0, -1)), None);
    }

    #[test]
    fn iter_points_is_row_major() {
        let grid = Grid::from_rows(vec![vec![0; 3], vec![0; 3]]).expect("grid should build");
        let points: Vec<_> = grid.iter_points().collect();
        assert_eq!(points.len(), 6);
        assert!(points.windows(2).all(|pair| {
            row_major_cmp(pair[0], pair[1]) == Ordering::Less
        }));
    }
}
