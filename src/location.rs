use std::fmt;

/// A cell on a Grid, addressed by its integer coordinates.
///
/// Equality and hashing use the `(x, y)` pair itself, so two distinct cells never share a key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Location {
    /// Column of the cell
    pub x: i32,
    /// Row of the cell
    pub y: i32,
}

impl Location {
    /// Creates a new Location
    pub const fn new(x: i32, y: i32) -> Location {
        Location { x, y }
    }

    /// The straight-line (Euclidean) distance between `self` and `other`.
    ///
    /// This is the heuristic of the search as well as the geometric length of a single step.
    pub fn distance(self, other: Location) -> f64 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);
        dx.hypot(dy)
    }

    /// All cells surrounding `self`, straight and diagonal. `self` is not included.
    ///
    /// That is 8 cells, except at the edges of the `i32` range, where cells whose coordinates
    /// would overflow are left out.
    pub fn neighbors(self) -> impl Iterator<Item = Location> {
        (-1..=1)
            .flat_map(|dy| (-1..=1).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .filter_map(move |(dx, dy)| {
                Some(Location::new(
                    self.x.checked_add(dx)?,
                    self.y.checked_add(dy)?,
                ))
            })
    }
}

impl From<(i32, i32)> for Location {
    fn from((x, y): (i32, i32)) -> Location {
        Location::new(x, y)
    }
}

impl From<Location> for (i32, i32) {
    fn from(loc: Location) -> (i32, i32) {
        (loc.x, loc.y)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
