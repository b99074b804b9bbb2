use std::ops::Index;

use crate::{Location, Waypoint};

/// A Path from the start of a search to one of its Waypoints
///
/// ## Examples
/// ```
/// use astar_pathfinding::prelude::*;
///
/// let grid = CostGrid::new(3, 1).unwrap();
/// let path = compute_path(&grid).unwrap().unwrap().path();
///
/// assert_eq!(path.len(), 3);
/// assert_eq!(path.cost(), 2.0);
/// assert_eq!(path.start(), Location::new(0, 0));
/// assert_eq!(path.end(), Location::new(2, 0));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    path: Vec<Location>,
    cost: f64,
}

impl Path {
    /// Walks the predecessors of `waypoint` back to the start and returns them in start to
    /// `waypoint` order
    pub fn from_waypoint(waypoint: &Waypoint) -> Path {
        let mut path: Vec<Location> = waypoint.ancestors().map(Waypoint::location).collect();
        path.reverse();
        Path {
            path,
            cost: waypoint.cost_so_far(),
        }
    }

    /// The total cost of the Path, including the costs of all entered cells
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// The number of Locations on the Path, both ends included
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// `true` if the Path has no Locations, which never happens for a Path built from a Waypoint
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// The first Location
    pub fn start(&self) -> Location {
        self.path[0]
    }

    /// The last Location
    pub fn end(&self) -> Location {
        self.path[self.path.len() - 1]
    }

    /// Iterates over the Locations from start to end
    pub fn iter(&self) -> std::slice::Iter<'_, Location> {
        self.path.iter()
    }

    /// The Locations as a slice
    pub fn as_slice(&self) -> &[Location] {
        &self.path
    }

    /// The length of the Path as drawn on the Grid, without any cell costs
    pub fn geometric_length(&self) -> f64 {
        self.path.windows(2).map(|w| w[0].distance(w[1])).sum()
    }
}

impl Index<usize> for Path {
    type Output = Location;
    #[track_caller]
    fn index(&self, index: usize) -> &Location {
        &self.path[index]
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Location;
    type IntoIter = std::slice::Iter<'a, Location>;
    fn into_iter(self) -> Self::IntoIter {
        self.path.iter()
    }
}

impl From<Path> for Vec<Location> {
    fn from(path: Path) -> Vec<Location> {
        path.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn from_waypoint() {
        let start = Arc::new(Waypoint::new(Location::new(0, 0), None, 0.0, 3.0));
        let middle = Arc::new(Waypoint::new(Location::new(1, 1), Some(start), 2.5, 1.0));
        let end = Waypoint::new(Location::new(1, 2), Some(middle), 4.0, 0.0);

        let path = Path::from_waypoint(&end);
        assert_eq!(
            path.as_slice(),
            &[Location::new(0, 0), Location::new(1, 1), Location::new(1, 2)]
        );
        assert_eq!(path.cost(), 4.0);
        assert_eq!(path[1], Location::new(1, 1));
        assert!((path.geometric_length() - (2f64.sqrt() + 1.0)).abs() < 1e-12);
    }

    #[test]
    fn single() {
        let start = Waypoint::new(Location::new(4, 2), None, 0.0, 0.0);
        let path = start.path();
        assert_eq!(path.len(), 1);
        assert_eq!(path.start(), path.end());
        assert_eq!(path.geometric_length(), 0.0);
    }
}
