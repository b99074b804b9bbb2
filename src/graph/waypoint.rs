use std::sync::Arc;

use crate::{Location, Path};

/// A node of the search tree: a Location, the Waypoint it was reached from and its costs.
///
/// Waypoints are immutable once created. Following [`predecessor`](Waypoint::predecessor)
/// from the Waypoint returned by a search leads back to the start, which has no predecessor.
/// Predecessors are shared, so many Paths of a search tree can chain through the same Waypoint.
#[derive(Debug)]
pub struct Waypoint {
    location: Location,
    predecessor: Option<Arc<Waypoint>>,
    cost_so_far: f64,
    cost_to_go: f64,
}

impl Waypoint {
    /// Creates a new Waypoint
    ///
    /// `cost_so_far` is the actual cost of reaching `location` through `predecessor`,
    /// `cost_to_go` is the estimated remaining cost to the finish.
    pub fn new(
        location: Location,
        predecessor: Option<Arc<Waypoint>>,
        cost_so_far: f64,
        cost_to_go: f64,
    ) -> Waypoint {
        debug_assert!(cost_so_far >= 0.0, "negative cost_so_far {}", cost_so_far);
        Waypoint {
            location,
            predecessor,
            cost_so_far,
            cost_to_go,
        }
    }

    /// The Location of this Waypoint
    pub fn location(&self) -> Location {
        self.location
    }

    /// The Waypoint before this one, or `None` if this is the start of the Path
    pub fn predecessor(&self) -> Option<&Arc<Waypoint>> {
        self.predecessor.as_ref()
    }

    /// The actual cost of getting here from the start
    pub fn cost_so_far(&self) -> f64 {
        self.cost_so_far
    }

    /// The estimated cost of getting from here to the finish
    pub fn cost_to_go(&self) -> f64 {
        self.cost_to_go
    }

    /// `cost_so_far + cost_to_go`, the priority of this Waypoint in the search
    pub fn total_cost(&self) -> f64 {
        self.cost_so_far + self.cost_to_go
    }

    /// Iterates from `self` back to the start of the Path, `self` included
    pub fn ancestors(&self) -> Ancestors<'_> {
        Ancestors {
            current: Some(self),
        }
    }

    /// The Path from the start to this Waypoint
    pub fn path(&self) -> Path {
        Path::from_waypoint(self)
    }
}

// Long chains would otherwise be dropped recursively, one stack frame per Waypoint.
impl Drop for Waypoint {
    fn drop(&mut self) {
        let mut next = self.predecessor.take();
        while let Some(waypoint) = next {
            next = match Arc::try_unwrap(waypoint) {
                Ok(mut inner) => inner.predecessor.take(),
                Err(_) => None,
            };
        }
    }
}

/// Iterator over a Waypoint and its predecessors, see [`Waypoint::ancestors`]
#[derive(Debug, Clone)]
pub struct Ancestors<'a> {
    current: Option<&'a Waypoint>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a Waypoint;
    fn next(&mut self) -> Option<&'a Waypoint> {
        let current = self.current?;
        self.current = current.predecessor.as_deref();
        Some(current)
    }
}
