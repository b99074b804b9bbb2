use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::sync::Arc;

use hashbrown::hash_map::Entry;

use super::Waypoint;
use crate::{Grid, Location, LocationMap, PathError};

/// The state of a running search on a Grid: the open set of candidate Waypoints and the closed
/// set of finalized ones.
///
/// Each Location is in at most one of the two sets, and holds the cheapest Waypoint found for it.
///
/// The cheapest open Waypoint is found through a binary heap. Replaced or closed Waypoints are
/// not removed from the heap but skipped once they reach the top.
///
/// Ties in [`total_cost`](Waypoint::total_cost) go to the Waypoint that was inserted first.
#[derive(Debug)]
pub struct SearchFrontier<'a, G: ?Sized> {
    grid: &'a G,
    open: LocationMap<Arc<Waypoint>>,
    closed: LocationMap<Arc<Waypoint>>,
    queue: BinaryHeap<QueueEntry>,
    inserted: u64,
}

impl<'a, G: Grid + ?Sized> SearchFrontier<'a, G> {
    /// Creates an empty frontier for a search on `grid`.
    ///
    /// ## Errors
    /// [`PathError::InvalidArgument`] if the start or finish of `grid` lie outside of it.
    pub fn new(grid: &'a G) -> Result<SearchFrontier<'a, G>, PathError> {
        for (name, location) in [("start", grid.start()), ("finish", grid.finish())] {
            if !grid.contains(location) {
                return Err(PathError::invalid(format!(
                    "{} location {} is outside of the grid",
                    name, location
                )));
            }
        }
        Ok(SearchFrontier {
            grid,
            open: LocationMap::default(),
            closed: LocationMap::default(),
            queue: BinaryHeap::new(),
            inserted: 0,
        })
    }
}

impl<'a, G: ?Sized> SearchFrontier<'a, G> {
    /// The Grid this search runs on
    pub fn grid(&self) -> &'a G {
        self.grid
    }

    /// Returns the open Waypoint with the lowest [`total_cost`](Waypoint::total_cost) without
    /// removing it, or `None` if the open set is empty.
    pub fn select_best(&mut self) -> Option<Arc<Waypoint>> {
        loop {
            let entry = self.queue.peek()?;
            let is_current = self
                .open
                .get(&entry.waypoint.location())
                .map_or(false, |current| Arc::ptr_eq(current, &entry.waypoint));
            if is_current {
                return Some(entry.waypoint.clone());
            }
            // replaced by a cheaper Waypoint or already closed
            self.queue.pop();
        }
    }

    /// Offers `candidate` to the open set.
    ///
    /// The candidate is stored if its Location is not open yet, or if it reaches that Location
    /// with a strictly lower [`cost_so_far`](Waypoint::cost_so_far) than the stored Waypoint.
    /// Locations in the closed set never accept a candidate.
    ///
    /// Returns `true` if the candidate was stored.
    pub fn try_insert(&mut self, candidate: Waypoint) -> bool {
        let location = candidate.location();
        if self.closed.contains_key(&location) {
            return false;
        }

        let waypoint = match self.open.entry(location) {
            Entry::Vacant(entry) => entry.insert(Arc::new(candidate)).clone(),
            Entry::Occupied(mut entry) => {
                if candidate.cost_so_far() >= entry.get().cost_so_far() {
                    return false;
                }
                let waypoint = Arc::new(candidate);
                entry.insert(waypoint.clone());
                waypoint
            }
        };

        self.queue.push(QueueEntry {
            total_cost: waypoint.total_cost(),
            order: self.inserted,
            waypoint,
        });
        self.inserted += 1;
        true
    }

    /// The number of open Waypoints
    pub fn size(&self) -> usize {
        self.open.len()
    }

    /// `true` if no Waypoints are open
    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    /// Moves the Waypoint at `location` from the open set to the closed set.
    ///
    /// ## Panics
    /// if `location` is not in the open set.
    #[track_caller]
    pub fn close(&mut self, location: Location) {
        let waypoint = match self.open.remove(&location) {
            Some(waypoint) => waypoint,
            None => panic!("tried to close {}, which is not open", location),
        };
        self.closed.insert(location, waypoint);
    }

    /// `true` if `location` has been closed
    pub fn is_closed(&self, location: Location) -> bool {
        self.closed.contains_key(&location)
    }

    /// The number of closed Waypoints
    pub fn closed_len(&self) -> usize {
        self.closed.len()
    }

    /// The open Waypoint at `location`, if any
    pub fn open_waypoint(&self, location: Location) -> Option<&Arc<Waypoint>> {
        self.open.get(&location)
    }

    /// The closed Waypoint at `location`, if any
    pub fn closed_waypoint(&self, location: Location) -> Option<&Arc<Waypoint>> {
        self.closed.get(&location)
    }
}

#[derive(Debug)]
struct QueueEntry {
    total_cost: f64,
    order: u64,
    waypoint: Arc<Waypoint>,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &QueueEntry) -> Ordering {
        // reversed, so that the BinaryHeap pops the cheapest and oldest entry first
        other
            .total_cost
            .total_cmp(&self.total_cost)
            .then_with(|| other.order.cmp(&self.order))
    }
}
impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &QueueEntry) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl PartialEq for QueueEntry {
    fn eq(&self, other: &QueueEntry) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for QueueEntry {}
