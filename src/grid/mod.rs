//! The [`Grid`] a search runs on, and the search itself.

use crate::Location;

mod astar;
pub use astar::{compute_path, Pathfinder, SearchStats};

mod cost_grid;
pub use cost_grid::{CostGrid, BARRIER_COST};

/// The map a [`Pathfinder`] searches.
///
/// Implementations are only read during a search, so a Grid that is [`Sync`] can be shared by
/// searches running on several threads.
pub trait Grid {
    /// `true` if `location` lies within the bounds of the Grid
    fn contains(&self, location: Location) -> bool;

    /// The extra cost of stepping onto `location`, on top of the length of the step.
    ///
    /// Must not be negative. Values at or above the
    /// [`cost_limit`](crate::PathfinderConfig::cost_limit) make the cell impassable.
    fn cell_cost(&self, location: Location) -> f64;

    /// Where the search begins
    fn start(&self) -> Location;

    /// Where the search ends
    fn finish(&self) -> Location;
}

impl<G: Grid + ?Sized> Grid for &G {
    fn contains(&self, location: Location) -> bool {
        (**self).contains(location)
    }
    fn cell_cost(&self, location: Location) -> f64 {
        (**self).cell_cost(location)
    }
    fn start(&self) -> Location {
        (**self).start()
    }
    fn finish(&self) -> Location {
        (**self).finish()
    }
}

/// A view of another Grid with different endpoints.
///
/// ## Examples
/// ```
/// use astar_pathfinding::prelude::*;
/// use astar_pathfinding::Endpoints;
///
/// let grid = CostGrid::new(4, 4).unwrap();
/// let reversed = Endpoints::new(&grid, grid.finish(), grid.start());
///
/// let goal = compute_path(&reversed).unwrap().unwrap();
/// assert_eq!(goal.location(), grid.start());
/// ```
#[derive(Debug)]
pub struct Endpoints<'g, G: ?Sized> {
    grid: &'g G,
    start: Location,
    finish: Location,
}

impl<'g, G: Grid + ?Sized> Endpoints<'g, G> {
    /// Searches on `grid` from `start` to `finish` instead of the endpoints of `grid`
    pub fn new(grid: &'g G, start: Location, finish: Location) -> Endpoints<'g, G> {
        Endpoints {
            grid,
            start,
            finish,
        }
    }
}

impl<'g, G: Grid + ?Sized> Grid for Endpoints<'g, G> {
    fn contains(&self, location: Location) -> bool {
        self.grid.contains(location)
    }
    fn cell_cost(&self, location: Location) -> f64 {
        self.grid.cell_cost(location)
    }
    fn start(&self) -> Location {
        self.start
    }
    fn finish(&self) -> Location {
        self.finish
    }
}
