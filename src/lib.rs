//! A crate to find the cheapest Path between two cells of a cost-weighted Grid, using A*.
//!
//! The search runs on any type implementing [`Grid`]: it only needs to know the bounds of the map,
//! the cost of stepping onto a cell and the two endpoints. Movement is 8-connected, and every
//! step costs its straight-line length plus the [`cell_cost`](Grid::cell_cost) of the cell that
//! is entered. Cells whose accumulated cost reaches the
//! [`cost_limit`](PathfinderConfig::cost_limit) are never entered, which is how barriers are
//! expressed.
//!
//! ## Example
//! ```
//! use astar_pathfinding::prelude::*;
//!
//! // S = start, F = finish, # = barrier, digits = extra cost
//! let grid: CostGrid = "\
//! S.#..
//! ..#..
//! .9...
//! ....F"
//!     .parse()
//!     .unwrap();
//!
//! let goal = compute_path(&grid).unwrap().expect("finish is reachable");
//! let path = Path::from_waypoint(&goal);
//!
//! assert_eq!(path[0], grid.start());
//! assert_eq!(path[path.len() - 1], grid.finish());
//! assert!((path.cost() - goal.cost_so_far()).abs() < 1e-9);
//! ```
//!
//! ## Features
//! - `parallel` (default): batch queries like [`Pathfinder::compute_paths`] run on the `rayon`
//!   thread pool. A single search is always single-threaded.
//! - `log`: internal timings and search statistics are reported through the `log` crate.

// a Macro to log::trace the time since $timer, and restart $timer
#[cfg(feature = "log")]
macro_rules! re_trace {
    ($msg: literal, $timer: ident) => {
        let now = std::time::Instant::now();
        log::trace!(concat!("time to ", $msg, ": {:?}"), now - $timer);
        #[allow(unused)]
        let $timer = now;
    };
}
#[cfg(not(feature = "log"))]
macro_rules! re_trace {
    // does nothing without log feature
    ($msg: literal, $timer: ident) => {};
}

mod location;
pub use location::Location;

mod error;
pub use error::PathError;

mod config;
pub use config::PathfinderConfig;

pub mod graph;
pub use graph::{SearchFrontier, Waypoint};

pub mod grid;
pub use grid::{compute_path, CostGrid, Endpoints, Grid, Pathfinder, SearchStats, BARRIER_COST};

mod path;
pub use path::Path;

/// Accumulated costs at or above this value are pruned from the search.
pub const COST_LIMIT: f64 = 1e6;

/// A [`hashbrown::HashMap`] keyed by [`Location`]
pub type LocationMap<V> = hashbrown::HashMap<Location, V>;
/// A [`hashbrown::HashSet`] of [`Location`]s
pub type LocationSet = hashbrown::HashSet<Location>;

/// The common imports needed to run a search
pub mod prelude {
    pub use crate::{
        compute_path, CostGrid, Grid, Location, Path, PathError, Pathfinder, PathfinderConfig,
        Waypoint, BARRIER_COST, COST_LIMIT,
    };
}
