#[cfg(feature = "parallel")]
use rayon::prelude::*;

use std::sync::Arc;

use super::{Endpoints, Grid};
use crate::graph::{SearchFrontier, Waypoint};
use crate::{Location, PathError, PathfinderConfig};

/// Counters describing how a search went
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// The number of Waypoints whose neighbors were expanded
    pub expansions: usize,
    /// The number of candidates that were accepted into the open set
    pub insertions: usize,
    /// The number of neighbors dropped for reaching the cost limit
    pub pruned: usize,
    /// The size of the open set when the search ended
    pub open_left: usize,
    /// The size of the closed set when the search ended
    pub closed: usize,
}

/// Runs A* searches on [`Grid`]s.
///
/// Every search owns its own [`SearchFrontier`], so a Pathfinder can be shared freely and
/// the same Grid can be searched from several threads at once.
#[derive(Clone, Debug, Default)]
pub struct Pathfinder {
    config: PathfinderConfig,
}

impl Pathfinder {
    /// Creates a Pathfinder with the given options
    pub fn new(config: PathfinderConfig) -> Pathfinder {
        Pathfinder { config }
    }

    /// The options of this Pathfinder
    pub fn config(&self) -> &PathfinderConfig {
        &self.config
    }

    /// Searches for the cheapest Path from the start to the finish of `grid`.
    ///
    /// Returns the Waypoint at the finish, whose [`predecessor`](Waypoint::predecessor)s lead
    /// back to the start, or `Ok(None)` if the finish can't be reached.
    ///
    /// ## Errors
    /// - [`PathError::InvalidArgument`] if the start or finish lie outside of `grid`
    /// - [`PathError::ExpansionLimit`] if [`max_expansions`](PathfinderConfig::max_expansions)
    ///   was exceeded
    ///
    /// ## Examples
    /// ```
    /// use astar_pathfinding::prelude::*;
    ///
    /// let grid = CostGrid::new(3, 3).unwrap();
    /// let goal = Pathfinder::default().compute_path(&grid).unwrap().unwrap();
    ///
    /// assert_eq!(goal.location(), Location::new(2, 2));
    /// assert_eq!(goal.ancestors().count(), 3);
    /// ```
    pub fn compute_path<G: Grid + ?Sized>(
        &self,
        grid: &G,
    ) -> Result<Option<Arc<Waypoint>>, PathError> {
        self.compute_path_with_stats(grid).map(|(goal, _)| goal)
    }

    /// Same as [`compute_path`](Pathfinder::compute_path), but also reports what the search did
    pub fn compute_path_with_stats<G: Grid + ?Sized>(
        &self,
        grid: &G,
    ) -> Result<(Option<Arc<Waypoint>>, SearchStats), PathError> {
        #[cfg(feature = "log")]
        let (outer_timer, timer) = (std::time::Instant::now(), std::time::Instant::now());

        let mut frontier = SearchFrontier::new(grid)?;
        let mut stats = SearchStats::default();
        let finish = grid.finish();

        let start = grid.start();
        frontier.try_insert(Waypoint::new(start, None, 0.0, heuristic(start, finish)));

        re_trace!("astar setup", timer);

        let mut goal = None;
        while let Some(best) = frontier.select_best() {
            let found = best.location() == finish;
            let budget_left = self
                .config
                .max_expansions
                .map_or(true, |limit| stats.expansions < limit);
            if !found {
                if !budget_left {
                    let limit = stats.expansions;
                    #[cfg(feature = "log")]
                    log::debug!("astar gave up after {} expansions", limit);
                    return Err(PathError::ExpansionLimit { limit });
                }
                self.expand(&best, &mut frontier, &mut stats);
            } else if self.config.expand_goal && budget_left {
                // the goal is already found, so a spent budget only skips this step
                self.expand(&best, &mut frontier, &mut stats);
            }

            frontier.close(best.location());
            if found {
                goal = Some(best);
                break;
            }
        }

        re_trace!("astar loop", timer);

        stats.open_left = frontier.size();
        stats.closed = frontier.closed_len();

        #[cfg(feature = "log")]
        log::debug!(
            "astar from {} to {}: {}, {:?}",
            start,
            finish,
            if goal.is_some() { "found" } else { "unreachable" },
            stats
        );

        re_trace!("astar total", outer_timer);

        Ok((goal, stats))
    }

    /// Offers every neighbor of `current` to the frontier
    fn expand<G: Grid + ?Sized>(
        &self,
        current: &Arc<Waypoint>,
        frontier: &mut SearchFrontier<G>,
        stats: &mut SearchStats,
    ) {
        stats.expansions += 1;
        let grid = frontier.grid();
        let location = current.location();
        let finish = grid.finish();

        for next in location.neighbors() {
            if !grid.contains(next) || frontier.is_closed(next) {
                continue;
            }

            // the length of the step plus the cost of the cell that is entered
            let cost_so_far =
                current.cost_so_far() + heuristic(location, next) + grid.cell_cost(next);
            if cost_so_far >= self.config.cost_limit {
                stats.pruned += 1;
                continue;
            }

            let candidate = Waypoint::new(
                next,
                Some(current.clone()),
                cost_so_far,
                heuristic(next, finish),
            );
            if frontier.try_insert(candidate) {
                stats.insertions += 1;
            }
        }
    }

    /// Runs [`compute_path`](Pathfinder::compute_path) on each of `grids`.
    ///
    /// The searches run in parallel with the `parallel` feature. Results are in the same order
    /// as `grids`.
    pub fn compute_paths<G: Grid + Sync>(
        &self,
        grids: &[G],
    ) -> Vec<Result<Option<Arc<Waypoint>>, PathError>> {
        #[cfg(feature = "parallel")]
        let iter = grids.par_iter();
        #[cfg(not(feature = "parallel"))]
        let iter = grids.iter();

        iter.map(|grid| self.compute_path(grid)).collect()
    }

    /// Searches `grid` once for every `(start, finish)` pair in `endpoints`, ignoring the
    /// endpoints of `grid` itself.
    ///
    /// The searches run in parallel with the `parallel` feature. Results are in the same order
    /// as `endpoints`.
    ///
    /// ## Examples
    /// ```
    /// use astar_pathfinding::prelude::*;
    ///
    /// let grid = CostGrid::new(8, 8).unwrap();
    /// let queries = [
    ///     (Location::new(0, 0), Location::new(7, 0)),
    ///     (Location::new(3, 3), Location::new(3, 3)),
    ///     (Location::new(0, 0), Location::new(9, 9)),
    /// ];
    /// let results = Pathfinder::default().compute_paths_between(&grid, &queries);
    ///
    /// assert_eq!(results[0].as_ref().unwrap().as_ref().unwrap().cost_so_far(), 7.0);
    /// assert_eq!(results[1].as_ref().unwrap().as_ref().unwrap().cost_so_far(), 0.0);
    /// assert!(results[2].is_err());
    /// ```
    pub fn compute_paths_between<G: Grid + Sync + ?Sized>(
        &self,
        grid: &G,
        endpoints: &[(Location, Location)],
    ) -> Vec<Result<Option<Arc<Waypoint>>, PathError>> {
        #[cfg(feature = "parallel")]
        let iter = endpoints.par_iter();
        #[cfg(not(feature = "parallel"))]
        let iter = endpoints.iter();

        iter.map(|&(start, finish)| self.compute_path(&Endpoints::new(grid, start, finish)))
            .collect()
    }
}

/// Searches `grid` with the default [`PathfinderConfig`], see [`Pathfinder::compute_path`]
pub fn compute_path<G: Grid + ?Sized>(grid: &G) -> Result<Option<Arc<Waypoint>>, PathError> {
    Pathfinder::default().compute_path(grid)
}

/// The straight-line distance between `a` and `b`
fn heuristic(a: Location, b: Location) -> f64 {
    a.distance(b)
}
