use crate::COST_LIMIT;

/// Options for how a [`Pathfinder`](crate::Pathfinder) runs its searches
///
/// ## Examples
/// ```
/// use astar_pathfinding::PathfinderConfig;
///
/// let config = PathfinderConfig::default().with_max_expansions(10_000);
/// assert_eq!(config.max_expansions, Some(10_000));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathfinderConfig {
    /// Any step that brings the accumulated cost of a Path to this value or beyond is discarded.
    ///
    /// Barriers are modelled by giving cells a cost that reaches this limit on their own.
    ///
    /// Default: [`COST_LIMIT`]
    pub cost_limit: f64,

    /// The maximum number of waypoints a single search may expand before giving up with
    /// [`PathError::ExpansionLimit`](crate::PathError::ExpansionLimit).
    ///
    /// Default: `None` (no limit)
    pub max_expansions: Option<usize>,

    /// Whether the goal waypoint gets its neighbors expanded once before the search returns.
    ///
    /// This never changes the result. It only exists to reproduce the expansion counts of the
    /// classic formulation of the loop.
    ///
    /// Default: `false`
    pub expand_goal: bool,
}

impl PathfinderConfig {
    /// Sets [`cost_limit`](PathfinderConfig::cost_limit)
    pub fn with_cost_limit(mut self, cost_limit: f64) -> Self {
        self.cost_limit = cost_limit;
        self
    }

    /// Sets [`max_expansions`](PathfinderConfig::max_expansions)
    pub fn with_max_expansions(mut self, max_expansions: usize) -> Self {
        self.max_expansions = Some(max_expansions);
        self
    }

    /// Sets [`expand_goal`](PathfinderConfig::expand_goal)
    pub fn with_expand_goal(mut self, expand_goal: bool) -> Self {
        self.expand_goal = expand_goal;
        self
    }
}

impl Default for PathfinderConfig {
    fn default() -> PathfinderConfig {
        PathfinderConfig {
            cost_limit: COST_LIMIT,
            max_expansions: None,
            expand_goal: false,
        }
    }
}
