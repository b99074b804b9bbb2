//! The search tree: [`Waypoint`]s and the open/closed bookkeeping of a running search.

mod waypoint;
pub use waypoint::{Ancestors, Waypoint};

mod search_frontier;
pub use search_frontier::SearchFrontier;
