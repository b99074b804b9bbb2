use std::str::FromStr;

use super::Grid;
use crate::{Location, PathError, COST_LIMIT};

/// The cost of a barrier cell in a [`CostGrid`] parsed from text.
///
/// Stepping onto such a cell always reaches the default
/// [`cost_limit`](crate::PathfinderConfig::cost_limit).
pub const BARRIER_COST: f64 = COST_LIMIT;

/// A rectangular [`Grid`] that stores one cost per cell.
///
/// Cells are addressed from `(0, 0)` to `(width - 1, height - 1)`.
///
/// A CostGrid can be parsed from text, one line per row:
///
/// | Character | Cell |
/// |---|---|
/// | `.` | free, cost 0 |
/// | `0`-`9` | cost of that digit |
/// | `#` | barrier, [`BARRIER_COST`] |
/// | `S` | the start, cost 0 |
/// | `F` | the finish, cost 0 |
///
/// ## Examples
/// ```
/// use astar_pathfinding::prelude::*;
///
/// let grid: CostGrid = "S.#\n.5F".parse().unwrap();
/// assert_eq!((grid.width(), grid.height()), (3, 2));
/// assert_eq!(grid.start(), Location::new(0, 0));
/// assert_eq!(grid.finish(), Location::new(2, 1));
/// assert_eq!(grid.cost(Location::new(1, 1)), Some(5.0));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct CostGrid {
    width: usize,
    height: usize,
    cells: Vec<f64>,
    start: Location,
    finish: Location,
}

impl CostGrid {
    /// Creates a CostGrid where every cell costs 0, with the start in the top left corner and
    /// the finish in the bottom right corner.
    ///
    /// ## Errors
    /// [`PathError::InvalidArgument`] if either dimension is 0 or does not fit in an `i32`.
    pub fn new(width: usize, height: usize) -> Result<CostGrid, PathError> {
        if width == 0 || height == 0 {
            return Err(PathError::invalid(format!(
                "grid of size {}x{} has no cells",
                width, height
            )));
        }
        if i32::try_from(width).is_err() || i32::try_from(height).is_err() {
            return Err(PathError::invalid(format!(
                "grid of size {}x{} is too large",
                width, height
            )));
        }
        Ok(CostGrid {
            width,
            height,
            cells: vec![0.0; width * height],
            start: Location::new(0, 0),
            finish: Location::new(width as i32 - 1, height as i32 - 1),
        })
    }

    /// The number of columns
    pub fn width(&self) -> usize {
        self.width
    }

    /// The number of rows
    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, location: Location) -> Option<usize> {
        if self.contains(location) {
            Some(location.y as usize * self.width + location.x as usize)
        } else {
            None
        }
    }

    fn checked_index(&self, location: Location) -> Result<usize, PathError> {
        self.index(location).ok_or_else(|| {
            PathError::invalid(format!(
                "{} is outside of the {}x{} grid",
                location, self.width, self.height
            ))
        })
    }

    /// The cost of the cell at `location`, or `None` if it is outside of the Grid
    pub fn cost(&self, location: Location) -> Option<f64> {
        self.index(location).map(|i| self.cells[i])
    }

    /// Changes the cost of the cell at `location`.
    ///
    /// ## Errors
    /// [`PathError::InvalidArgument`] if `location` is outside of the Grid or `cost` is negative
    /// or NaN.
    pub fn set_cost(&mut self, location: Location, cost: f64) -> Result<(), PathError> {
        if cost.is_nan() || cost < 0.0 {
            return Err(PathError::invalid(format!(
                "cell cost must not be negative, got {}",
                cost
            )));
        }
        let i = self.checked_index(location)?;
        self.cells[i] = cost;
        Ok(())
    }

    /// Turns the cell at `location` into a barrier, see [`BARRIER_COST`]
    pub fn set_barrier(&mut self, location: Location) -> Result<(), PathError> {
        self.set_cost(location, BARRIER_COST)
    }

    /// Moves the start of the Grid
    pub fn set_start(&mut self, location: Location) -> Result<(), PathError> {
        self.checked_index(location)?;
        self.start = location;
        Ok(())
    }

    /// Moves the finish of the Grid
    pub fn set_finish(&mut self, location: Location) -> Result<(), PathError> {
        self.checked_index(location)?;
        self.finish = location;
        Ok(())
    }
}

impl Grid for CostGrid {
    fn contains(&self, location: Location) -> bool {
        location.x >= 0
            && location.y >= 0
            && (location.x as usize) < self.width
            && (location.y as usize) < self.height
    }

    fn cell_cost(&self, location: Location) -> f64 {
        self.cost(location).unwrap_or(f64::INFINITY)
    }

    fn start(&self) -> Location {
        self.start
    }

    fn finish(&self) -> Location {
        self.finish
    }
}

impl FromStr for CostGrid {
    type Err = PathError;

    fn from_str(s: &str) -> Result<CostGrid, PathError> {
        let mut rows: Vec<(usize, &str)> = s
            .lines()
            .enumerate()
            .map(|(line, row)| (line + 1, row.trim_end()))
            .collect();
        // blank lines are only allowed after the last row
        while rows.last().map_or(false, |(_, row)| row.is_empty()) {
            rows.pop();
        }

        let width = rows.first().map_or(0, |(_, row)| row.chars().count());
        let mut grid = CostGrid::new(width, rows.len())?;
        let mut start = None;
        let mut finish = None;

        for (y, &(line, row)) in rows.iter().enumerate() {
            let mut x = 0;
            for (column, c) in row.chars().enumerate() {
                let error = PathError::ParseGrid {
                    line,
                    column: column + 1,
                    found: c,
                };
                if x >= width {
                    return Err(error);
                }
                let location = Location::new(x as i32, y as i32);
                let cost = match c {
                    '.' => 0.0,
                    '#' => BARRIER_COST,
                    '0'..='9' => f64::from(c as u8 - b'0'),
                    'S' if start.is_none() => {
                        start = Some(location);
                        0.0
                    }
                    'F' if finish.is_none() => {
                        finish = Some(location);
                        0.0
                    }
                    _ => return Err(error),
                };
                grid.set_cost(location, cost)?;
                x += 1;
            }
            if x != width {
                return Err(PathError::invalid(format!(
                    "line {} has {} cells, expected {}",
                    line, x, width
                )));
            }
        }

        let start = start.ok_or_else(|| PathError::invalid("map has no start 'S'"))?;
        let finish = finish.ok_or_else(|| PathError::invalid("map has no finish 'F'"))?;
        grid.set_start(start)?;
        grid.set_finish(finish)?;
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new() {
        let grid = CostGrid::new(4, 3).unwrap();
        assert_eq!(grid.start(), Location::new(0, 0));
        assert_eq!(grid.finish(), Location::new(3, 2));
        assert!(grid.contains(Location::new(3, 2)));
        assert!(!grid.contains(Location::new(4, 2)));
        assert!(!grid.contains(Location::new(0, -1)));
        assert_eq!(grid.cell_cost(Location::new(1, 1)), 0.0);

        assert!(matches!(
            CostGrid::new(0, 3),
            Err(PathError::InvalidArgument(_))
        ));
    }

    #[test]
    fn set_cost() {
        let mut grid = CostGrid::new(3, 3).unwrap();
        grid.set_cost(Location::new(1, 2), 2.5).unwrap();
        grid.set_barrier(Location::new(2, 0)).unwrap();

        assert_eq!(grid.cost(Location::new(1, 2)), Some(2.5));
        assert_eq!(grid.cell_cost(Location::new(2, 0)), BARRIER_COST);
        assert_eq!(grid.cost(Location::new(3, 3)), None);

        assert!(grid.set_cost(Location::new(0, 0), -1.0).is_err());
        assert!(grid.set_cost(Location::new(0, 0), f64::NAN).is_err());
        assert!(grid.set_cost(Location::new(5, 0), 1.0).is_err());
        assert!(grid.set_start(Location::new(-1, 0)).is_err());
        assert!(grid.set_finish(Location::new(0, 3)).is_err());
    }

    #[test]
    fn parse() {
        let grid: CostGrid = "\
            .S#\n\
            12F\n\
            ...\n"
            .parse()
            .unwrap();

        assert_eq!((grid.width(), grid.height()), (3, 3));
        assert_eq!(grid.start(), Location::new(1, 0));
        assert_eq!(grid.finish(), Location::new(2, 1));
        assert_eq!(grid.cost(Location::new(2, 0)), Some(BARRIER_COST));
        assert_eq!(grid.cost(Location::new(0, 1)), Some(1.0));
        assert_eq!(grid.cost(Location::new(1, 1)), Some(2.0));
        assert_eq!(grid.cost(Location::new(2, 1)), Some(0.0));
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            "S.x\n..F".parse::<CostGrid>(),
            Err(PathError::ParseGrid {
                line: 1,
                column: 3,
                found: 'x'
            })
        );
        assert_eq!(
            "S.S\n..F".parse::<CostGrid>(),
            Err(PathError::ParseGrid {
                line: 1,
                column: 3,
                found: 'S'
            })
        );
        assert_eq!(
            "S..\n..F.".parse::<CostGrid>(),
            Err(PathError::ParseGrid {
                line: 2,
                column: 4,
                found: '.'
            })
        );
        assert!(matches!(
            "S..\n.F".parse::<CostGrid>(),
            Err(PathError::InvalidArgument(_))
        ));
        assert!(matches!(
            "S..\n...".parse::<CostGrid>(),
            Err(PathError::InvalidArgument(_))
        ));
        assert!(matches!(
            "".parse::<CostGrid>(),
            Err(PathError::InvalidArgument(_))
        ));
    }

    #[test]
    fn parse_blank_lines() {
        let grid: CostGrid = "S.\n.F\n\n\n".parse().unwrap();
        assert_eq!((grid.width(), grid.height()), (2, 2));

        let gap = "S.\n\n.F".parse::<CostGrid>();
        assert_eq!(
            gap,
            Err(PathError::InvalidArgument(
                "line 2 has 0 cells, expected 2".to_string()
            ))
        );
    }
}
