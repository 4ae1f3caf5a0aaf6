// File: crates/graph-core/src/cranes.rs
// Summary: Crane unloading problem: grid, monotone east/south paths, exhaustive and DP solvers.
//
// A path starts at (0, 0) and moves one cell east or south per step, never
// leaving the grid or entering a building. The goal is the path that passes
// the most cranes. These are the two solvers whose runtimes `timing` plots.

use std::fmt;

use tracing::debug;

use crate::error::CraneError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Road,
    Building,
    Crane,
}

impl Cell {
    fn from_char(ch: char) -> Result<Self, CraneError> {
        match ch {
            '.' => Ok(Cell::Road),
            'X' => Ok(Cell::Building),
            'c' => Ok(Cell::Crane),
            other => Err(CraneError::UnknownCell(other)),
        }
    }

    fn as_char(self) -> char {
        match self {
            Cell::Road => '.',
            Cell::Building => 'X',
            Cell::Crane => 'c',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepDirection {
    East,
    South,
}

/// Row-major rectangle of cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// All-road grid.
    pub fn new(rows: usize, columns: usize) -> Self {
        Self { rows, columns, cells: vec![Cell::Road; rows * columns] }
    }

    pub fn from_cells(rows: usize, columns: usize, cells: Vec<Cell>) -> Result<Self, CraneError> {
        let expected = rows * columns;
        if cells.len() != expected {
            return Err(CraneError::CellCount { rows, columns, expected, got: cells.len() });
        }
        Ok(Self { rows, columns, cells })
    }

    /// Parse one line per row: `.` road, `X` building, `c` crane.
    /// Blank lines and surrounding whitespace are ignored.
    pub fn parse(text: &str) -> Result<Self, CraneError> {
        let lines: Vec<&str> = text.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        let rows = lines.len();
        let columns = lines.first().map_or(0, |l| l.chars().count());
        let cells = lines
            .iter()
            .flat_map(|l| l.chars())
            .map(Cell::from_char)
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_cells(rows, columns, cells)
    }

    pub fn rows(&self) -> usize { self.rows }

    pub fn columns(&self) -> usize { self.columns }

    pub fn get(&self, row: usize, column: usize) -> Option<Cell> {
        if row < self.rows && column < self.columns {
            Some(self.cells[row * self.columns + column])
        } else {
            None
        }
    }

    /// Overwrite one cell; out-of-range coordinates are ignored.
    pub fn set(&mut self, row: usize, column: usize, cell: Cell) {
        if row < self.rows && column < self.columns {
            self.cells[row * self.columns + column] = cell;
        }
    }

    fn check_solvable(&self) -> Result<(), CraneError> {
        if self.rows == 0 || self.columns == 0 {
            return Err(CraneError::EmptyGrid { rows: self.rows, columns: self.columns });
        }
        if self.get(0, 0) == Some(Cell::Building) {
            return Err(CraneError::StartBlocked);
        }
        Ok(())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.columns.max(1)) {
            let line: String = row.iter().map(|c| c.as_char()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Walk from (0, 0) over `grid`. Cranes are counted on every visited cell,
/// including the start.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path<'g> {
    grid: &'g Grid,
    steps: Vec<StepDirection>,
    row: usize,
    column: usize,
    cranes: usize,
}

impl<'g> Path<'g> {
    pub fn new(grid: &'g Grid) -> Self {
        let cranes = usize::from(grid.get(0, 0) == Some(Cell::Crane));
        Self { grid, steps: Vec::new(), row: 0, column: 0, cranes }
    }

    fn target(&self, direction: StepDirection) -> (usize, usize) {
        match direction {
            StepDirection::East => (self.row, self.column + 1),
            StepDirection::South => (self.row + 1, self.column),
        }
    }

    /// True when the next cell in `direction` is inside the grid and not a building.
    pub fn is_step_valid(&self, direction: StepDirection) -> bool {
        let (r, c) = self.target(direction);
        matches!(self.grid.get(r, c), Some(Cell::Road | Cell::Crane))
    }

    pub fn add_step(&mut self, direction: StepDirection) -> Result<(), CraneError> {
        if !self.is_step_valid(direction) {
            return Err(CraneError::InvalidStep { row: self.row, column: self.column, direction });
        }
        let (r, c) = self.target(direction);
        if self.grid.get(r, c) == Some(Cell::Crane) {
            self.cranes += 1;
        }
        self.row = r;
        self.column = c;
        self.steps.push(direction);
        Ok(())
    }

    /// Copy of this path extended by one step.
    fn extended(&self, direction: StepDirection) -> Result<Self, CraneError> {
        let mut next = self.clone();
        next.add_step(direction)?;
        Ok(next)
    }

    pub fn total_cranes(&self) -> usize { self.cranes }

    pub fn steps(&self) -> &[StepDirection] { &self.steps }

    /// (row, column) of the last visited cell.
    pub fn end(&self) -> (usize, usize) { (self.row, self.column) }

    pub fn grid(&self) -> &'g Grid { self.grid }
}

/// Try every east/south pattern of every length up to rows + columns - 2.
/// Exponential; grids needing 64 or more steps are rejected.
pub fn crane_unloading_exhaustive(grid: &Grid) -> Result<Path<'_>, CraneError> {
    grid.check_solvable()?;
    let max_steps = grid.rows() + grid.columns() - 2;
    if max_steps >= 64 {
        return Err(CraneError::TooManySteps { max_steps });
    }

    let mut best = Path::new(grid);
    for steps in 0..=max_steps {
        for bits in 0..(1u64 << steps) {
            let mut candidate = Path::new(grid);
            let valid = (0..steps).all(|k| {
                let direction = if (bits >> k) & 1 == 0 { StepDirection::East } else { StepDirection::South };
                candidate.add_step(direction).is_ok()
            });
            if valid && candidate.total_cranes() > best.total_cranes() {
                best = candidate;
            }
        }
    }
    debug!(cranes = best.total_cranes(), steps = best.steps().len(), "exhaustive search done");
    Ok(best)
}

/// Best path ending at each cell, built from the cell above and the cell to the left.
pub fn crane_unloading_dyn_prog(grid: &Grid) -> Result<Path<'_>, CraneError> {
    grid.check_solvable()?;
    let (rows, columns) = (grid.rows(), grid.columns());

    let mut table: Vec<Vec<Option<Path<'_>>>> = vec![vec![None; columns]; rows];
    table[0][0] = Some(Path::new(grid));

    for r in 0..rows {
        for c in 0..columns {
            if (r, c) == (0, 0) || grid.get(r, c) == Some(Cell::Building) {
                continue;
            }
            let from_above = match r.checked_sub(1).and_then(|up| table[up][c].as_ref()) {
                Some(p) => Some(p.extended(StepDirection::South)?),
                None => None,
            };
            let from_left = match c.checked_sub(1).and_then(|left| table[r][left].as_ref()) {
                Some(p) => Some(p.extended(StepDirection::East)?),
                None => None,
            };
            table[r][c] = match (from_above, from_left) {
                (Some(above), Some(left)) => {
                    if above.total_cranes() > left.total_cranes() { Some(above) } else { Some(left) }
                }
                (above, left) => above.or(left),
            };
        }
    }

    let mut best = Path::new(grid);
    for path in table.into_iter().flatten().flatten() {
        if path.total_cranes() > best.total_cranes() {
            best = path;
        }
    }
    debug!(cranes = best.total_cranes(), steps = best.steps().len(), "dynamic programming done");
    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Grid {
        Grid::parse(
            "
            ..c.
            .X.c
            c..X
            .cc.
            ",
        )
        .unwrap()
    }

    #[test]
    fn parse_round_trips_through_display() {
        let g = sample();
        assert_eq!((g.rows(), g.columns()), (4, 4));
        assert_eq!(g.get(1, 1), Some(Cell::Building));
        assert_eq!(g.get(0, 2), Some(Cell::Crane));
        assert_eq!(g.get(4, 0), None);
        assert_eq!(g.to_string(), "..c.\n.X.c\nc..X\n.cc.\n");
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert_eq!(Grid::parse("..\n.?").unwrap_err(), CraneError::UnknownCell('?'));
        assert!(matches!(Grid::parse("...\n..").unwrap_err(), CraneError::CellCount { expected: 6, got: 5, .. }));
    }

    #[test]
    fn steps_respect_edges_and_buildings() {
        let g = sample();
        let mut p = Path::new(&g);
        assert!(p.is_step_valid(StepDirection::South));
        p.add_step(StepDirection::East).unwrap();
        assert!(!p.is_step_valid(StepDirection::South));
        assert_eq!(
            p.add_step(StepDirection::South).unwrap_err(),
            CraneError::InvalidStep { row: 0, column: 1, direction: StepDirection::South }
        );
        p.add_step(StepDirection::East).unwrap();
        assert_eq!(p.total_cranes(), 1);
        assert_eq!(p.end(), (0, 2));
        assert_eq!(p.steps(), &[StepDirection::East, StepDirection::East]);

        let mut edge = Path::new(&g);
        for _ in 0..3 {
            edge.add_step(StepDirection::South).unwrap();
        }
        assert!(!edge.is_step_valid(StepDirection::South));
    }

    #[test]
    fn solvers_find_best_count() {
        let g = sample();
        let ex = crane_unloading_exhaustive(&g).unwrap();
        let dp = crane_unloading_dyn_prog(&g).unwrap();
        // (0,0) S S -> crane at (2,0), S -> (3,0), E E -> cranes at (3,1) (3,2), E -> (3,3)
        assert_eq!(ex.total_cranes(), 3);
        assert_eq!(dp.total_cranes(), 3);
    }

    #[test]
    fn start_crane_counts() {
        let g = Grid::parse("c").unwrap();
        assert_eq!(crane_unloading_dyn_prog(&g).unwrap().total_cranes(), 1);
        assert_eq!(crane_unloading_exhaustive(&g).unwrap().total_cranes(), 1);
    }

    #[test]
    fn bad_grids_are_errors() {
        let empty = Grid::new(0, 3);
        assert_eq!(crane_unloading_dyn_prog(&empty).unwrap_err(), CraneError::EmptyGrid { rows: 0, columns: 3 });
        assert_eq!(crane_unloading_exhaustive(&empty).unwrap_err(), CraneError::EmptyGrid { rows: 0, columns: 3 });

        let blocked = Grid::parse("X.\n..").unwrap();
        assert_eq!(crane_unloading_dyn_prog(&blocked).unwrap_err(), CraneError::StartBlocked);
        assert_eq!(crane_unloading_exhaustive(&blocked).unwrap_err(), CraneError::StartBlocked);

        let wide = Grid::new(1, 65);
        assert_eq!(crane_unloading_exhaustive(&wide).unwrap_err(), CraneError::TooManySteps { max_steps: 64 });
        assert_eq!(crane_unloading_dyn_prog(&wide).unwrap().total_cranes(), 0);
    }
}
