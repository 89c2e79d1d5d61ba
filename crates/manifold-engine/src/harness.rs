//! Randomized cross-check harness
//!
//! Generates seeded random grids and verifies the engine's invariants on
//! each: strategy agreement, idempotence, division bounds. Backs the
//! `simulate` subcommand and the stress-style integration tests; every
//! violation carries the grid index and seed needed to reproduce it.

use crate::divisions::count_divisions;
use crate::strategy::{count_timelines_with, Strategy};
use manifold_grid::{Grid, GridLimits, ParseError};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Simulator configuration
#[derive(Debug, Clone)]
pub struct SimulatorConfig {
    /// Random seed for reproducibility
    pub seed: u64,
    /// Number of grids to generate and check
    pub grids: usize,
    /// Rows per generated grid
    pub rows: usize,
    /// Columns per generated grid
    pub cols: usize,
    /// Probability that a generated cell is a splitter
    pub splitter_density: f64,
    /// Stop checking after the first grid with violations
    pub stop_on_first_violation: bool,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            grids: 100,
            rows: 32,
            cols: 32,
            splitter_density: 0.25,
            stop_on_first_violation: true,
        }
    }
}

/// Invariants the harness checks on every generated grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvariantCheck {
    /// Dense and sparse strategies return the same outcome, errors included
    StrategiesAgree,
    /// Counting the same grid twice returns the same outcome
    CountIsIdempotent,
    /// Divisions never exceed the grid's splitter population
    DivisionsWithinSplitterCount,
    /// A splitter-free grid carries at most one timeline to the bottom
    SplitterFreeSingleTimeline,
}

/// A violation detected during simulation
#[derive(Debug, Clone)]
pub enum Violation {
    /// A generated grid failed to build
    Generation {
        /// Index of the grid within the run
        grid_index: usize,
        /// Construction failure text
        details: String,
    },
    /// An invariant did not hold
    Invariant {
        /// Index of the grid within the run
        grid_index: usize,
        /// The check that failed
        check: InvariantCheck,
        /// Observed values
        details: String,
    },
}

/// Statistics collected during simulation
#[derive(Debug, Clone, Default)]
pub struct SimulatorStats {
    /// Grids generated and checked
    pub grids_checked: usize,
    /// Individual invariant checks executed
    pub checks_run: u64,
    /// Largest successful total observed
    pub max_total: u64,
}

/// Final report from the simulator
#[derive(Debug, Clone)]
pub struct SimulatorReport {
    /// The configuration the run used
    pub config: SimulatorConfig,
    /// Collected statistics
    pub stats: SimulatorStats,
    /// All violations, in detection order
    pub violations: Vec<Violation>,
}

impl SimulatorReport {
    /// Check if the run passed all criteria
    #[must_use]
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }

    /// Generate a text report
    #[must_use]
    pub fn generate_text(&self) -> String {
        let mut report = String::new();

        report.push_str("=== Manifold Simulator Report ===\n\n");
        report.push_str(&format!("Seed: {}\n", self.config.seed));
        report.push_str(&format!(
            "Grids checked: {}/{}\n",
            self.stats.grids_checked, self.config.grids
        ));
        report.push_str(&format!(
            "Grid size: {}x{}, splitter density {}\n",
            self.config.rows, self.config.cols, self.config.splitter_density
        ));
        report.push_str(&format!("Checks run: {}\n", self.stats.checks_run));
        report.push_str(&format!("Max total observed: {}\n", self.stats.max_total));
        report.push_str(&format!("Violations: {}\n", self.violations.len()));

        if !self.violations.is_empty() {
            report.push_str("\n=== Violations ===\n");
            for (i, v) in self.violations.iter().enumerate() {
                report.push_str(&format!("{}. {:?}\n", i + 1, v));
            }
        }

        report.push_str(&format!(
            "\n=== Result: {} ===\n",
            if self.passed() { "PASS" } else { "FAIL" }
        ));

        report
    }
}

/// Generate one random grid: `rows x cols`, each cell a splitter with
/// probability `splitter_density`, and a start marker at a random column of
/// the top row. Dimensions are clamped to at least one.
///
/// # Errors
/// Surfaces [`ParseError`] from grid construction; unreachable for the
/// clamped dimensions this function feeds in.
pub fn generate_grid(
    rng: &mut StdRng,
    rows: usize,
    cols: usize,
    splitter_density: f64,
) -> Result<Grid, ParseError> {
    let rows = rows.max(1);
    let cols = cols.max(1);
    // gen_bool panics outside [0, 1]
    let density = if splitter_density.is_finite() {
        splitter_density.clamp(0.0, 1.0)
    } else {
        0.0
    };

    let mut lines = Vec::with_capacity(rows);
    for _ in 0..rows {
        let mut line = String::with_capacity(cols);
        for _ in 0..cols {
            line.push(if rng.gen_bool(density) { '^' } else { '.' });
        }
        lines.push(line);
    }
    let start_col = rng.gen_range(0..cols);
    lines[0].replace_range(start_col..=start_col, "S");

    Grid::from_lines_with_limits(
        &lines,
        GridLimits {
            max_rows: rows,
            max_cols: cols,
        },
    )
}

/// Run the simulator
#[must_use]
pub fn run_simulator(config: SimulatorConfig) -> SimulatorReport {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut stats = SimulatorStats::default();
    let mut violations = Vec::new();

    tracing::debug!(
        seed = config.seed,
        grids = config.grids,
        rows = config.rows,
        cols = config.cols,
        "simulator starting"
    );

    for grid_index in 0..config.grids {
        let grid = match generate_grid(&mut rng, config.rows, config.cols, config.splitter_density)
        {
            Ok(grid) => grid,
            Err(err) => {
                violations.push(Violation::Generation {
                    grid_index,
                    details: err.to_string(),
                });
                if config.stop_on_first_violation {
                    break;
                }
                continue;
            }
        };

        let grid_violations = check_grid(&grid, grid_index, &mut stats);
        stats.grids_checked += 1;
        let failed = !grid_violations.is_empty();
        violations.extend(grid_violations);
        if failed && config.stop_on_first_violation {
            break;
        }
    }

    SimulatorReport {
        config,
        stats,
        violations,
    }
}

/// Check all invariants on one grid
fn check_grid(grid: &Grid, grid_index: usize, stats: &mut SimulatorStats) -> Vec<Violation> {
    let mut violations = Vec::new();

    let dense_first = count_timelines_with(grid, Strategy::Dense);
    let dense_second = count_timelines_with(grid, Strategy::Dense);
    let sparse = count_timelines_with(grid, Strategy::Sparse);

    stats.checks_run += 1;
    if dense_first != sparse {
        violations.push(Violation::Invariant {
            grid_index,
            check: InvariantCheck::StrategiesAgree,
            details: format!("dense {dense_first:?} vs sparse {sparse:?}"),
        });
    }

    stats.checks_run += 1;
    if dense_first != dense_second {
        violations.push(Violation::Invariant {
            grid_index,
            check: InvariantCheck::CountIsIdempotent,
            details: format!("first {dense_first:?} vs second {dense_second:?}"),
        });
    }

    stats.checks_run += 1;
    let splitters = grid.splitter_count() as u64;
    match count_divisions(grid) {
        Ok(divisions) if divisions <= splitters => {}
        Ok(divisions) => violations.push(Violation::Invariant {
            grid_index,
            check: InvariantCheck::DivisionsWithinSplitterCount,
            details: format!("{divisions} divisions against {splitters} splitters"),
        }),
        Err(err) => violations.push(Violation::Invariant {
            grid_index,
            check: InvariantCheck::DivisionsWithinSplitterCount,
            details: format!("division sweep failed: {err}"),
        }),
    }

    if splitters == 0 {
        stats.checks_run += 1;
        match &dense_first {
            Ok(total) if *total <= 1 => {}
            other => violations.push(Violation::Invariant {
                grid_index,
                check: InvariantCheck::SplitterFreeSingleTimeline,
                details: format!("expected at most one timeline, got {other:?}"),
            }),
        }
    }

    if let Ok(total) = dense_first {
        stats.max_total = stats.max_total.max(total);
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_run_passes() {
        let report = run_simulator(SimulatorConfig {
            grids: 25,
            rows: 16,
            cols: 16,
            ..SimulatorConfig::default()
        });
        assert!(report.passed(), "{}", report.generate_text());
        assert_eq!(report.stats.grids_checked, 25);
        assert!(report.stats.checks_run >= 75);
    }

    #[test]
    fn same_seed_reproduces_run() {
        let config = SimulatorConfig {
            grids: 10,
            rows: 12,
            cols: 12,
            seed: 7,
            ..SimulatorConfig::default()
        };
        let first = run_simulator(config.clone());
        let second = run_simulator(config);
        assert_eq!(first.violations.len(), second.violations.len());
        assert_eq!(first.stats.max_total, second.stats.max_total);
        assert_eq!(first.stats.checks_run, second.stats.checks_run);
    }

    #[test]
    fn zero_density_caps_totals_at_one() {
        let report = run_simulator(SimulatorConfig {
            grids: 10,
            rows: 8,
            cols: 8,
            splitter_density: 0.0,
            ..SimulatorConfig::default()
        });
        assert!(report.passed(), "{}", report.generate_text());
        assert!(report.stats.max_total <= 1);
    }

    #[test]
    fn generated_grid_has_one_start_in_top_row() {
        let mut rng = StdRng::seed_from_u64(1);
        let grid = generate_grid(&mut rng, 6, 9, 0.5).unwrap();
        assert_eq!(grid.dimensions(), (6, 9));
        assert_eq!(grid.find_start().unwrap().row, 0);
        let starts = grid.cells().filter(|(_, cell)| cell.is_start()).count();
        assert_eq!(starts, 1);
    }

    #[test]
    fn report_text_carries_verdict() {
        let report = run_simulator(SimulatorConfig {
            grids: 2,
            rows: 4,
            cols: 4,
            ..SimulatorConfig::default()
        });
        let text = report.generate_text();
        assert!(text.contains("Seed: 42"));
        assert!(text.contains("Result: PASS"));
    }
}
