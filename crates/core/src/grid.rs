//! Grid module - the square field of cells
//!
//! The grid owns its fields as rows of columns (`fields[row][col]`). It is
//! built once at setup and then borrowed: immutably or mutably by the
//! renderer (to bind hitboxes) and mutably by hit-testing. Only one writer
//! touches it at a time; no locking is involved.

use arrayvec::ArrayVec;
use tracing::info;

use crate::field::{Field, FieldError, FieldKind};
use crate::rng::mine_indices;
use crate::types::{GameConfig, Position, NEIGHBOR_OFFSETS};

#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    field_size: usize,
    fields: Vec<Vec<Field>>,
}

impl Grid {
    /// Assemble a grid from caller-built rows.
    ///
    /// Every row must hold `field_size` fields and the field at
    /// `fields[row][col]` must have been created for that position.
    pub fn from_fields(config: &GameConfig, fields: Vec<Vec<Field>>) -> Result<Self, FieldError> {
        let size = config.field_size;
        if fields.len() != size {
            return Err(FieldError::LayoutMismatch {
                row: None,
                expected: size,
                found: fields.len(),
            });
        }
        for (row, cols) in fields.iter().enumerate() {
            if cols.len() != size {
                return Err(FieldError::LayoutMismatch {
                    row: Some(row),
                    expected: size,
                    found: cols.len(),
                });
            }
            for (col, field) in cols.iter().enumerate() {
                if field.row() != row || field.col() != col {
                    return Err(FieldError::InvalidFieldPosition {
                        col: field.col() as i64,
                        row: field.row() as i64,
                        field_size: size,
                    });
                }
            }
        }
        Ok(Self {
            field_size: size,
            fields,
        })
    }

    /// Build a grid from text rows where `*` marks a mine and anything else
    /// a plain field.
    ///
    /// ```
    /// use tui_mines_core::Grid;
    /// use tui_mines_core::types::GameConfig;
    ///
    /// let grid = Grid::from_layout(&GameConfig::with_field_size(3), &["...", ".*.", "..."]).unwrap();
    /// assert_eq!(grid.calculate_mines(0, 0), 1);
    /// ```
    pub fn from_layout(config: &GameConfig, rows: &[&str]) -> Result<Self, FieldError> {
        let size = config.field_size;
        if rows.len() != size {
            return Err(FieldError::LayoutMismatch {
                row: None,
                expected: size,
                found: rows.len(),
            });
        }
        let mut fields = Vec::with_capacity(size);
        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != size {
                return Err(FieldError::LayoutMismatch {
                    row: Some(row),
                    expected: size,
                    found,
                });
            }
            let cols = line
                .chars()
                .enumerate()
                .map(|(col, ch)| {
                    let kind = if ch == '*' {
                        FieldKind::Mine
                    } else {
                        FieldKind::Normal
                    };
                    Field::with_kind(kind, col as i64, row as i64, config)
                })
                .collect::<Result<Vec<_>, _>>()?;
            fields.push(cols);
        }
        Ok(Self {
            field_size: size,
            fields,
        })
    }

    /// Place `config.mines` mines using `config.seed`.
    ///
    /// The same configuration always yields the same grid.
    pub fn generate(config: &GameConfig) -> Result<Self, FieldError> {
        let size = config.field_size;
        let mines = mine_indices(config.seed, size * size, config.mines);

        let mut fields = Vec::with_capacity(size);
        for row in 0..size {
            let mut cols = Vec::with_capacity(size);
            for col in 0..size {
                let kind = if mines.binary_search(&(row * size + col)).is_ok() {
                    FieldKind::Mine
                } else {
                    FieldKind::Normal
                };
                cols.push(Field::with_kind(kind, col as i64, row as i64, config)?);
            }
            fields.push(cols);
        }

        info!(
            field_size = size,
            mines = mines.len(),
            seed = config.seed,
            "generated grid"
        );
        Ok(Self {
            field_size: size,
            fields,
        })
    }

    pub fn field_size(&self) -> usize {
        self.field_size
    }

    pub fn rows(&self) -> &[Vec<Field>] {
        &self.fields
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Field> {
        self.fields.get(row).and_then(|cols| cols.get(col))
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut Field> {
        self.fields.get_mut(row).and_then(|cols| cols.get_mut(col))
    }

    /// All fields in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().flatten()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Field> {
        self.fields.iter_mut().flatten()
    }

    /// Whether `(row, col)` addresses a field of this grid.
    pub fn is_valid_coordinate(&self, row: i64, col: i64) -> bool {
        row >= 0
            && (row as usize) < self.fields.len()
            && col >= 0
            && self
                .fields
                .first()
                .is_some_and(|cols| (col as usize) < cols.len())
    }

    /// In-bounds neighbours of `(row, col)`, at most eight.
    pub fn neighbors(&self, row: usize, col: usize) -> ArrayVec<(usize, usize), 8> {
        let mut out = ArrayVec::new();
        for (dr, dc) in NEIGHBOR_OFFSETS {
            let r = row as i64 + dr;
            let c = col as i64 + dc;
            if self.is_valid_coordinate(r, c) {
                out.push((r as usize, c as usize));
            }
        }
        out
    }

    /// Number of mines among the eight neighbours of `(row, col)`.
    ///
    /// The field itself is never counted.
    pub fn calculate_mines(&self, row: usize, col: usize) -> usize {
        self.neighbors(row, col)
            .into_iter()
            .filter(|&(r, c)| self.fields[r][c].is_mine())
            .count()
    }

    pub fn mine_count(&self) -> usize {
        self.iter().filter(|f| f.is_mine()).count()
    }

    pub fn flag_count(&self) -> usize {
        self.iter()
            .filter(|f| f.is_flagged() && !f.is_unveiled())
            .count()
    }

    /// Route a pointer hit to the first field (row-major) whose hitbox
    /// contains `point`, returning its `(row, col)`.
    ///
    /// Hitboxes are closed, so a point on an edge shared by two fields goes
    /// to the upper or left one. At most one field changes per call.
    pub fn check_for_hit(&mut self, point: Position, flagging: bool) -> Option<(usize, usize)> {
        for (row, cols) in self.fields.iter_mut().enumerate() {
            for (col, field) in cols.iter_mut().enumerate() {
                if field.check_for_hit(point, flagging) {
                    return Some((row, col));
                }
            }
        }
        None
    }

    /// Unveil every mine, returning how many were still covered.
    pub fn reveal_mines(&mut self) -> usize {
        let mut revealed = 0;
        for field in self.iter_mut().filter(|f| f.is_mine()) {
            if !field.is_unveiled() {
                field.reveal();
                revealed += 1;
            }
        }
        revealed
    }

    /// Whether every plain field has been unveiled.
    pub fn all_safe_unveiled(&self) -> bool {
        self.iter().all(|f| f.is_mine() || f.is_unveiled())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FieldState, Hitbox};

    fn config(size: usize) -> GameConfig {
        GameConfig::with_field_size(size)
    }

    /// Bind unit-sized hitboxes the way a renderer with one pixel per cell would.
    fn bind_unit_hitboxes(grid: &mut Grid) {
        for field in grid.iter_mut() {
            let lu = Position::new(field.col() as f64, field.row() as f64);
            field.render_on(Hitbox::new(lu, lu.move_x(1.0).move_y(1.0)));
        }
    }

    #[test]
    fn center_mine_scenario() {
        let grid = Grid::from_layout(&config(3), &["...", ".*.", "..."]).unwrap();
        assert_eq!(grid.calculate_mines(0, 0), 1);
        assert_eq!(grid.calculate_mines(2, 2), 1);
        assert_eq!(grid.calculate_mines(1, 1), 0);
        for (r, c) in [(0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1)] {
            assert_eq!(grid.calculate_mines(r, c), 1);
        }
    }

    #[test]
    fn no_mines_counts_zero_everywhere() {
        let grid = Grid::from_layout(&config(4), &["....", "....", "....", "...."]).unwrap();
        for r in 0..4 {
            for c in 0..4 {
                assert_eq!(grid.calculate_mines(r, c), 0);
            }
        }
    }

    #[test]
    fn corner_and_edge_counts_skip_out_of_bounds() {
        let grid = Grid::from_layout(&config(4), &["**..", "*...", "...*", "..**"]).unwrap();
        assert_eq!(grid.calculate_mines(0, 0), 2);
        assert_eq!(grid.calculate_mines(1, 1), 3);
        assert_eq!(grid.calculate_mines(3, 3), 2);
        assert_eq!(grid.calculate_mines(0, 3), 0);
        assert_eq!(grid.calculate_mines(3, 0), 0);
        assert_eq!(grid.calculate_mines(2, 2), 3);
    }

    #[test]
    fn fully_surrounded_cell_counts_eight() {
        let grid = Grid::from_layout(&config(3), &["***", "*.*", "***"]).unwrap();
        assert_eq!(grid.calculate_mines(1, 1), 8);
        assert_eq!(grid.mine_count(), 8);
    }

    #[test]
    fn neighbor_lists_respect_bounds() {
        let grid = Grid::from_layout(&config(3), &["...", "...", "..."]).unwrap();
        assert_eq!(grid.neighbors(0, 0).len(), 3);
        assert_eq!(grid.neighbors(0, 1).len(), 5);
        assert_eq!(grid.neighbors(1, 1).len(), 8);
    }

    #[test]
    fn valid_coordinates() {
        let grid = Grid::from_layout(&config(2), &["..", ".."]).unwrap();
        assert!(grid.is_valid_coordinate(0, 0));
        assert!(grid.is_valid_coordinate(1, 1));
        assert!(!grid.is_valid_coordinate(-1, 0));
        assert!(!grid.is_valid_coordinate(0, -1));
        assert!(!grid.is_valid_coordinate(2, 0));
        assert!(!grid.is_valid_coordinate(0, 2));
    }

    #[test]
    fn layout_shape_is_checked() {
        assert_eq!(
            Grid::from_layout(&config(2), &[".."]),
            Err(FieldError::LayoutMismatch {
                row: None,
                expected: 2,
                found: 1
            })
        );
        assert_eq!(
            Grid::from_layout(&config(2), &["..", "..."]),
            Err(FieldError::LayoutMismatch {
                row: Some(1),
                expected: 2,
                found: 3
            })
        );
    }

    #[test]
    fn from_fields_checks_positions() {
        let cfg = config(2);
        let swapped = vec![
            vec![
                Field::new(1, 0, &cfg).unwrap(),
                Field::new(0, 0, &cfg).unwrap(),
            ],
            vec![
                Field::new(0, 1, &cfg).unwrap(),
                Field::mine(1, 1, &cfg).unwrap(),
            ],
        ];
        assert!(matches!(
            Grid::from_fields(&cfg, swapped),
            Err(FieldError::InvalidFieldPosition { .. })
        ));

        let ordered = vec![
            vec![
                Field::new(0, 0, &cfg).unwrap(),
                Field::new(1, 0, &cfg).unwrap(),
            ],
            vec![
                Field::new(0, 1, &cfg).unwrap(),
                Field::mine(1, 1, &cfg).unwrap(),
            ],
        ];
        let grid = Grid::from_fields(&cfg, ordered).unwrap();
        assert_eq!(grid.calculate_mines(0, 0), 1);
    }

    #[test]
    fn generate_places_exact_mine_count() {
        let cfg = GameConfig {
            field_size: 9,
            mines: 10,
            seed: 99,
            ..GameConfig::default()
        };
        let grid = Grid::generate(&cfg).unwrap();
        assert_eq!(grid.mine_count(), 10);
        assert_eq!(grid, Grid::generate(&cfg).unwrap());
        for (r, cols) in grid.rows().iter().enumerate() {
            for (c, field) in cols.iter().enumerate() {
                assert_eq!((field.row(), field.col()), (r, c));
                assert_eq!(field.state(), FieldState::Hidden);
            }
        }
    }

    #[test]
    fn hit_dispatch_targets_one_field() {
        let mut grid = Grid::from_layout(&config(3), &["...", ".*.", "..."]).unwrap();
        bind_unit_hitboxes(&mut grid);

        assert_eq!(grid.check_for_hit(Position::new(2.5, 0.5), false), Some((0, 2)));
        assert_eq!(grid.get(0, 2).unwrap().state(), FieldState::Unveiled);
        assert_eq!(grid.iter().filter(|f| f.is_unveiled()).count(), 1);
    }

    #[test]
    fn hit_dispatch_shared_edge_goes_to_upper_left() {
        let mut grid = Grid::from_layout(&config(3), &["...", "...", "..."]).unwrap();
        bind_unit_hitboxes(&mut grid);

        // (1.0, 1.0) is the shared corner of four fields.
        assert_eq!(grid.check_for_hit(Position::new(1.0, 1.0), true), Some((0, 0)));
        assert_eq!(grid.flag_count(), 1);
    }

    #[test]
    fn hit_dispatch_miss() {
        let mut grid = Grid::from_layout(&config(2), &["..", ".*"]).unwrap();
        bind_unit_hitboxes(&mut grid);
        assert_eq!(grid.check_for_hit(Position::new(5.0, 5.0), false), None);
        assert!(grid.iter().all(|f| f.state() == FieldState::Hidden));
    }

    #[test]
    fn reveal_mines_and_win_check() {
        let mut grid = Grid::from_layout(&config(2), &["*.", ".*"]).unwrap();
        assert!(!grid.all_safe_unveiled());
        assert_eq!(grid.reveal_mines(), 2);
        assert_eq!(grid.reveal_mines(), 0);
        assert_eq!(grid.get(0, 0).unwrap().state(), FieldState::Detonated);
        assert!(!grid.all_safe_unveiled());

        grid.get_mut(0, 1).unwrap().reveal();
        grid.get_mut(1, 0).unwrap().reveal();
        assert!(grid.all_safe_unveiled());
    }
}
