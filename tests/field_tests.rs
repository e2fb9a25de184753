use battleship_server::{Cell, Field, GameError, ShotResult, FIELD_SIZE};

fn matrix(cells: &[(usize, usize)]) -> Vec<Vec<u8>> {
    let mut rows = vec![vec![0u8; FIELD_SIZE]; FIELD_SIZE];
    for &(x, y) in cells {
        rows[x][y] = 1;
    }
    rows
}

fn cell(x: usize, y: usize) -> Cell {
    Cell::new(x, y).unwrap()
}

#[test]
fn test_single_cell_ship_first_shot_kills() {
    let mut field = Field::from_matrix(&matrix(&[(1, 0)])).unwrap();
    assert_eq!(field.ships().len(), 1);
    assert_eq!(field.resolve_shot(cell(1, 0)), ShotResult::Kill);
    assert!(field.all_sunk());
}

#[test]
fn test_three_cell_run_damage_damage_kill() {
    let mut field = Field::from_matrix(&matrix(&[(0, 7), (0, 8), (0, 9)])).unwrap();
    assert_eq!(field.ships().len(), 1);
    assert_eq!(field.resolve_shot(cell(0, 7)), ShotResult::Damage);
    assert_eq!(field.resolve_shot(cell(0, 8)), ShotResult::Damage);
    assert_eq!(field.resolve_shot(cell(0, 9)), ShotResult::Kill);
}

#[test]
fn test_miss_is_idempotent() {
    let mut field = Field::from_matrix(&matrix(&[(5, 5)])).unwrap();
    assert_eq!(field.resolve_shot(cell(0, 0)), ShotResult::Miss);
    assert_eq!(field.resolve_shot(cell(0, 0)), ShotResult::Miss);
}

#[test]
fn test_repeat_hit_reports_current_ship_state() {
    let mut field = Field::from_matrix(&matrix(&[(3, 3), (3, 4)])).unwrap();
    assert_eq!(field.resolve_shot(cell(3, 3)), ShotResult::Damage);
    // dead cell of a still-floating ship repeats Damage
    assert_eq!(field.resolve_shot(cell(3, 3)), ShotResult::Damage);
    assert_eq!(field.resolve_shot(cell(3, 4)), ShotResult::Kill);
    // once the ship is sunk every member cell reports Kill
    assert_eq!(field.resolve_shot(cell(3, 3)), ShotResult::Kill);
    assert_eq!(field.resolve_shot(cell(3, 4)), ShotResult::Kill);
}

#[test]
fn test_axis_order_is_not_transposed() {
    // occupied at (x=2, y=5) only
    let mut field = Field::from_matrix(&matrix(&[(2, 5)])).unwrap();
    assert_eq!(field.resolve_shot(cell(5, 2)), ShotResult::Miss);
    assert_eq!(field.resolve_shot(cell(2, 5)), ShotResult::Kill);
}

#[test]
fn test_diagonal_contact_keeps_ships_apart() {
    let field = Field::from_matrix(&matrix(&[(0, 0), (1, 1)])).unwrap();
    assert_eq!(field.ships().len(), 2);

    let field = Field::from_matrix(&matrix(&[(0, 0), (0, 1)])).unwrap();
    assert_eq!(field.ships().len(), 1);
}

#[test]
fn test_l_shape_is_one_ship() {
    let mut field = Field::from_matrix(&matrix(&[(4, 4), (5, 4), (5, 5)])).unwrap();
    assert_eq!(field.ships().len(), 1);
    assert_eq!(field.ships()[0].size(), 3);
    assert_eq!(field.resolve_shot(cell(5, 5)), ShotResult::Damage);
    assert_eq!(field.resolve_shot(cell(4, 4)), ShotResult::Damage);
    assert_eq!(field.resolve_shot(cell(5, 4)), ShotResult::Kill);
}

#[test]
fn test_ships_partition_occupied_cells() {
    let occupied = [
        (0, 0),
        (0, 1),
        (0, 2), // 3-run
        (2, 0),
        (3, 0), // 2-run
        (9, 9), // lone cell
        (5, 5),
        (5, 6),
        (6, 5), // L
    ];
    let field = Field::from_matrix(&matrix(&occupied)).unwrap();
    assert_eq!(field.ships().len(), 4);

    let total: usize = field.ships().iter().map(|s| s.size()).sum();
    assert_eq!(total, occupied.len());

    // each occupied cell belongs to exactly one ship
    for &(x, y) in &occupied {
        let owners = field
            .ships()
            .iter()
            .filter(|s| s.contains(cell(x, y)))
            .count();
        assert_eq!(owners, 1, "cell ({}, {}) has {} owners", x, y, owners);
    }
}

#[test]
fn test_empty_field_has_no_ships() {
    let field = Field::from_matrix(&matrix(&[])).unwrap();
    assert!(field.ships().is_empty());
    assert!(field.all_sunk());
    let summary = field.summary();
    assert_eq!(summary.ships, 0);
    assert_eq!(summary.cells, 0);
}

#[test]
fn test_summary_counts_ships_by_size() {
    let field = Field::from_matrix(&matrix(&[
        (0, 0),
        (9, 0),
        (5, 5),
        (5, 6),
        (5, 7),
    ]))
    .unwrap();
    let summary = field.summary();
    assert_eq!(summary.ships, 3);
    assert_eq!(summary.cells, 5);
    assert_eq!(summary.by_size.get(&1), Some(&2));
    assert_eq!(summary.by_size.get(&3), Some(&1));
    assert_eq!(summary.by_size.get(&2), None);
}

#[test]
fn test_malformed_matrices_are_rejected() {
    // wrong row count
    let short = vec![vec![0u8; FIELD_SIZE]; FIELD_SIZE - 1];
    assert_eq!(Field::from_matrix(&short).unwrap_err(), GameError::InvalidField);

    // ragged row
    let mut ragged = matrix(&[]);
    ragged[4].pop();
    assert_eq!(Field::from_matrix(&ragged).unwrap_err(), GameError::InvalidField);

    // cell value other than 0/1
    let mut bad_value = matrix(&[]);
    bad_value[0][0] = 2;
    assert_eq!(
        Field::from_matrix(&bad_value).unwrap_err(),
        GameError::InvalidField
    );
}

#[test]
fn test_cell_bounds() {
    assert!(Cell::new(9, 9).is_ok());
    assert_eq!(
        Cell::new(10, 0).unwrap_err(),
        GameError::InvalidCoordinate { x: 10, y: 0 }
    );
    assert_eq!(
        Cell::new(0, 10).unwrap_err(),
        GameError::InvalidCoordinate { x: 0, y: 10 }
    );
}
