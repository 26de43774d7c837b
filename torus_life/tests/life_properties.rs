use torus_life::{
    Grid, History, LifeError, RandomConfig, Randomizer, Verdict, cell_status, create_grid,
    is_settled, pattern_by_name, randomize_cell_status, step_n, update_grid,
};

fn grid_with(width: usize, height: usize, live: &[(usize, usize)]) -> Grid {
    let mut grid = create_grid(width, height).expect("grid");
    for &(col, row) in live {
        grid.set(col, row, true).expect("in range");
    }
    grid
}

#[test]
fn stepping_is_deterministic() {
    let mut randomizer = Randomizer::with_seed(11);
    let grid = randomizer.randomize(40, 25).expect("grid");
    assert_eq!(update_grid(&grid), update_grid(&grid));
}

#[test]
fn dimensions_are_preserved() {
    for (width, height) in [(1, 1), (2, 7), (3, 3), (11, 11), (50, 3)] {
        let grid = create_grid(width, height).expect("grid");
        assert_eq!(update_grid(&grid).dimensions(), (width, height));
        assert_eq!(randomize_cell_status(&grid).dimensions(), (width, height));
    }
}

#[test]
fn corner_sees_opposite_corner() {
    let grid = grid_with(3, 3, &[(0, 0)]);
    assert_eq!(torus_life::live_neighbors(&grid, 2, 2), Ok(1));
    assert_eq!(cell_status(&grid, 2, 2), Ok(false));
    // On 3x3 every other cell is a wrapped neighbor of (2,2).
    let grid = grid_with(3, 3, &[(0, 0), (0, 2), (2, 0)]);
    assert_eq!(cell_status(&grid, 2, 2), Ok(true));
}

#[test]
fn all_four_corners_form_a_wrapped_block() {
    // On a torus the four corners are mutually adjacent: a still life.
    let grid = grid_with(6, 6, &[(0, 0), (5, 0), (0, 5), (5, 5)]);
    assert_eq!(update_grid(&grid), grid);
}

#[test]
fn lone_cell_dies_of_underpopulation() {
    for (width, height) in [(3, 3), (4, 9), (20, 20)] {
        let grid = grid_with(width, height, &[(1, 1)]);
        assert_eq!(cell_status(&grid, 1, 1), Ok(false));
        assert_eq!(update_grid(&grid).population(), 0);
    }
}

#[test]
fn l_tromino_gives_birth() {
    let grid = grid_with(3, 3, &[(0, 0), (1, 0), (0, 1)]);
    assert_eq!(cell_status(&grid, 1, 1), Ok(true));
    assert!(update_grid(&grid).get(1, 1).expect("in range"));
}

#[test]
fn block_is_a_fixed_point() {
    let grid = grid_with(4, 4, &[(1, 1), (2, 1), (1, 2), (2, 2)]);
    let next = update_grid(&grid);
    assert_eq!(next, grid);
    assert_eq!(is_settled(&grid, &next), Ok(true));
}

#[test]
fn blinker_has_period_two() {
    let horizontal = grid_with(5, 5, &[(1, 2), (2, 2), (3, 2)]);
    let vertical = grid_with(5, 5, &[(2, 1), (2, 2), (2, 3)]);
    let once = update_grid(&horizontal);
    assert_eq!(once, vertical);
    assert_eq!(update_grid(&once), horizontal);
    assert_eq!(is_settled(&horizontal, &once), Ok(false));
}

#[test]
fn glider_crosses_the_seam() {
    let glider = pattern_by_name("glider").expect("glider");
    let blank = create_grid(8, 8).expect("grid");
    let start = glider.stamp(&blank, (6, 6));
    assert_eq!(step_n(&start, 4), glider.stamp(&blank, (7, 7)));
    // 8 diagonal moves of one cell each bring it home on an 8x8 torus.
    assert_eq!(step_n(&start, 32), start);
}

#[test]
fn settled_check_rejects_resized_grid() {
    let before = create_grid(5, 5).expect("grid");
    let after = before.resized(6, 5).expect("resize");
    assert!(matches!(
        is_settled(&before, &after),
        Err(LifeError::ShapeMismatch { expected: (5, 5), found: (6, 5) })
    ));
}

#[test]
fn driver_loop_halts_on_still_life() {
    // A block plus a lone cell that dies on the first step.
    let mut grid = grid_with(8, 8, &[(1, 1), (2, 1), (1, 2), (2, 2), (6, 5)]);
    let mut history = History::default();
    let mut steps = 0;
    loop {
        let next = update_grid(&grid);
        if is_settled(&grid, &next).expect("same shape") {
            break;
        }
        assert_eq!(history.observe(&next), Verdict::Fresh);
        grid = next;
        steps += 1;
        assert!(steps < 10, "should settle quickly");
    }
    assert_eq!(steps, 1);
    assert_eq!(grid.population(), 4);
}

#[test]
fn random_fraction_is_close_to_probability() {
    let grid = create_grid(200, 200).expect("grid");
    let total = (grid.width() * grid.height()) as f64;
    let first = randomize_cell_status(&grid);
    let fraction = first.population() as f64 / total;
    assert!((fraction - 0.3).abs() < 0.02, "fraction {fraction}");

    let second = randomize_cell_status(&grid);
    assert_ne!(first, second);
}

#[test]
fn seeded_randomizer_honours_configured_probability() {
    let config = RandomConfig { live_probability: 0.6, seed: Some(2024) };
    let mut randomizer = Randomizer::new(&config).expect("randomizer");
    let mut live = 0;
    let rounds = 20;
    for _ in 0..rounds {
        live += randomizer.randomize(50, 50).expect("grid").population();
    }
    let fraction = live as f64 / (rounds * 2500) as f64;
    assert!((fraction - 0.6).abs() < 0.02, "fraction {fraction}");
}
