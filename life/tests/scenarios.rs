// scenarios.rs - Whole-grid transitions through the public API

use life::{CellKind, RuleSet, Simulation, count_neighbors, iterate};

fn step_once(tags: Vec<Vec<usize>>) -> Vec<Vec<usize>> {
    let mut sim = Simulation::new(tags).unwrap();
    sim.step();
    sim.tags()
}

fn live_cells(tags: &[Vec<usize>]) -> Vec<(usize, usize)> {
    let mut cells = Vec::new();
    for (r, row) in tags.iter().enumerate() {
        for (c, &tag) in row.iter().enumerate() {
            if tag != 0 {
                cells.push((r, c));
            }
        }
    }
    cells
}

#[test]
fn under_population() {
    let next = step_once(vec![
        vec![0, 0, 0],
        vec![0, 1, 0],
        vec![0, 0, 0],
    ]);
    assert_eq!(next, vec![vec![0, 0, 0], vec![0, 0, 0], vec![0, 0, 0]]);
}

#[test]
fn two_or_three_neighbors_live_on() {
    let next = step_once(vec![
        vec![0, 0, 0, 0, 0],
        vec![0, 1, 1, 1, 0],
        vec![0, 0, 0, 0, 0],
    ]);
    assert_eq!(
        next,
        vec![
            vec![0, 0, 1, 0, 0],
            vec![0, 0, 1, 0, 0],
            vec![0, 0, 1, 0, 0],
        ]
    );
}

#[test]
fn over_population() {
    let next = step_once(vec![
        vec![0, 0, 0, 0, 0],
        vec![0, 0, 1, 0, 0],
        vec![0, 1, 1, 1, 0],
        vec![0, 0, 1, 0, 0],
        vec![0, 0, 0, 0, 0],
    ]);
    assert_eq!(
        next,
        vec![
            vec![0, 0, 0, 0, 0],
            vec![0, 1, 1, 1, 0],
            vec![0, 1, 0, 1, 0],
            vec![0, 1, 1, 1, 0],
            vec![0, 0, 0, 0, 0],
        ]
    );
}

#[test]
fn over_population_across_the_wrap() {
    let mut tags = vec![vec![0; 5]; 5];
    for (r, c) in [(0, 0), (0, 3), (0, 4), (1, 4), (4, 4)] {
        tags[r][c] = 1;
    }
    let next = step_once(tags);
    assert_eq!(
        live_cells(&next),
        vec![(0, 0), (0, 3), (1, 0), (1, 3), (1, 4), (4, 0), (4, 3), (4, 4)]
    );
}

#[test]
fn reproduction() {
    let next = step_once(vec![
        vec![0, 0, 0, 0, 0],
        vec![0, 0, 1, 0, 0],
        vec![0, 1, 0, 1, 0],
        vec![0, 0, 0, 0, 0],
    ]);
    assert_eq!(
        next,
        vec![
            vec![0, 0, 0, 0, 0],
            vec![0, 0, 1, 0, 0],
            vec![0, 0, 1, 0, 0],
            vec![0, 0, 0, 0, 0],
        ]
    );
}

#[test]
fn corner_counts_opposite_edges() {
    let grid = life::Grid::from_tags(vec![
        vec![1, 0, 0, 1],
        vec![0, 0, 0, 0],
        vec![1, 0, 0, 1],
    ])
    .unwrap();
    assert_eq!(count_neighbors(&grid, 0, 0), 3);
}

#[test]
fn single_row_births_from_aliased_neighbor() {
    assert_eq!(step_once(vec![vec![1, 0, 0, 0]]), vec![vec![1, 1, 0, 1]]);
}

#[test]
fn hyper_reproductive_births_at_two() {
    let next = step_once(vec![
        vec![0, 0, 0, 0, 0],
        vec![0, 3, 0, 3, 0],
        vec![0, 0, 0, 0, 0],
        vec![0, 0, 0, 0, 0],
    ]);
    assert_eq!(
        next,
        vec![
            vec![0, 0, 3, 0, 0],
            vec![0, 0, 3, 0, 0],
            vec![0, 0, 3, 0, 0],
            vec![0, 0, 0, 0, 0],
        ]
    );
}

#[test]
fn standard_birth_takes_priority_over_hyper_reproductive() {
    let next = step_once(vec![
        vec![1, 1, 3, 0, 0],
        vec![0, 0, 0, 0, 0],
        vec![0, 0, 0, 0, 0],
        vec![0, 0, 0, 0, 0],
    ]);
    assert_eq!(next[1][1], 1);
}

#[test]
fn immortal_never_dies() {
    let mut sim = Simulation::new(vec![
        vec![0, 0, 0, 0],
        vec![0, 2, 0, 0],
        vec![0, 0, 0, 0],
    ])
    .unwrap();
    sim.run(5);
    assert_eq!(sim.grid().get(1, 1), CellKind::Immortal);
    assert_eq!(sim.population(), 1);
}

#[test]
fn dimensions_and_results_are_stable() {
    let grid = life::random_grid(7, 9, 42, CellKind::Standard).unwrap();
    let rules = RuleSet::default();
    let once = iterate(&grid, &rules);
    assert_eq!((once.rows(), once.cols()), (7, 9));
    assert_eq!(once, iterate(&grid, &rules));
}

#[test]
fn rejects_malformed_grids() {
    assert!(Simulation::new(vec![]).is_err());
    assert!(Simulation::new(vec![vec![0, 1], vec![1]]).is_err());
    assert!(Simulation::new(vec![vec![7]]).is_err());
}
