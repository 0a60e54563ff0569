mod common;

use common::{alive_cells, SimulationBuilder};

#[test]
fn test_block_is_still_life_in_both_standard_zones() {
    // 40x40: StandardEast is x >= 20, y < 20; StandardWest is x < 20, y >= 20.
    for (ox, oy) in [(28, 8), (8, 28)] {
        let block = [(ox, oy), (ox + 1, oy), (ox, oy + 1), (ox + 1, oy + 1)];
        let mut sim = SimulationBuilder::new().with_cells(&block).build();
        let initial = alive_cells(&sim);

        for tick in 0..50 {
            let report = sim.step();
            assert_eq!(report.births, 0, "tick {tick}");
            assert_eq!(report.deaths, 0, "tick {tick}");
        }
        assert_eq!(alive_cells(&sim), initial);
    }
}

#[test]
fn test_blinker_period_two() {
    let horizontal = [(29, 10), (30, 10), (31, 10)];
    let vertical = vec![(30, 9), (30, 10), (30, 11)];
    let mut sim = SimulationBuilder::new().with_cells(&horizontal).build();

    sim.step();
    assert_eq!(alive_cells(&sim), vertical);
    sim.step();
    assert_eq!(alive_cells(&sim), horizontal.to_vec());
}

#[test]
fn test_standard_birth_needs_exactly_three() {
    // Dead (30, 10) with four live neighbors stays dead.
    let mut sim = SimulationBuilder::new()
        .with_cells(&[(29, 9), (31, 9), (29, 11), (31, 11)])
        .build();
    sim.step();
    assert!(!sim.get_cell(30, 10).unwrap().alive);

    // With three it is born.
    let mut sim = SimulationBuilder::new()
        .with_cells(&[(29, 9), (31, 9), (29, 11)])
        .build();
    sim.step();
    assert!(sim.get_cell(30, 10).unwrap().alive);
}

#[test]
fn test_lone_cell_dies() {
    let mut sim = SimulationBuilder::new().with_alive(30, 5).build();
    let report = sim.step();
    assert_eq!(report.deaths, 1);
    assert_eq!(sim.alive_count(), 0);
}
