mod common;

use common::{alive_cells, ScriptedRng, SimulationBuilder};

#[test]
fn test_revival_rate_matches_probability() {
    let trials = 200;
    let mut sim = SimulationBuilder::new()
        .with_size(100, 100)
        .with_revival(0.003)
        .with_seed(2024)
        .build();

    let mut revived = 0;
    for _ in 0..trials {
        let report = sim.step();
        revived += report.revived;
        sim.clear_grid();
    }

    // N * p * trials = 10_000 * 0.003 * 200 = 6000. Cells forced alive by an
    // earlier cross-revival skip their own roll, which trims about 2p.
    assert!(
        (5600..=6400).contains(&revived),
        "revived {revived} independent cells over {trials} trials"
    );
}

#[test]
fn test_cross_revival_in_damage_zone() {
    // All cells dead; draws happen column by column, so cell (x, y) of a
    // 40-high grid is draw x * 40 + y.
    let rng = ScriptedRng::hitting(&[2 * 40 + 2]);
    let mut sim = SimulationBuilder::new()
        .with_revival(0.003)
        .with_max_damage(6)
        .build_with_rng(rng);

    let report = sim.step();
    assert_eq!(report.revived, 1);
    assert_eq!(report.cross_revived, 4);
    assert_eq!(
        alive_cells(&sim),
        vec![(1, 2), (2, 1), (2, 2), (2, 3), (3, 2)]
    );
    for (x, y) in [(2, 2), (1, 2), (3, 2), (2, 1), (2, 3)] {
        assert_eq!(sim.get_cell(x, y).unwrap().damage_counter, 6, "({x}, {y})");
    }
}

#[test]
fn test_cross_revival_across_zone_boundary() {
    let rng = ScriptedRng::hitting(&[19 * 40 + 5]);
    let mut sim = SimulationBuilder::new()
        .with_revival(0.003)
        .build_with_rng(rng);

    sim.step();
    for (x, y) in [(19, 5), (18, 5), (19, 4), (19, 6)] {
        let cell = sim.get_cell(x, y).unwrap();
        assert!(cell.alive);
        assert_eq!(cell.damage_counter, 5, "({x}, {y})");
    }
    let east = sim.get_cell(20, 5).unwrap();
    assert!(east.alive);
    assert_eq!(east.zone, 1);
    assert_eq!(east.damage_counter, 0);
}

#[test]
fn test_cross_revival_clipped_at_corner() {
    let rng = ScriptedRng::hitting(&[39 * 40 + 39]);
    let mut sim = SimulationBuilder::new()
        .with_revival(0.003)
        .build_with_rng(rng);

    let report = sim.step();
    assert_eq!(report.cross_revived, 2);
    assert_eq!(alive_cells(&sim), vec![(38, 39), (39, 38), (39, 39)]);
}

#[test]
fn test_cross_revived_cell_skips_its_own_roll() {
    // Draw 0 revives (0, 0) and forces (0, 1) alive. The scan then skips
    // (0, 1), so draw 1 lands on (0, 2) rather than (0, 1).
    let rng = ScriptedRng::hitting(&[0, 1]);
    let mut sim = SimulationBuilder::new()
        .with_revival(0.003)
        .build_with_rng(rng);

    let report = sim.step();
    assert_eq!(report.revived, 2);
    assert_eq!(report.cross_revived, 4);
    assert_eq!(
        alive_cells(&sim),
        vec![(0, 0), (0, 1), (0, 2), (0, 3), (1, 0), (1, 2)]
    );
}

#[test]
fn test_revival_overrides_rule_death() {
    // Lone standard-zone cell dies by rule, then its roll revives it.
    let rng = ScriptedRng::hitting(&[30 * 40 + 5]);
    let mut sim = SimulationBuilder::new()
        .with_revival(0.003)
        .with_alive(30, 5)
        .build_with_rng(rng);

    let report = sim.step();
    assert!(sim.get_cell(30, 5).unwrap().alive);
    assert_eq!(report.revived, 1);
}

#[test]
fn test_certain_revival_fills_grid() {
    let mut sim = SimulationBuilder::new()
        .with_size(5, 5)
        .with_revival(1.0)
        .build();
    sim.step();
    assert_eq!(sim.alive_count(), 25);
}
