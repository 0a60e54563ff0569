use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;
use zonelife_lib::model::config::AppConfig;
use zonelife_lib::model::Simulation;

#[allow(dead_code)]
pub struct SimulationBuilder {
    config: AppConfig,
    alive: Vec<(i32, i32)>,
}

#[allow(dead_code)]
impl SimulationBuilder {
    /// 40x40 grid, revival off, damage counter 5, seed 0, unbounded.
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.grid.width = 40;
        config.grid.height = 40;
        config.rules.revival_probability = 0.0;
        config.rules.max_damage_counter = 5;
        config.run.seed = Some(0);
        config.run.tick_interval_ms = 10;
        Self {
            config,
            alive: Vec::new(),
        }
    }

    pub fn with_size(mut self, width: u16, height: u16) -> Self {
        self.config.grid.width = width;
        self.config.grid.height = height;
        self
    }

    pub fn with_revival(mut self, probability: f64) -> Self {
        self.config.rules.revival_probability = probability;
        self
    }

    pub fn with_max_damage(mut self, max: i32) -> Self {
        self.config.rules.max_damage_counter = max;
        self
    }

    pub fn with_limit(mut self, limit: u64) -> Self {
        self.config.run.generation_limit = Some(limit);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.run.seed = Some(seed);
        self
    }

    pub fn with_alive(mut self, x: i32, y: i32) -> Self {
        self.alive.push((x, y));
        self
    }

    pub fn with_cells(mut self, cells: &[(i32, i32)]) -> Self {
        self.alive.extend_from_slice(cells);
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn build(self) -> Simulation {
        let seed = self.config.run.seed.unwrap_or(0);
        self.build_with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn build_with_rng<R: rand::Rng>(self, rng: R) -> Simulation<R> {
        let mut sim = Simulation::with_rng(self.config, rng)
            .expect("Failed to create simulation in test builder");
        for (x, y) in self.alive {
            sim.set_alive(x, y).expect("seed cell out of bounds");
        }
        sim
    }
}

/// Random source that succeeds on chosen draw indices only.
///
/// Draw `k` yields `0` (maps to `0.0`, below any positive probability) when
/// `k` is in `hits`, and `u64::MAX` (maps to just under `1.0`) otherwise.
#[allow(dead_code)]
pub struct ScriptedRng {
    hits: HashSet<usize>,
    draws: usize,
}

#[allow(dead_code)]
impl ScriptedRng {
    pub fn hitting(hits: &[usize]) -> Self {
        Self {
            hits: hits.iter().copied().collect(),
            draws: 0,
        }
    }

    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        let hit = self.hits.contains(&self.draws);
        self.draws += 1;
        if hit {
            0
        } else {
            u64::MAX
        }
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

/// Alive coordinates of the whole grid, column by column.
#[allow(dead_code)]
pub fn alive_cells<R: rand::Rng>(sim: &Simulation<R>) -> Vec<(i32, i32)> {
    let mut cells = Vec::new();
    for x in 0..sim.width() as i32 {
        for y in 0..sim.height() as i32 {
            if sim.get_cell(x, y).map(|c| c.alive).unwrap_or(false) {
                cells.push((x, y));
            }
        }
    }
    cells
}
