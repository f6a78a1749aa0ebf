use crate::direction::Direction;
use crate::error::{Result, SimError};

/// Produces the directional requests for one simulation step.
/// Key-to-direction mapping lives outside the core; by the time requests
/// reach the engine they are already abstract directions.
pub trait InputSource {
    fn requests(&mut self, step: u64) -> Vec<Direction>;
}

/// Step-indexed direction script, e.g. "0:right,12:up,40:left"
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    entries: Vec<(u64, Direction)>,
}

impl ScriptedInput {
    pub fn parse(script: &str) -> Result<Self> {
        let mut entries = Vec::new();
        for part in script.split(',') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            let (step_s, dir_s) = part.split_once(':').ok_or_else(|| {
                SimError::InvalidLine(format!("expected step:direction, got '{}'", part))
            })?;
            let step = step_s
                .parse::<u64>()
                .map_err(|_| SimError::InvalidLine(format!("bad step number '{}'", step_s)))?;
            entries.push((step, dir_s.parse()?));
        }
        entries.sort_by_key(|&(step, _)| step);
        Ok(Self { entries })
    }
}

impl InputSource for ScriptedInput {
    fn requests(&mut self, step: u64) -> Vec<Direction> {
        self.entries
            .iter()
            .filter(|&&(s, _)| s == step)
            .map(|&(_, d)| d)
            .collect()
    }
}

/// Seeded random walker for demo runs: every `interval` steps it asks
/// for a fresh random direction
pub struct RandomInput {
    rng: fastrand::Rng,
    interval: u64,
}

impl RandomInput {
    pub fn new(rng: fastrand::Rng, interval: u64) -> Self {
        Self {
            rng,
            interval: interval.max(1),
        }
    }
}

impl InputSource for RandomInput {
    fn requests(&mut self, step: u64) -> Vec<Direction> {
        if step % self.interval == 0 {
            vec![Direction::ALL[self.rng.usize(..4)]]
        } else {
            Vec::new()
        }
    }
}
