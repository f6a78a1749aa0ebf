use crate::board::{Board, CollectibleKind, ConsumptionEvent};
use crate::cli::Args;
use crate::direction::Direction;
use crate::error::Result;
use crate::player::Player;
use crate::power::{PowerConfig, PowerTimer};
use crate::simulation::hooks::{EnemyRegistry, PresentationSink};
use crate::simulation::input::InputSource;
use crate::simulation::probe;
use colored::Colorize;
use std::time::Instant;

/// Presentation state emitted once per step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepState {
    pub facing: Option<Direction>,
    pub visibly_powered: bool,
    pub consumed: Option<ConsumptionEvent>,
}

/// Orchestrates one entity's simulation: motion, collectibles, power mode.
/// Collaborators are injected per call, never looked up through globals.
pub struct SimulationEngine {
    player: Player,
    power: PowerTimer,
    step_count: u64,
}

impl SimulationEngine {
    /// Fails fast if the start cell has no node under it
    pub fn new(board: &Board, start: (i32, i32), speed: f32, power: PowerConfig) -> Result<Self> {
        Ok(Self {
            player: Player::new(board, start, speed)?,
            power: PowerTimer::new(power),
            step_count: 0,
        })
    }

    /// One simulation step, in fixed order: apply direction requests,
    /// advance motion, resolve collectible consumption, advance the power
    /// timer, emit presentation state. A super pellet consumed this step
    /// powers the timer and frightens every enemy before the timer update,
    /// so its effect lands within the same step.
    pub fn step<E, S>(
        &mut self,
        board: &mut Board,
        enemies: &mut E,
        sink: &mut S,
        requests: &[Direction],
        dt: f32,
    ) -> StepState
    where
        E: EnemyRegistry,
        S: PresentationSink,
    {
        for &d in requests {
            self.player.request_direction(board, d);
        }

        self.player.advance(board, dt);

        let consumed = probe::consume_at(board, self.player.position());
        if let Some(ev) = consumed {
            if ev.kind == CollectibleKind::SuperPellet {
                self.power.activate();
                enemies.for_each_enemy(&mut |enemy| enemy.start_frightened());
            }
        }

        self.power.advance(dt);

        let state = StepState {
            facing: self.player.direction(),
            visibly_powered: self.power.is_visibly_powered(),
            consumed,
        };
        sink.present(state.facing, state.visibly_powered);
        self.step_count += 1;
        state
    }

    /// Drive the whole demo run from an input source, logging consumption
    /// events as they happen
    pub fn run<E, S>(
        &mut self,
        board: &mut Board,
        enemies: &mut E,
        sink: &mut S,
        input: &mut dyn InputSource,
        args: &Args,
    ) -> std::time::Duration
    where
        E: EnemyRegistry,
        S: PresentationSink,
    {
        let sim_start = Instant::now();

        for step in 0..args.steps {
            let requests = input.requests(step);
            let state = self.step(board, enemies, sink, &requests, args.dt);
            if let Some(ev) = state.consumed {
                self.log_consumption(args, &ev);
            }
        }

        sim_start.elapsed()
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn power(&self) -> &PowerTimer {
        &self.power
    }

    /// Log a consumption event
    #[inline]
    fn log_consumption(&self, args: &Args, ev: &ConsumptionEvent) {
        if args.suppress_events {
            return;
        }
        let label = match ev.kind {
            CollectibleKind::Pellet => "pellet".yellow(),
            CollectibleKind::SuperPellet => "SUPER pellet".bright_yellow().bold(),
        };
        println!(
            "{} {} {} {}",
            "✦".green(),
            label,
            "eaten at".green(),
            format!("({}, {})", ev.cell.0, ev.cell.1).cyan()
        );
    }

    /// Print simulation summary
    pub fn print_summary(
        &self,
        board: &Board,
        args: &Args,
        simulation_time: std::time::Duration,
    ) {
        let at = self
            .player
            .current_node()
            .or(self.player.target_node())
            .map(|id| board.node_name(id).to_string())
            .unwrap_or_else(|| "?".to_string());

        println!(
            "\n{}\n{} {:.3} ms {} {} {} {} {} {}",
            "===".bright_blue().bold(),
            "⏱️  Simulation Latency:".green().bold(),
            simulation_time.as_secs_f64() * 1000.0,
            format!("(dt={})", args.dt).dimmed(),
            "|".dimmed(),
            format!("steps={}", self.step_count).cyan(),
            format!("score={}", board.score()).bright_yellow(),
            format!("remaining={}", board.remaining_collectibles()).cyan(),
            format!("near={}", at).cyan(),
        );
    }
}
