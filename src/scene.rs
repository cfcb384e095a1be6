//! Scene lifecycle runner
//!
//! Owns the current [`World`] plus the physics and timer services, and
//! drives them at a fixed timestep. A round reset throws the World away and
//! builds a fresh one; nothing is patched back in place.

use std::time::Duration;

use crate::config::Tuning;
use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};
use crate::error::{ConfigError, SimError};
use crate::leaderboard::SessionScores;
use crate::physics::{ArcadePhysics, PhysicsService};
use crate::sim::{self, GameEvent, Phase, Services, Snapshot, TickInput, World};
use crate::timer::{Scheduler, TickScheduler, TimerTask};

pub struct Scene<P: PhysicsService = ArcadePhysics, S: Scheduler = TickScheduler> {
    tuning: Tuning,
    seed: u64,
    round: u32,
    world: World,
    physics: P,
    scheduler: S,
    accumulator: f32,
    events: Vec<GameEvent>,
    scores: SessionScores,
}

impl Scene {
    /// Scene with the built-in arcade physics and tick scheduler
    pub fn new(tuning: Tuning, seed: u64) -> Result<Self, ConfigError> {
        let physics = ArcadePhysics::from_tuning(&tuning);
        Self::with_services(tuning, seed, physics, TickScheduler::new())
    }
}

impl<P: PhysicsService, S: Scheduler> Scene<P, S> {
    /// Fails if `tuning` does not validate; the world is never built from
    /// values it could panic on.
    pub fn with_services(tuning: Tuning, seed: u64, physics: P, scheduler: S) -> Result<Self, ConfigError> {
        tuning.validate()?;
        let world = World::new(&tuning, seed, 0);
        let mut scene = Self {
            tuning,
            seed,
            round: 0,
            world,
            physics,
            scheduler,
            accumulator: 0.0,
            events: Vec::new(),
            scores: SessionScores::new(),
        };
        scene.setup();
        Ok(scene)
    }

    /// Build the world for the current round and start physics
    pub fn setup(&mut self) {
        self.world = World::new(&self.tuning, self.seed, self.round);
        self.physics.resume();
        self.accumulator = 0.0;
        log::info!("Round {} ready (seed {})", self.round, self.seed);
    }

    /// Release the current round: cancel its pending reset and keep its events
    pub fn teardown(&mut self) {
        if self.world.lifecycle.cancel_pending(&mut self.scheduler) {
            log::debug!("Cancelled pending reset for round {}", self.round);
        }
        self.events.append(&mut self.world.events);
    }

    /// Tear down and rebuild the current round from initial conditions
    pub fn restart(&mut self) {
        self.teardown();
        self.setup();
    }

    /// Run one fixed-timestep tick, then fire any due timers
    pub fn tick(&mut self, input: &TickInput) -> Result<(), SimError> {
        let mut services = Services {
            physics: &mut self.physics,
            scheduler: &mut self.scheduler,
        };
        let result = sim::tick(&mut self.world, &mut services, input, SIM_DT);
        self.events.append(&mut self.world.events);
        if let Err(e) = result {
            log::error!("Tick {} of round {} aborted: {}", self.world.time_ticks, self.round, e);
            return Err(e);
        }

        self.scheduler.advance(Duration::from_secs_f32(SIM_DT));
        for task in self.scheduler.drain_due() {
            match task {
                TimerTask::ResetRound => self.reset_round(),
            }
        }
        Ok(())
    }

    /// Feed a variable frame delta; runs as many fixed ticks as fit.
    /// Returns the number of ticks run.
    pub fn advance(&mut self, frame_dt: f32, input: &TickInput) -> Result<u32, SimError> {
        self.accumulator += frame_dt.clamp(0.0, MAX_FRAME_DT);

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.tick(input)?;
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        if substeps == MAX_SUBSTEPS {
            // Drop the backlog instead of spiralling
            self.accumulator = self.accumulator.min(SIM_DT);
        }
        Ok(substeps)
    }

    /// Ending → Resetting → Playing with a fresh World
    fn reset_round(&mut self) {
        if !self.world.lifecycle.begin_reset() {
            log::warn!("Reset fired while {}, ignoring", self.world.phase().as_str());
            return;
        }

        let final_score = self.world.score.score();
        if let Some(rank) = self.scores.add_score(final_score, self.round, self.world.time_ticks) {
            log::info!("Round {} scored {} (rank {} this session)", self.round, final_score, rank);
        } else {
            log::info!("Round {} scored {}", self.round, final_score);
        }

        self.round += 1;
        self.restart();
        self.events.push(GameEvent::RoundReset {
            round: self.round,
            final_score,
        });
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn physics(&self) -> &P {
        &self.physics
    }

    pub fn physics_mut(&mut self) -> &mut P {
        &mut self.physics
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn phase(&self) -> Phase {
        self.world.phase()
    }

    pub fn scores(&self) -> &SessionScores {
        &self.scores
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.world)
    }

    /// Take every event raised since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
