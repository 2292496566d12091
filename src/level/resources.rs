//! Level domain: checkpoint progression, scoring and the player's life cycle.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct LevelSettings {
    /// Reaching a checkpoint later than this earns no time bonus.
    pub bonus_cutoff_seconds: i32,
    /// Points per second left on the bonus clock.
    pub bonus_second_multiplier: i32,
    /// Seconds between death and respawn.
    pub respawn_delay: f32,
}

impl Default for LevelSettings {
    fn default() -> Self {
        Self {
            bonus_cutoff_seconds: 30,
            bonus_second_multiplier: 10,
            respawn_delay: 2.0,
        }
    }
}

#[derive(Resource, Debug, Default)]
pub struct ScoreTracker {
    pub points: i32,
}

impl ScoreTracker {
    pub fn add_points(&mut self, points: i32) {
        self.points += points;
    }

    pub fn reset_points(&mut self, points: i32) {
        self.points = points;
    }
}

/// Checkpoint ordering and the bonus clock.
#[derive(Resource, Debug, Default)]
pub struct LevelProgress {
    checkpoints: Vec<Vec2>,
    current: Option<usize>,
    elapsed: f32,
    saved_points: i32,
}

impl LevelProgress {
    pub fn new(mut checkpoints: Vec<Vec2>) -> Self {
        checkpoints.sort_by(|a, b| a.x.total_cmp(&b.x));
        let current = if checkpoints.is_empty() { None } else { Some(0) };

        Self {
            checkpoints,
            current,
            elapsed: 0.0,
            saved_points: 0,
        }
    }

    pub fn checkpoints(&self) -> &[Vec2] {
        &self.checkpoints
    }

    pub fn current_checkpoint(&self) -> Option<usize> {
        self.current
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn saved_points(&self) -> i32 {
        self.saved_points
    }

    /// Where the player should (re)appear.
    pub fn spawn_point(&self) -> Option<Vec2> {
        self.current.map(|index| self.checkpoints[index])
    }

    pub fn tick(&mut self, dt: f32) {
        self.elapsed += dt;
    }

    pub fn restart_clock(&mut self) {
        self.elapsed = 0.0;
    }

    /// Bonus for reaching a checkpoint right now. Partial seconds are dropped.
    pub fn current_time_bonus(&self, settings: &LevelSettings) -> i32 {
        let seconds_left = (settings.bonus_cutoff_seconds as f32 - self.elapsed) as i32;
        seconds_left.max(0) * settings.bonus_second_multiplier
    }

    /// Move on to the next checkpoint once the player is past it.
    ///
    /// Awards the time bonus, saves the score and restarts the clock. Returns
    /// the index of the checkpoint just reached. At most one checkpoint is
    /// passed per call.
    pub fn advance(
        &mut self,
        player_x: f32,
        score: &mut ScoreTracker,
        settings: &LevelSettings,
    ) -> Option<usize> {
        let next = self.current? + 1;
        let checkpoint = self.checkpoints.get(next)?;

        if checkpoint.x - player_x >= 0.0 {
            return None;
        }

        self.current = Some(next);
        score.add_points(self.current_time_bonus(settings));
        self.saved_points = score.points;
        self.restart_clock();
        Some(next)
    }
}

/// Timed death/respawn sequence driven by the frame loop.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Default)]
pub enum PlayerLife {
    #[default]
    Alive,
    Dying {
        remaining: f32,
    },
    Respawning,
}

impl PlayerLife {
    pub fn is_alive(&self) -> bool {
        matches!(self, PlayerLife::Alive)
    }

    /// Start the respawn countdown. Ignored unless alive.
    pub fn begin_dying(&mut self, delay: f32) -> bool {
        if !self.is_alive() {
            return false;
        }
        *self = PlayerLife::Dying { remaining: delay };
        true
    }

    /// Run the countdown. Returns true on the frame it reaches `Respawning`.
    pub fn advance(&mut self, dt: f32) -> bool {
        let PlayerLife::Dying { remaining } = self else {
            return false;
        };

        *remaining -= dt;
        if *remaining <= 0.0 {
            *self = PlayerLife::Respawning;
            return true;
        }
        false
    }

    pub fn finish_respawn(&mut self) {
        if *self == PlayerLife::Respawning {
            *self = PlayerLife::Alive;
        }
    }
}
