#![warn(clippy::all, clippy::pedantic)]

pub mod loader;

use bevy_ecs::prelude::Resource;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::game::{
    FALL_DECREASE_COEFF, FALL_START_DELAY, KEY_DELAY, LINE_SCORES, MAX_INTERVAL, MAX_SCORE, MIN_INTERVAL,
    SCORE_GOAL_MULTIPLIER, STARTUP_SCORE_GOAL,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub settings: Settings,
    pub rules: Rules,
}

/// Player preferences and the best score so far.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub sound: bool,
    pub helper_enabled: bool,
    pub record: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound: true,
            helper_enabled: false,
            record: 0,
        }
    }
}

/// Scoring and timing knobs.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    /// Points for clearing 1, 2, 3 and 4 lines at once, before the level multiplier.
    pub line_scores: [u32; 4],
    pub startup_score_goal: u32,
    pub score_goal_multiplier: u32,
    pub max_score: u32,
    /// Seconds between gravity steps at level 1.
    pub fall_start_delay: f32,
    pub fall_decrease: f32,
    /// Seconds between auto-repeated moves while a key is held.
    pub key_delay: f32,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            line_scores: LINE_SCORES,
            startup_score_goal: STARTUP_SCORE_GOAL,
            score_goal_multiplier: SCORE_GOAL_MULTIPLIER,
            max_score: MAX_SCORE,
            fall_start_delay: FALL_START_DELAY,
            fall_decrease: FALL_DECREASE_COEFF,
            key_delay: KEY_DELAY,
        }
    }
}

impl Rules {
    /// Gravity interval for a level: `fall_start_delay / (1 + (level - 1) * fall_decrease)`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn fall_interval(&self, level: u32) -> Duration {
        let speedup = 1.0 + level.saturating_sub(1) as f32 * self.fall_decrease;
        clamp_interval(self.fall_start_delay / speedup)
    }

    #[must_use]
    pub fn key_repeat_interval(&self) -> Duration {
        clamp_interval(self.key_delay)
    }

    /// Award for clearing `lines` rows at once on `level`. Clears of more
    /// than four rows pay the four-row rate.
    #[must_use]
    pub fn line_award(&self, lines: u32, level: u32) -> u32 {
        match lines {
            0 => 0,
            n => {
                let index = (n.min(4) - 1) as usize;
                self.line_scores[index].saturating_mul(level)
            }
        }
    }
}

/// Keeps intervals between `MIN_INTERVAL` and `MAX_INTERVAL` seconds.
/// NaN falls to the minimum.
fn clamp_interval(seconds: f32) -> Duration {
    let seconds = if seconds.is_nan() {
        MIN_INTERVAL
    } else {
        seconds.clamp(MIN_INTERVAL, MAX_INTERVAL)
    };
    Duration::from_secs_f32(seconds)
}
