#![warn(clippy::all, clippy::pedantic)]

use bevy_ecs::prelude::*;
use std::time::Duration;

use crate::config::Rules;
use crate::game::STARTING_LEVEL;

/// A repeating countdown that can be switched off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalTimer {
    interval: Duration,
    elapsed: Duration,
    armed: bool,
}

impl IntervalTimer {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            elapsed: Duration::ZERO,
            armed: false,
        }
    }

    /// Starts a fresh countdown, whether or not the timer was running.
    pub fn rearm(&mut self) {
        self.elapsed = Duration::ZERO;
        self.armed = true;
    }

    /// Starts the timer unless it is already running.
    pub fn arm(&mut self) {
        if !self.armed {
            self.rearm();
        }
    }

    pub fn cancel(&mut self) {
        self.armed = false;
        self.elapsed = Duration::ZERO;
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Changes the period without restarting the current countdown.
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    /// Advances the countdown. Returns true when the deadline passed, at most
    /// once per call; the timer then starts over.
    pub fn advance(&mut self, delta: Duration) -> bool {
        if !self.armed {
            return false;
        }
        self.elapsed += delta;
        if self.elapsed >= self.interval {
            self.elapsed = Duration::ZERO;
            return true;
        }
        false
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerId {
    Gravity,
    LeftRepeat,
    RightRepeat,
    DownRepeat,
}

/// Gravity and key-repeat timers, fired in a fixed order each tick.
#[derive(Resource, Debug, Clone)]
pub struct Scheduler {
    pub gravity: IntervalTimer,
    pub left_repeat: IntervalTimer,
    pub right_repeat: IntervalTimer,
    pub down_repeat: IntervalTimer,
}

impl Scheduler {
    #[must_use]
    pub fn new(rules: &Rules) -> Self {
        let repeat = rules.key_repeat_interval();
        Self {
            gravity: IntervalTimer::new(rules.fall_interval(STARTING_LEVEL)),
            left_repeat: IntervalTimer::new(repeat),
            right_repeat: IntervalTimer::new(repeat),
            down_repeat: IntervalTimer::new(repeat),
        }
    }

    pub fn timer_mut(&mut self, id: TimerId) -> &mut IntervalTimer {
        match id {
            TimerId::Gravity => &mut self.gravity,
            TimerId::LeftRepeat => &mut self.left_repeat,
            TimerId::RightRepeat => &mut self.right_repeat,
            TimerId::DownRepeat => &mut self.down_repeat,
        }
    }

    pub fn cancel_all(&mut self) {
        self.gravity.cancel();
        self.left_repeat.cancel();
        self.right_repeat.cancel();
        self.down_repeat.cancel();
    }

    /// Fresh game: everything stops, then gravity starts at the level 1 pace.
    pub fn restart(&mut self, rules: &Rules) {
        self.cancel_all();
        self.gravity.set_interval(rules.fall_interval(STARTING_LEVEL));
        self.gravity.rearm();
    }

    /// Timers whose deadline passed during `delta`, in firing order.
    pub fn advance(&mut self, delta: Duration) -> Vec<TimerId> {
        [
            TimerId::Gravity,
            TimerId::LeftRepeat,
            TimerId::RightRepeat,
            TimerId::DownRepeat,
        ]
        .into_iter()
        .filter(|&id| self.timer_mut(id).advance(delta))
        .collect()
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new(&Rules::default())
    }
}
