//! Paddle control: the decision capability and its two implementations.

use std::rc::Rc;

use crate::components::Side;
use crate::snapshot::Snapshot;

/// A decider's discrete per-frame movement decision
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Intent {
    Up,
    #[default]
    Hold,
    Down,
}

impl Intent {
    /// Signed vertical direction: up is negative, down positive
    pub fn dir(self) -> f32 {
        match self {
            Intent::Up => -1.0,
            Intent::Hold => 0.0,
            Intent::Down => 1.0,
        }
    }

    fn from_dir(dir: i8) -> Self {
        match dir {
            d if d < 0 => Intent::Up,
            0 => Intent::Hold,
            _ => Intent::Down,
        }
    }
}

/// Boundary to the host's input layer: per-side key states, polled at
/// decision time. The core never reads the OS input queue itself.
pub trait InputSource {
    fn up_held(&self, side: Side) -> bool;
    fn down_held(&self, side: Side) -> bool;
}

/// Maps a world snapshot to a movement intent. One decider per paddle,
/// selected at match construction and fixed for the match's lifetime.
pub trait MoveDecider {
    fn decide(&self, snapshot: &Snapshot) -> Intent;
}

/// Drives a paddle from the host's key states for one side
pub struct HumanControlled {
    side: Side,
    input: Rc<dyn InputSource>,
}

impl HumanControlled {
    pub fn new(side: Side, input: Rc<dyn InputSource>) -> Self {
        Self { side, input }
    }
}

impl MoveDecider for HumanControlled {
    fn decide(&self, _snapshot: &Snapshot) -> Intent {
        let mut dir: i8 = 0;
        if self.input.up_held(self.side) {
            dir -= 1;
        }
        if self.input.down_held(self.side) {
            dir += 1;
        }
        Intent::from_dir(dir)
    }
}

/// Greedy tracker: chases the ball's Y with no prediction, smoothing, or
/// dead-zone
#[derive(Debug, Clone, Copy, Default)]
pub struct ReactiveAi;

impl MoveDecider for ReactiveAi {
    fn decide(&self, snapshot: &Snapshot) -> Intent {
        let paddle_y = snapshot.own_paddle_y();
        if snapshot.ball_y > paddle_y {
            Intent::Down
        } else if snapshot.ball_y < paddle_y {
            Intent::Up
        } else {
            Intent::Hold
        }
    }
}
