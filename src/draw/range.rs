use rustc_hash::FxHashMap;

use crate::{draw::DrawError, random::Roller};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeState {
    Unconfigured,
    Repeatable,
    NoRepeat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeStatus {
    pub bound: u32,
    pub no_repeat: bool,
    /// `None` while repeats are allowed.
    pub remaining: Option<usize>,
    pub drawn: usize,
}

/// Draws integers from `1..=N`, with or without replacement.
///
/// The pool only matters while no-repeat is on. Turning no-repeat on
/// always refills the pool to the full range, even after draws; the
/// history is kept.
///
/// The pool is a sparse Fisher-Yates shuffle of `1..=N`: slots
/// `0..remaining` hold the undrawn values, and slot `i` holds `i + 1`
/// unless `swaps` says otherwise. Memory grows with the number of draws,
/// never with N.
#[derive(Debug, Clone)]
pub struct RangeDraw {
    bound: u32,
    no_repeat: bool,
    remaining: u32,
    swaps: FxHashMap<u32, u32>,
    history: Vec<u32>,
}

impl Default for RangeDraw {
    fn default() -> Self {
        Self::new()
    }
}

impl RangeDraw {
    /// An unconfigured controller with no-repeat on.
    pub fn new() -> Self {
        Self {
            bound: 0,
            no_repeat: true,
            remaining: 0,
            swaps: FxHashMap::default(),
            history: Vec::new(),
        }
    }

    pub fn state(&self) -> RangeState {
        match (self.bound, self.no_repeat) {
            (0, _) => RangeState::Unconfigured,
            (_, true) => RangeState::NoRepeat,
            (_, false) => RangeState::Repeatable,
        }
    }

    /// Sets N and clears the history. A bound that is not a positive
    /// `u32` is rejected and leaves the controller unconfigured.
    pub fn set_bound(&mut self, n: i64) -> Result<u32, DrawError> {
        let Some(bound) = u32::try_from(n).ok().filter(|&bound| bound > 0) else {
            log::warn!("Rejected bound {n}");
            self.bound = 0;
            self.refill_pool();
            self.history.clear();
            return Err(DrawError::InvalidBound(n));
        };

        self.bound = bound;
        self.history.clear();
        self.refill_pool();
        log::info!("Range bound set to {bound}");
        Ok(bound)
    }

    /// Flips no-repeat and returns the new value.
    pub fn toggle_no_repeat(&mut self) -> bool {
        self.no_repeat = !self.no_repeat;
        if self.no_repeat {
            self.refill_pool();
        }
        log::info!("No-repeat is now {}", self.no_repeat);
        self.no_repeat
    }

    pub fn draw_one(&mut self, roller: &mut Roller) -> Result<u32, DrawError> {
        if self.bound == 0 {
            return Err(DrawError::Unconfigured);
        }

        let value = if self.no_repeat {
            let idx = roller
                .index(self.remaining as usize)
                .ok_or(DrawError::EmptyPool)? as u32;
            self.take_slot(idx)
        } else {
            roller.roll(1, self.bound)
        };

        log::debug!("Drew {value} from 1..={}", self.bound);
        self.history.push(value);
        Ok(value)
    }

    /// Clears the history and refills the pool. Returns `false` and does
    /// nothing if N is not set.
    pub fn reset(&mut self) -> bool {
        if self.bound == 0 {
            return false;
        }
        self.history.clear();
        self.refill_pool();
        log::info!("Range draw reset for 1..={}", self.bound);
        true
    }

    fn refill_pool(&mut self) {
        self.swaps.clear();
        self.remaining = if self.no_repeat { self.bound } else { 0 };
    }

    fn slot(&self, idx: u32) -> u32 {
        self.swaps.get(&idx).copied().unwrap_or(idx + 1)
    }

    /// Removes the value in slot `idx` by moving the last undrawn value
    /// into its place. `idx` must be below `remaining`.
    fn take_slot(&mut self, idx: u32) -> u32 {
        let last = self.remaining - 1;
        let value = self.slot(idx);
        if idx != last {
            let moved = self.slot(last);
            self.swaps.insert(idx, moved);
        }
        self.swaps.remove(&last);
        self.remaining = last;
        value
    }

    pub fn bound(&self) -> Option<u32> {
        (self.bound > 0).then_some(self.bound)
    }

    pub fn no_repeat(&self) -> bool {
        self.no_repeat
    }

    pub fn remaining(&self) -> Option<usize> {
        self.no_repeat.then_some(self.remaining as usize)
    }

    /// Draws in the order they happened.
    pub fn history(&self) -> &[u32] {
        &self.history
    }

    /// Draws in ascending order, for display.
    pub fn sorted_history(&self) -> Vec<u32> {
        let mut sorted = self.history.clone();
        sorted.sort_unstable();
        sorted
    }

    pub fn status(&self) -> RangeStatus {
        RangeStatus {
            bound: self.bound,
            no_repeat: self.no_repeat,
            remaining: self.remaining(),
            drawn: self.history.len(),
        }
    }
}
