//! Shared mutable context threaded through every FSM handler.
//!
//! `FsmContext` is the single struct that state handlers read from and
//! write to: warm-up parameters copied from the configuration, tick
//! timing, and the pending indicator command.

use crate::config::SystemConfig;

/// The shared context passed to every state handler function.
pub struct FsmContext {
    // -- Timing --
    /// Ticks elapsed since the current state was entered.
    pub ticks_in_state: u64,
    /// Monotonic total tick count.
    pub total_ticks: u64,

    // -- Warm-up parameters --
    /// Length of the warm-up countdown in ticks.
    pub warmup_ticks: u32,
    /// Indicator level to hold once ready.
    pub ready_indicator_level: u8,

    // -- Indicator output --
    /// Level requested by a state handler, applied by the service after
    /// the tick.  `None` means leave the indicator as it is.
    pub indicator_level: Option<u8>,
}

impl FsmContext {
    /// Create a new context from the given configuration.
    pub fn new(config: &SystemConfig) -> Self {
        Self {
            ticks_in_state: 0,
            total_ticks: 0,
            warmup_ticks: config.warmup_ticks,
            ready_indicator_level: config.ready_indicator_level,
            indicator_level: None,
        }
    }

    /// Ticks still to go before the countdown completes.
    pub fn warmup_remaining(&self) -> u64 {
        u64::from(self.warmup_ticks).saturating_sub(self.ticks_in_state)
    }

    /// Consume the pending indicator command.
    pub fn take_indicator_level(&mut self) -> Option<u8> {
        self.indicator_level.take()
    }
}
