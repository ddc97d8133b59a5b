//! Concrete state handler functions and table builder.
//!
//! Each state is defined by plain `fn` pointers, with no dynamic
//! dispatch and no heap.
//!
//! ```text
//!  WARMING ──[countdown elapsed]──▶ READY
//! ```
//!
//! `Ready` is terminal: its update handler never requests a transition.

use super::context::FsmContext;
use super::{StateDescriptor, StateId};
use log::{debug, info};

// ═══════════════════════════════════════════════════════════════════════════
//  Table builder
// ═══════════════════════════════════════════════════════════════════════════

/// Build the static state table.  Called once at startup.
pub fn build_state_table() -> [StateDescriptor; StateId::COUNT] {
    [
        // Index 0: Warming
        StateDescriptor {
            name: "Warming",
            on_enter: Some(warming_enter),
            on_exit: None,
            on_update: warming_update,
        },
        // Index 1: Ready
        StateDescriptor {
            name: "Ready",
            on_enter: Some(ready_enter),
            on_exit: None,
            on_update: ready_update,
        },
    ]
}

// ═══════════════════════════════════════════════════════════════════════════
//  WARMING state: heater stabilising, readings not yet trustworthy
// ═══════════════════════════════════════════════════════════════════════════

fn warming_enter(ctx: &mut FsmContext) {
    ctx.indicator_level = Some(0);
    info!("WARMING: {} tick countdown", ctx.warmup_ticks);
}

fn warming_update(ctx: &mut FsmContext) -> Option<StateId> {
    // ticks_in_state is 1-based: the N-th tick (index N-1) completes warm-up.
    if ctx.ticks_in_state >= u64::from(ctx.warmup_ticks) {
        return Some(StateId::Ready);
    }

    if ctx.ticks_in_state % 30 == 0 {
        debug!("WARMING: {} ticks remaining", ctx.warmup_remaining());
    }
    None
}

// ═══════════════════════════════════════════════════════════════════════════
//  READY state: terminal
// ═══════════════════════════════════════════════════════════════════════════

fn ready_enter(ctx: &mut FsmContext) {
    ctx.indicator_level = Some(ctx.ready_indicator_level);
    info!("READY: warm-up complete after {} ticks", ctx.total_ticks);
}

fn ready_update(_ctx: &mut FsmContext) -> Option<StateId> {
    None
}
