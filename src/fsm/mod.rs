//! Table-driven warm-up state machine.
//!
//! ```text
//!   state    on_enter        on_update                      on_exit
//!   Warming  indicator off   Ready once countdown elapsed   -
//!   Ready    ready level     stay                           -
//! ```
//!
//! Handlers are plain `fn` pointers stored in an array indexed by
//! [`StateId`].  A tick runs the current state's `on_update`; a returned
//! `Some(next)` runs `on_exit` of the old state and `on_enter` of the new
//! one.  Handlers communicate only through [`FsmContext`].

pub mod context;
pub mod states;

use context::FsmContext;
use log::info;

/// Warm-up states.  The discriminant indexes the state table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum StateId {
    Warming = 0,
    Ready = 1,
}

impl StateId {
    /// Number of rows in the state table.
    pub const COUNT: usize = 2;
}

/// Entry / exit action.
pub type StateActionFn = fn(&mut FsmContext);

/// Per-tick handler; `Some(next)` requests a transition.
pub type StateUpdateFn = fn(&mut FsmContext) -> Option<StateId>;

/// One row of the state table.
pub struct StateDescriptor {
    pub name: &'static str,
    pub on_enter: Option<StateActionFn>,
    pub on_exit: Option<StateActionFn>,
    pub on_update: StateUpdateFn,
}

/// The engine: a state table and the active state.  Timing lives in the
/// caller-owned [`FsmContext`].
pub struct Fsm {
    table: [StateDescriptor; StateId::COUNT],
    current: StateId,
}

impl Fsm {
    pub fn new(table: [StateDescriptor; StateId::COUNT], initial: StateId) -> Self {
        Self {
            table,
            current: initial,
        }
    }

    /// Run `on_enter` of the initial state.  Call once before the first tick.
    pub fn start(&mut self, ctx: &mut FsmContext) {
        info!("FSM starting in state: {}", self.row(self.current).name);
        if let Some(enter) = self.row(self.current).on_enter {
            enter(ctx);
        }
    }

    /// Advance one tick, transitioning if the current state asks to.
    pub fn tick(&mut self, ctx: &mut FsmContext) {
        ctx.ticks_in_state += 1;
        ctx.total_ticks += 1;

        if let Some(next) = (self.row(self.current).on_update)(ctx) {
            self.transition(next, ctx);
        }
    }

    pub fn current_state(&self) -> StateId {
        self.current
    }

    fn row(&self, id: StateId) -> &StateDescriptor {
        &self.table[id as usize]
    }

    fn transition(&mut self, next: StateId, ctx: &mut FsmContext) {
        info!(
            "FSM transition: {} -> {}",
            self.row(self.current).name,
            self.row(next).name
        );
        if let Some(exit) = self.row(self.current).on_exit {
            exit(ctx);
        }
        self.current = next;
        ctx.ticks_in_state = 0;
        if let Some(enter) = self.row(next).on_enter {
            enter(ctx);
        }
    }
}
