//! Directional-switch input capability.
//!
//! Debouncing and pin polling live in the board support crate; the engine
//! only consumes press edges. An implementation latches, per [`update`]
//! call, which directions saw a press edge since the previous call.
//!
//! [`update`]: NavSwitch::update

/// The four directions of the navigation switch.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Dir {
    North,
    South,
    East,
    West,
}

/// Press-edge source for the four-way switch.
///
/// The engine calls [`update`](Self::update) once per loop iteration and
/// then queries [`pushed`](Self::pushed); edges not serviced before the
/// next `update` are discarded, so at most one queued press survives a
/// tick.
pub trait NavSwitch {
    /// Poll the hardware and latch press edges seen since the last call.
    fn update(&mut self);

    /// Whether `dir` saw a press edge in the window latched by the last
    /// [`update`](Self::update).
    fn pushed(&self, dir: Dir) -> bool;
}
