//! Hardware and application seams the link engine is generic over.
//!
//! The engine never touches pins, timers, or interrupt controllers
//! directly. Platform crates implement these traits (`openhearth-drivers`
//! adapts `embedded-hal` pins and delays) and the application supplies a
//! [`ResponseHandler`] for completed exchanges.

use openhearth_protocol::Frame;

use crate::state::ResponseStatus;

/// Drives the master's output line in logical levels.
///
/// "Active" and "idle" are protocol-level states. Whether active is
/// electrically high or low is the implementor's business; common
/// OpenTherm interface circuits invert, so the mapping is configured
/// at the pin adapter, not here.
pub trait LineDriver {
    /// Drive the line to the active level.
    fn set_active(&mut self);

    /// Drive the line to the idle level.
    fn set_idle(&mut self);

    /// Drive the line to the level selected by `active`.
    fn set_level(&mut self, active: bool) {
        if active {
            self.set_active();
        } else {
            self.set_idle();
        }
    }
}

/// Senses the instantaneous logical level of the input line.
pub trait LineSensor {
    /// True while the line is at the active level.
    ///
    /// Takes `&mut self` so `embedded-hal` input pins, whose reads are
    /// fallible `&mut` calls, can implement it without interior
    /// mutability.
    fn is_active(&mut self) -> bool;
}

/// Monotonic microsecond clock.
///
/// Readings must never go backwards. A `u64` of microseconds does not
/// wrap on any realistic uptime, so implementations built on shorter
/// hardware counters must extend them before returning.
pub trait Monotonic {
    /// Current time in microseconds from an arbitrary epoch.
    fn now_micros(&mut self) -> u64;
}

/// Blocking delay provider used for bit pacing and settle times.
///
/// Bit timing tolerates the usual few-microsecond overshoot of timer
/// backed implementations; cycle-exact busy-waiting is not required.
pub trait Delay {
    /// Block for at least `us` microseconds.
    fn delay_us(&mut self, us: u32);

    /// Block for at least `ms` milliseconds.
    fn delay_ms(&mut self, ms: u32) {
        let mut remaining = ms;
        while remaining > 0 {
            self.delay_us(1_000);
            remaining -= 1;
        }
    }
}

/// Receives the classified outcome of every completed exchange.
///
/// Invoked from the poll context only, never from the edge context, so
/// implementations may do slow work (logging, queue pushes, display
/// updates) without stretching interrupt latency.
pub trait ResponseHandler {
    /// Called once per completed exchange with the raw response frame
    /// and its classification. On timeout the frame carries whatever
    /// bits were accumulated before the watchdog fired.
    fn on_response(&mut self, response: Frame, status: ResponseStatus);
}

/// Any `FnMut(Frame, ResponseStatus)` closure is a handler.
impl<F> ResponseHandler for F
where
    F: FnMut(Frame, ResponseStatus),
{
    fn on_response(&mut self, response: Frame, status: ResponseStatus) {
        self(response, status)
    }
}

/// Discards completions, for callers that consume [`poll`]'s return
/// value directly.
///
/// [`poll`]: crate::link::Master::poll
impl ResponseHandler for () {
    fn on_response(&mut self, _response: Frame, _status: ResponseStatus) {}
}
