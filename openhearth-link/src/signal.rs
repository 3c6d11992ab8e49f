//! Bi-phase signal generation and line sampling.
//!
//! [`SignalTx`] drives one frame at a time onto the output line by
//! blocking bit-banging: each bit is the line held at the bit's level
//! for half a bit period, then at the opposite level for the other
//! half. [`SignalRx`] is the thin sampling side; the timing rules that
//! turn its samples into bits live in [`crate::state`].

use openhearth_protocol::Frame;

use crate::timing;
use crate::traits::{Delay, LineDriver, LineSensor};

/// Transmit half of the wire interface. Owns the output line and
/// nothing else; pacing comes from a borrowed [`Delay`] so the caller
/// keeps control of its timer.
pub struct SignalTx<O: LineDriver> {
    output: O,
}

impl<O: LineDriver> SignalTx<O> {
    /// Wraps the output line. Does not drive it; call [`set_idle`]
    /// (or let the link's init do it) before the first frame.
    ///
    /// [`set_idle`]: SignalTx::set_idle
    pub fn new(output: O) -> Self {
        Self { output }
    }

    /// Park the line at the idle level.
    pub fn set_idle(&mut self) {
        self.output.set_idle();
    }

    /// Hold the line at the active level, for line tests.
    pub fn set_active(&mut self) {
        self.output.set_active();
    }

    /// Drive one bi-phase bit: the bit's level for a half period, then
    /// the complement for the second half.
    pub fn send_bit(&mut self, delay: &mut impl Delay, bit: bool) {
        self.output.set_level(bit);
        delay.delay_us(timing::HALF_BIT_US);
        self.output.set_level(!bit);
        delay.delay_us(timing::HALF_BIT_US);
    }

    /// Drive a complete frame: start bit, the 32 frame bits MSB first,
    /// stop bit. Blocks for 34 bit periods and leaves the line idle.
    pub fn send_frame(&mut self, delay: &mut impl Delay, frame: Frame) {
        self.send_bit(delay, true);
        let bits = frame.bits();
        for i in (0..32).rev() {
            self.send_bit(delay, bits & (1 << i) != 0);
        }
        self.send_bit(delay, true);
        self.output.set_idle();
    }
}

/// Receive half of the wire interface: samples the input line level on
/// demand, typically from the edge interrupt.
pub struct SignalRx<I: LineSensor> {
    input: I,
}

impl<I: LineSensor> SignalRx<I> {
    pub fn new(input: I) -> Self {
        Self { input }
    }

    /// The line level right now.
    pub fn sample(&mut self) -> bool {
        self.input.is_active()
    }
}
