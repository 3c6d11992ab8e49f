//! Master-side OpenTherm link engine
//!
//! Runs one request/response exchange at a time over the two-wire
//! OpenTherm interface: a blocking bi-phase transmitter on the output
//! line and an edge-timed receiver fed from the input line's
//! interrupt. Frame encoding and validation live in
//! `openhearth-protocol`; this crate owns the wire timing and the
//! exchange lifecycle.
//!
//! Bits travel bi-phase coded at 1000 bits/s, so every bit is a
//! guaranteed mid-bit transition:
//!
//! ```text
//!   logic 1:         logic 0:
//!
//!   active ----+          +----
//!              |          |
//!   idle       +----  ----+
//!        |500us|500us|500us|500us
//! ```
//!
//! A frame on the wire is a start bit (1), the 32 frame bits MSB
//! first, and a stop bit (1): 34 ms end to end. The receiver times
//! edges instead of sampling mid-bit: after a recorded edge, the next
//! edge more than 750 us away is the next bit's mid-bit transition,
//! anything earlier is a bit-boundary transition and is ignored.
//!
//! # Architecture
//!
//! One [`Link`] cell holds the lifecycle state. Splitting it yields
//! the two context halves:
//!
//! - [`Master`]: initializes the line, transmits requests, polls for
//!   timeouts and finished frames, and dispatches the application's
//!   [`ResponseHandler`].
//! - [`EdgeReceiver`]: called from the input line's edge interrupt,
//!   feeds timestamped transitions to the receive state machine.
//!
//! Both halves take a short critical section around the shared state;
//! the handler always runs outside it.
//!
//! ```ignore
//! static LINK: Link = Link::new();
//!
//! let (mut master, mut receiver) = LINK.split(out, inp, clock, delay, handler);
//!
//! // input line interrupt, both edges:
//! receiver.on_edge();
//!
//! // control task:
//! master.init();
//! let status = master.exchange(requests::boiler_status(MasterStatus::default()))?;
//! ```

#![no_std]
#![deny(unsafe_code)]

pub mod link;
pub mod signal;
pub mod state;
pub mod timing;
pub mod traits;

pub use link::{EdgeReceiver, Link, LinkError, Master};
pub use state::{LinkPhase, ResponseStatus};
pub use traits::{Delay, LineDriver, LineSensor, Monotonic, ResponseHandler};
