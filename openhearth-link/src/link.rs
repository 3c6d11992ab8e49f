//! The link itself: one shared state cell split into a poll-side
//! master and an interrupt-side edge receiver.
//!
//! [`Link`] is `const`-constructible so it can live in a `static` and
//! be split at startup: the [`Master`] half goes to the task that
//! issues requests, the [`EdgeReceiver`] half to the input line's edge
//! interrupt. Both halves touch the shared [`LinkState`] only inside a
//! critical section, and every lock holds for a handful of integer
//! operations; the response handler runs after the lock is released.
//!
//! [`LinkState`]: crate::state::LinkState

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use openhearth_protocol::Frame;

use crate::signal::{SignalRx, SignalTx};
use crate::state::{LinkPhase, LinkState, ResponseStatus};
use crate::timing;
use crate::traits::{Delay, LineDriver, LineSensor, Monotonic, ResponseHandler};

/// Pause between poll steps inside [`Master::exchange`].
const POLL_INTERVAL_US: u32 = 100;

/// Why a request or exchange failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkError {
    /// Transmit requested while the link was uninitialized, mid-exchange,
    /// or in guard time
    Rejected,
    /// The slave answered with a garbled or non-acknowledge frame
    InvalidResponse,
    /// The slave did not answer within the watchdog window
    Timeout,
}

/// Shared lifecycle cell of one OpenTherm link.
///
/// Split it once into its two halves:
///
/// ```ignore
/// static LINK: Link = Link::new();
///
/// let (master, receiver) = LINK.split(out_pin, in_pin, clock, delay, handler);
/// ```
pub struct Link {
    state: Mutex<CriticalSectionRawMutex, RefCell<LinkState>>,
}

impl Link {
    /// A fresh, uninitialized link.
    pub const fn new() -> Self {
        Self {
            state: Mutex::new(RefCell::new(LinkState::new())),
        }
    }

    /// Splits the link into its two contexts. The clock is cloned so
    /// both sides read the same timebase.
    ///
    /// Call once per link; a second split would alias the edge side.
    pub fn split<O, I, C, D, H>(
        &self,
        output: O,
        input: I,
        clock: C,
        delay: D,
        handler: H,
    ) -> (Master<'_, O, C, D, H>, EdgeReceiver<'_, I, C>)
    where
        O: LineDriver,
        I: LineSensor,
        C: Monotonic + Clone,
        D: Delay,
        H: ResponseHandler,
    {
        (
            Master {
                link: self,
                tx: SignalTx::new(output),
                clock: clock.clone(),
                delay,
                handler,
            },
            EdgeReceiver {
                link: self,
                rx: SignalRx::new(input),
                clock,
            },
        )
    }
}

impl Default for Link {
    fn default() -> Self {
        Self::new()
    }
}

/// Poll-side half: initializes the line, transmits requests, advances
/// timeouts, classifies responses, and dispatches the handler.
pub struct Master<'a, O: LineDriver, C: Monotonic, D: Delay, H: ResponseHandler> {
    link: &'a Link,
    tx: SignalTx<O>,
    clock: C,
    delay: D,
    handler: H,
}

impl<O, C, D, H> Master<'_, O, C, D, H>
where
    O: LineDriver,
    C: Monotonic,
    D: Delay,
    H: ResponseHandler,
{
    /// Parks the line idle, waits out the settle time, and opens the
    /// link for exchanges.
    pub fn init(&mut self) {
        self.tx.set_idle();
        self.delay.delay_ms(timing::BOOT_SETTLE_MS);
        let now = self.clock.now_micros();
        self.link.state.lock(|state| state.borrow_mut().mark_ready(now));
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> LinkPhase {
        self.link.state.lock(|state| state.borrow().phase)
    }

    /// True when a new exchange may start.
    pub fn is_ready(&self) -> bool {
        self.phase() == LinkPhase::Ready
    }

    /// Raw bits and classification of the most recently completed
    /// exchange. The frame is only meaningful when the status is
    /// [`ResponseStatus::Success`].
    pub fn last_response(&self) -> (Frame, ResponseStatus) {
        self.link.state.lock(|state| {
            let state = state.borrow();
            (Frame::from_bits(state.last_response), state.last_status)
        })
    }

    /// Transmits a request frame, blocking for the 34 ms it occupies
    /// the wire. On `Ok` the link is waiting for the response; watch
    /// for it with [`poll`].
    ///
    /// Refuses with [`LinkError::Rejected`] unless the link is idle.
    ///
    /// [`poll`]: Master::poll
    pub fn send_request(&mut self, request: Frame) -> Result<(), LinkError> {
        let now = self.clock.now_micros();
        let accepted = self
            .link
            .state
            .lock(|state| state.borrow_mut().try_begin_send(now));
        if !accepted {
            return Err(LinkError::Rejected);
        }

        // Bit-banging happens outside the lock; the edge handler
        // ignores edges while the phase is Sending, so our own
        // transitions echoing into the receiver are harmless.
        self.tx.send_frame(&mut self.delay, request);

        let now = self.clock.now_micros();
        self.link
            .state
            .lock(|state| state.borrow_mut().finish_send(now));
        Ok(())
    }

    /// Advances timeouts and classifies a finished frame, if any.
    /// Call at millisecond-ish cadence while an exchange is in flight.
    ///
    /// When this step completes an exchange, the handler is invoked
    /// (outside the lock) and the outcome is also returned. On timeout
    /// the frame carries whatever bits had accumulated.
    pub fn poll(&mut self) -> Option<(Frame, ResponseStatus)> {
        let now = self.clock.now_micros();
        let completed = self
            .link
            .state
            .lock(|state| state.borrow_mut().poll_step(now));
        completed.map(|(raw, status)| {
            let response = Frame::from_bits(raw);
            self.handler.on_response(response, status);
            (response, status)
        })
    }

    /// Blocking convenience: sends `request` and polls until the link
    /// is idle again, returning the acknowledged response frame.
    ///
    /// Runs the full exchange including the guard interval, so back to
    /// back calls are already correctly paced. The handler sees the
    /// completion exactly as it would under manual polling.
    pub fn exchange(&mut self, request: Frame) -> Result<Frame, LinkError> {
        self.send_request(request)?;

        let mut outcome = None;
        while !self.is_ready() {
            if let Some(completed) = self.poll() {
                outcome = Some(completed);
            }
            self.delay.delay_us(POLL_INTERVAL_US);
        }

        match outcome {
            Some((response, ResponseStatus::Success)) => Ok(response),
            Some((_, ResponseStatus::Timeout)) => Err(LinkError::Timeout),
            _ => Err(LinkError::InvalidResponse),
        }
    }
}

/// Interrupt-side half: feeds input-line transitions to the receive
/// state machine.
pub struct EdgeReceiver<'a, I: LineSensor, C: Monotonic> {
    link: &'a Link,
    rx: SignalRx<I>,
    clock: C,
}

impl<I, C> EdgeReceiver<'_, I, C>
where
    I: LineSensor,
    C: Monotonic,
{
    /// Processes one transition of the input line. Wire it to an edge
    /// interrupt (or async edge watcher) triggering on both edges.
    ///
    /// Bounded work: a timestamp, a pin read, and a short critical
    /// section.
    pub fn on_edge(&mut self) {
        let now = self.clock.now_micros();
        let active = self.rx.sample();
        self.link
            .state
            .lock(|state| state.borrow_mut().handle_edge(now, active));
    }
}
