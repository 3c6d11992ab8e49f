//! Link lifecycle state and the pure transition rules.
//!
//! Two contexts drive the same state record: the edge context calls
//! [`LinkState::handle_edge`] on every input-line transition, the poll
//! context calls [`LinkState::poll_step`] to advance timeouts and
//! classify finished frames. Everything here is plain data and integer
//! comparisons; sharing and locking live in [`crate::link`], so the
//! rules can be exercised on a host without hardware.

use openhearth_protocol::Frame;

use crate::timing;

/// Lifecycle phases of the link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkPhase {
    /// Lines not set up yet; exchanges are refused
    Uninitialized,
    /// Idle, a new exchange may start
    Ready,
    /// Request bits are being driven onto the line
    Sending,
    /// Request sent, waiting for the response start bit
    WaitingForResponse,
    /// Start-bit leading edge seen, waiting for its confirming half
    ResponseStartBit,
    /// Collecting the 32 response bits
    ResponseReceiving,
    /// Full frame collected, awaiting classification by the next poll
    ResponseReady,
    /// Protocol violation observed, awaiting classification by the next poll
    ResponseInvalid,
    /// Inter-frame guard time before the link is idle again
    PostResponseDelay,
}

/// Classification of the most recently completed exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ResponseStatus {
    /// No exchange has completed yet
    None,
    /// Response received and frame-valid
    Success,
    /// Garbled frame or protocol violation
    Invalid,
    /// Watchdog expired before a frame completed
    Timeout,
}

/// A completed exchange: raw accumulated bits and their classification.
pub(crate) type Completion = (u32, ResponseStatus);

/// The link's single mutable state record, shared between the poll
/// context and the edge context.
#[derive(Debug, Clone)]
pub(crate) struct LinkState {
    pub(crate) phase: LinkPhase,
    /// Response bits accumulated so far, MSB first.
    pub(crate) response: u32,
    /// Number of response bits recorded (0..=32).
    pub(crate) bit_index: u8,
    /// Timestamp of the event that defines the current wait: phase
    /// entry, or the last recorded edge while receiving.
    pub(crate) phase_entry_us: u64,
    pub(crate) last_status: ResponseStatus,
    pub(crate) last_response: u32,
}

impl LinkState {
    pub(crate) const fn new() -> Self {
        Self {
            phase: LinkPhase::Uninitialized,
            response: 0,
            bit_index: 0,
            phase_entry_us: 0,
            last_status: ResponseStatus::None,
            last_response: 0,
        }
    }

    fn enter(&mut self, phase: LinkPhase, now: u64) {
        self.phase = phase;
        self.phase_entry_us = now;
    }

    /// Mark the lines initialized and the link idle.
    pub(crate) fn mark_ready(&mut self, now: u64) {
        self.enter(LinkPhase::Ready, now);
    }

    /// Begin an exchange if the link is idle. Any other phase leaves
    /// the state untouched and returns false.
    pub(crate) fn try_begin_send(&mut self, now: u64) -> bool {
        if self.phase != LinkPhase::Ready {
            return false;
        }
        self.response = 0;
        self.last_status = ResponseStatus::None;
        self.enter(LinkPhase::Sending, now);
        true
    }

    /// The request has left the wire; open the response window.
    pub(crate) fn finish_send(&mut self, now: u64) {
        self.enter(LinkPhase::WaitingForResponse, now);
    }

    /// Edge-context transition rule. `active` is the line level just
    /// after the transition, `now` its timestamp in microseconds.
    ///
    /// Bounded and allocation-free: a few compares and stores at most,
    /// safe to run from an interrupt handler.
    pub(crate) fn handle_edge(&mut self, now: u64, active: bool) {
        match self.phase {
            LinkPhase::WaitingForResponse => {
                if active {
                    self.enter(LinkPhase::ResponseStartBit, now);
                } else {
                    // A falling edge cannot open a frame.
                    self.enter(LinkPhase::ResponseInvalid, now);
                }
            }
            LinkPhase::ResponseStartBit => {
                let held = now.wrapping_sub(self.phase_entry_us);
                if held < timing::START_BIT_WINDOW_US && !active {
                    self.bit_index = 0;
                    self.enter(LinkPhase::ResponseReceiving, now);
                } else {
                    self.enter(LinkPhase::ResponseInvalid, now);
                }
            }
            LinkPhase::ResponseReceiving => {
                if now.wrapping_sub(self.phase_entry_us) > timing::SAMPLE_THRESHOLD_US {
                    if self.bit_index < 32 {
                        // Mid-bit sample: logic 1 leaves the line at the
                        // inactive level after its transition.
                        self.response = (self.response << 1) | (!active as u32);
                        self.bit_index += 1;
                        self.phase_entry_us = now;
                    } else {
                        // 33rd sample point is the stop bit.
                        self.enter(LinkPhase::ResponseReady, now);
                    }
                }
                // Earlier edges are bit-boundary transitions; the sample
                // clock does not move for them.
            }
            // Idle, sending, classification and guard phases ignore edges.
            _ => {}
        }
    }

    /// Poll-context transition rule. Returns the completion to report,
    /// if this step produced one.
    pub(crate) fn poll_step(&mut self, now: u64) -> Option<Completion> {
        let held = now.wrapping_sub(self.phase_entry_us);
        match self.phase {
            LinkPhase::Uninitialized | LinkPhase::Ready => None,
            // The guard phase is past completion; only expiry applies.
            LinkPhase::PostResponseDelay => {
                if held > timing::GUARD_INTERVAL_US {
                    self.enter(LinkPhase::Ready, now);
                }
                None
            }
            // The watchdog outranks the in-flight phase rules.
            _ if held > timing::WATCHDOG_TIMEOUT_US => {
                Some(self.complete(ResponseStatus::Timeout, now))
            }
            LinkPhase::ResponseReady => {
                let status = if Frame::from_bits(self.response).is_valid_response() {
                    ResponseStatus::Success
                } else {
                    ResponseStatus::Invalid
                };
                Some(self.complete(status, now))
            }
            LinkPhase::ResponseInvalid => Some(self.complete(ResponseStatus::Invalid, now)),
            _ => None,
        }
    }

    fn complete(&mut self, status: ResponseStatus, now: u64) -> Completion {
        self.last_status = status;
        self.last_response = self.response;
        self.enter(LinkPhase::PostResponseDelay, now);
        (self.response, status)
    }
}
