//! OpenTherm wire-protocol data types.
//!
//! This crate covers everything about an OpenTherm exchange that does not
//! touch a wire: the 32-bit frame layout, parity and validity rules, the
//! data-id catalogue, and the payload conversions for the common boiler and
//! ventilation data points. The timed transmit/receive engine lives in
//! `openhearth-link`.
//!
//! # Frame format
//!
//! Every frame is a single 32-bit word (MSB first on the wire):
//! ```text
//! ┌────────┬──────────┬───────┬─────────┬────────────┐
//! │ PARITY │ MSG-TYPE │ SPARE │ DATA-ID │ DATA-VALUE │
//! │ bit 31 │ 30..28   │ 27..24│ 23..16  │ 15..0      │
//! └────────┴──────────┴───────┴─────────┴────────────┘
//! ```
//!
//! The parity bit is chosen so the total number of set bits in the word is
//! even. Slaves acknowledge with message type 4 (read-ack) or 5 (write-ack);
//! anything else, or a parity mismatch, is an invalid response.
//!
//! Payload interpretation depends on the data-id: plain `u16`, a pair of
//! bytes, a flag byte, or fixed-point f8.8 (8 fractional bits). The
//! [`data_id`] constants document the format each id carries.

#![no_std]
#![deny(unsafe_code)]

pub mod data_id;
pub mod frame;
pub mod payload;
pub mod requests;

pub use frame::{parity, Frame, MessageType};
pub use payload::{
    decode_temperature, encode_temperature, filter_check, split_payload, u8_pair, MasterStatus,
    SlaveStatus, VentilationLevel,
};
