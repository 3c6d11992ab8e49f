//! embedded-hal adapters for the OpenHearth link traits
//!
//! The link engine in `openhearth-link` is generic over small line and
//! timing traits. This crate maps them onto the `embedded-hal` 1.0
//! abstractions any chip HAL provides:
//!
//! - GPIO line driver and sensor with configurable polarity
//! - Blocking delay on top of `DelayNs`

#![no_std]
#![deny(unsafe_code)]

pub mod delay;
pub mod gpio;

pub use delay::HalDelay;
pub use gpio::{GpioLineDriver, GpioLineSensor};
