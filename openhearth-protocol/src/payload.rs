//! Payload conversions for the common boiler and ventilation data points.
//!
//! Everything in here is pure arithmetic on the 16-bit data value; which
//! conversion applies to which data-id is documented in [`crate::data_id`].

use crate::frame::Frame;

/// Encode a temperature in °C as f8.8 fixed point.
///
/// The value is clamped to the protocol's [0, 100] °C setpoint range
/// before conversion, matching what boilers accept for `T_SET`.
pub fn encode_temperature(celsius: f32) -> u16 {
    let clamped = celsius.clamp(0.0, 100.0);
    (clamped * 256.0) as u16
}

/// Decode an f8.8 fixed-point data value to °C.
pub fn decode_temperature(raw: u16) -> f32 {
    raw as f32 / 256.0
}

/// Pack a high/low byte pair into a data value (`u8 / u8` format).
pub const fn u8_pair(hi: u8, lo: u8) -> u16 {
    ((hi as u16) << 8) | lo as u16
}

/// Split a `u8 / u8` data value into its high and low bytes.
pub const fn split_payload(value: u16) -> (u8, u8) {
    ((value >> 8) as u8, value as u8)
}

/// Ventilation filter-check flag: bit 5 of the slave's `STATUS_VH` byte.
pub const fn filter_check(status_payload: u16) -> bool {
    status_payload & 0x20 != 0
}

impl Frame {
    /// f8.8 temperature carried by a valid response frame, in °C.
    ///
    /// `None` if the frame fails the response validity check; a garbled
    /// frame must not be mistaken for 0 °C.
    pub fn temperature(self) -> Option<f32> {
        if self.is_valid_response() {
            Some(decode_temperature(self.value()))
        } else {
            None
        }
    }
}

/// Master status flags, sent in the high byte of a `STATUS` read request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MasterStatus {
    /// Central heating enable
    pub ch_enable: bool,
    /// Domestic hot water enable
    pub dhw_enable: bool,
    /// Cooling enable
    pub cooling_enable: bool,
    /// Outside temperature compensation active
    pub otc_active: bool,
    /// Second central heating circuit enable
    pub ch2_enable: bool,
}

impl MasterStatus {
    /// Assemble the status-request data value: flags in the high byte,
    /// low byte zero (it belongs to the slave).
    pub const fn to_payload(self) -> u16 {
        let flags = self.ch_enable as u16
            | (self.dhw_enable as u16) << 1
            | (self.cooling_enable as u16) << 2
            | (self.otc_active as u16) << 3
            | (self.ch2_enable as u16) << 4;
        flags << 8
    }
}

/// Slave status flags, reported in the low byte of a `STATUS` response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SlaveStatus {
    /// Fault indication
    pub fault: bool,
    /// Central heating mode active
    pub ch_active: bool,
    /// Domestic hot water mode active
    pub dhw_active: bool,
    /// Burner flame on
    pub flame_on: bool,
    /// Cooling mode active
    pub cooling_active: bool,
    /// Diagnostic event pending
    pub diagnostic_event: bool,
}

impl SlaveStatus {
    /// Extract the slave flags from a status data value. Bits 0..4 and 6
    /// of the low byte carry the flags; bit 5 is reserved on the boiler
    /// profile.
    pub const fn from_payload(value: u16) -> Self {
        Self {
            fault: value & 0x01 != 0,
            ch_active: value & 0x02 != 0,
            dhw_active: value & 0x04 != 0,
            flame_on: value & 0x08 != 0,
            cooling_active: value & 0x10 != 0,
            diagnostic_event: value & 0x40 != 0,
        }
    }

    /// Extract the slave flags from a status response frame.
    ///
    /// `None` if the frame fails the response validity check.
    pub fn from_frame(frame: Frame) -> Option<Self> {
        if frame.is_valid_response() {
            Some(Self::from_payload(frame.value()))
        } else {
            None
        }
    }
}

/// Ventilation setpoint levels carried by `CONTROL_SETPOINT_VH`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum VentilationLevel {
    /// Unit off
    Off = 0,
    /// Reduced speed
    Reduced = 1,
    /// Normal speed
    Normal = 2,
    /// High speed
    High = 3,
}

impl VentilationLevel {
    /// The setpoint data value for this level.
    pub const fn to_payload(self) -> u16 {
        self as u16
    }

    /// Decode a reported setpoint value, if it names a defined level.
    pub const fn from_payload(value: u16) -> Option<Self> {
        match value {
            0 => Some(Self::Off),
            1 => Some(Self::Reduced),
            2 => Some(Self::Normal),
            3 => Some(Self::High),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::MessageType;

    #[test]
    fn test_temperature_known_value() {
        assert_eq!(encode_temperature(21.5), 0x1580);
        assert_eq!(decode_temperature(0x1580), 21.5);
    }

    #[test]
    fn test_temperature_clamps() {
        assert_eq!(encode_temperature(-5.0), 0);
        assert_eq!(encode_temperature(150.0), 25600);
        assert_eq!(decode_temperature(encode_temperature(150.0)), 100.0);
    }

    #[test]
    fn test_temperature_round_trip_full_range() {
        // Every representable setpoint between 0 and 100 °C survives the
        // encode/decode pair exactly (both are powers-of-two scalings).
        for raw in 0..=25600u16 {
            let celsius = raw as f32 / 256.0;
            assert_eq!(encode_temperature(celsius), raw);
            assert!((decode_temperature(raw) - celsius).abs() < 1.0 / 256.0);
        }
    }

    #[test]
    fn test_frame_temperature_requires_valid_response() {
        let ack = Frame::new(MessageType::ReadAck, crate::data_id::T_BOILER, 0x1580);
        assert_eq!(ack.temperature(), Some(21.5));

        let request = Frame::read_request(crate::data_id::T_BOILER, 0);
        assert_eq!(request.temperature(), None);

        let corrupted = Frame::from_bits(ack.bits() ^ 0x0000_0400);
        assert_eq!(corrupted.temperature(), None);
    }

    #[test]
    fn test_master_status_payload_layout() {
        let status = MasterStatus {
            ch_enable: true,
            dhw_enable: true,
            ..Default::default()
        };
        assert_eq!(status.to_payload(), 0x0300);

        let ch2_only = MasterStatus {
            ch2_enable: true,
            ..Default::default()
        };
        assert_eq!(ch2_only.to_payload(), 0x1000);

        assert_eq!(MasterStatus::default().to_payload(), 0);
    }

    #[test]
    fn test_slave_status_flag_extraction() {
        let status = SlaveStatus::from_payload(0x0B);
        assert!(status.fault);
        assert!(status.ch_active);
        assert!(!status.dhw_active);
        assert!(status.flame_on);
        assert!(!status.cooling_active);
        assert!(!status.diagnostic_event);

        assert!(SlaveStatus::from_payload(0x40).diagnostic_event);
        // Bit 5 is reserved and must not leak into any flag.
        assert_eq!(
            SlaveStatus::from_payload(0x20),
            SlaveStatus::from_payload(0)
        );
    }

    #[test]
    fn test_slave_status_from_frame() {
        let response = Frame::new(MessageType::ReadAck, crate::data_id::STATUS, 0x0302);
        let status = SlaveStatus::from_frame(response).unwrap();
        assert!(status.ch_active);
        assert!(!status.fault);

        let request = Frame::read_request(crate::data_id::STATUS, 0x0300);
        assert_eq!(SlaveStatus::from_frame(request), None);
    }

    #[test]
    fn test_ventilation_level_payloads() {
        assert_eq!(VentilationLevel::Off.to_payload(), 0);
        assert_eq!(VentilationLevel::High.to_payload(), 3);
        assert_eq!(VentilationLevel::from_payload(2), Some(VentilationLevel::Normal));
        assert_eq!(VentilationLevel::from_payload(7), None);
    }

    #[test]
    fn test_filter_check_reads_bit_five() {
        assert!(filter_check(0x20));
        assert!(filter_check(0x00F4 | 0x20));
        assert!(!filter_check(0x1F));
        assert!(!filter_check(0x00DF));
    }

    #[test]
    fn test_byte_pair_round_trip() {
        assert_eq!(u8_pair(18, 2), 0x1202);
        assert_eq!(split_payload(0x1202), (18, 2));
        assert_eq!(split_payload(u8_pair(0xFF, 0x01)), (0xFF, 0x01));
    }
}
