//! Frame construction, field access and validity checking.
//!
//! A frame is an opaque `u32`; no frame owns resources and all operations
//! are pure bit arithmetic, so everything here is `const` and `Copy`.

/// Message type codes carried in bits 28..30 of every frame.
///
/// The master only ever sends `ReadData` and `WriteData`; a well-behaved
/// slave answers with `ReadAck`, `WriteAck`, `DataInvalid` or
/// `UnknownDataId`. The remaining codes exist on the wire but are never
/// accepted as valid responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MessageType {
    /// Master reads the addressed data item
    ReadData = 0b000,
    /// Master writes the addressed data item
    WriteData = 0b001,
    /// Master flags the data item as invalid
    InvalidData = 0b010,
    /// Reserved by the protocol
    Reserved = 0b011,
    /// Slave acknowledges a read, payload carries the value
    ReadAck = 0b100,
    /// Slave acknowledges a write
    WriteAck = 0b101,
    /// Slave rejects the payload value
    DataInvalid = 0b110,
    /// Slave does not know the data-id
    UnknownDataId = 0b111,
}

impl MessageType {
    /// Decode a 3-bit type field. Only the low three bits are considered.
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0b111 {
            0b000 => Self::ReadData,
            0b001 => Self::WriteData,
            0b010 => Self::InvalidData,
            0b011 => Self::Reserved,
            0b100 => Self::ReadAck,
            0b101 => Self::WriteAck,
            0b110 => Self::DataInvalid,
            _ => Self::UnknownDataId,
        }
    }

    /// The 3-bit wire code.
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// True for the two acknowledge codes a valid response must carry.
    pub const fn is_ack(self) -> bool {
        matches!(self, Self::ReadAck | Self::WriteAck)
    }
}

/// True if the population count of set bits in `value` is odd.
///
/// This is the raw parity primitive. Note the convention it implies: a
/// *well-formed* frame returns `false` here, because the builder sets
/// bit 31 precisely so the total count of set bits comes out even. Slaves
/// in the field depend on this exact bit pattern; do not invert it.
pub const fn parity(value: u32) -> bool {
    value.count_ones() % 2 == 1
}

/// A single 32-bit OpenTherm frame.
///
/// Layout (MSB to LSB): 1 parity bit, 3-bit message type, 4 spare bits,
/// 8-bit data-id, 16-bit data value. See the crate docs for the diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame(u32);

impl Frame {
    /// Wrap a raw 32-bit word without touching it.
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// The raw 32-bit word.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Build a frame from its fields and inject the parity bit.
    ///
    /// `value` lands in bits 0..15, `data_id` in bits 16..23 and the
    /// message type in bits 28..30; bit 31 is then set if the other 31
    /// bits have an odd population count, making the total even.
    pub const fn new(msg_type: MessageType, data_id: u8, value: u16) -> Self {
        let mut word =
            (value as u32) | ((data_id as u32) << 16) | ((msg_type.bits() as u32) << 28);
        if parity(word) {
            word |= 1 << 31;
        }
        Self(word)
    }

    /// Master read request for `data_id`.
    ///
    /// Most reads carry `value = 0`, but some (status, transparent slave
    /// parameters) pass master data or an index in the request payload.
    pub const fn read_request(data_id: u8, value: u16) -> Self {
        Self::new(MessageType::ReadData, data_id, value)
    }

    /// Master write request for `data_id`.
    pub const fn write_request(data_id: u8, value: u16) -> Self {
        Self::new(MessageType::WriteData, data_id, value)
    }

    /// The parity bit (bit 31).
    pub const fn parity_bit(self) -> bool {
        self.0 >> 31 == 1
    }

    /// The message type field (bits 28..30).
    pub const fn msg_type(self) -> MessageType {
        MessageType::from_bits((self.0 >> 28) as u8)
    }

    /// The four spare bits (bits 24..27). Zero on every conforming frame.
    pub const fn spare(self) -> u8 {
        ((self.0 >> 24) & 0x0F) as u8
    }

    /// The data-item identifier (bits 16..23).
    pub const fn data_id(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// The 16-bit data value (bits 0..15).
    pub const fn value(self) -> u16 {
        self.0 as u16
    }

    /// Frame-level validity check for a slave response.
    ///
    /// Requires even overall parity (the set-bit count of the whole word,
    /// parity bit included, must be even) and an acknowledge message type.
    /// Garbled frames and protocol violations fail this check; the wire
    /// offers no finer diagnosis.
    pub const fn is_valid_response(self) -> bool {
        if parity(self.0) {
            return false;
        }
        self.msg_type().is_ack()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parity_known_values() {
        assert!(!parity(0));
        assert!(parity(1));
        assert!(parity(0x8000_0000));
        assert!(!parity(0x8000_0001));
        assert!(!parity(0xFFFF_FFFF)); // 32 set bits, even
    }

    #[test]
    fn test_build_tset_write_request() {
        // TSet = 21.5 C: value 0x1580, id 1, write. Six set bits in the
        // low 31, so the parity bit stays clear.
        let frame = Frame::write_request(1, 0x1580);
        assert_eq!(frame.bits(), 0x1001_1580);
        assert!(!frame.parity_bit());
        assert_eq!(frame.msg_type(), MessageType::WriteData);
        assert_eq!(frame.data_id(), 1);
        assert_eq!(frame.value(), 0x1580);
        assert_eq!(frame.spare(), 0);
        assert!(!parity(frame.bits()));
    }

    #[test]
    fn test_build_injects_parity_bit() {
        // READ of id 0 with value 1 has a single set bit, so bit 31 must
        // be injected to even the count out.
        let frame = Frame::read_request(0, 1);
        assert_eq!(frame.bits(), 0x8000_0001);
        assert!(frame.parity_bit());
        assert!(!parity(frame.bits()));
    }

    #[test]
    fn test_requests_are_not_valid_responses() {
        assert!(!Frame::read_request(0, 0).is_valid_response());
        assert!(!Frame::write_request(1, 0x1580).is_valid_response());
    }

    #[test]
    fn test_ack_frames_are_valid_responses() {
        assert!(Frame::new(MessageType::ReadAck, 0, 0x0302).is_valid_response());
        assert!(Frame::new(MessageType::WriteAck, 1, 0x1580).is_valid_response());
    }

    #[test]
    fn test_error_replies_are_not_valid_responses() {
        assert!(!Frame::new(MessageType::DataInvalid, 7, 0).is_valid_response());
        assert!(!Frame::new(MessageType::UnknownDataId, 99, 0).is_valid_response());
    }

    #[test]
    fn test_odd_parity_word_is_invalid() {
        // A read-ack with a forged parity bit.
        let good = Frame::new(MessageType::ReadAck, 25, 0x1234);
        let forged = Frame::from_bits(good.bits() ^ (1 << 31));
        assert!(!forged.is_valid_response());
    }

    #[test]
    fn test_message_type_round_trip() {
        for bits in 0..8u8 {
            assert_eq!(MessageType::from_bits(bits).bits(), bits);
        }
        // Only the low three bits matter.
        assert_eq!(MessageType::from_bits(0b1100), MessageType::ReadAck);
    }

    #[test]
    fn test_field_extraction_from_raw_word() {
        let frame = Frame::from_bits(0x4019_0AFF);
        assert_eq!(frame.msg_type(), MessageType::ReadAck);
        assert_eq!(frame.data_id(), 0x19);
        assert_eq!(frame.value(), 0x0AFF);
        assert!(!frame.parity_bit());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn parity_equals_popcount_mod_two(value in any::<u32>()) {
            prop_assert_eq!(parity(value), value.count_ones() % 2 == 1);
        }

        #[test]
        fn parity_is_invariant_under_bit_reversal(value in any::<u32>()) {
            prop_assert_eq!(parity(value), parity(value.reverse_bits()));
        }

        #[test]
        fn built_frames_always_have_even_parity(
            write in any::<bool>(),
            id in any::<u8>(),
            value in any::<u16>(),
        ) {
            let frame = if write {
                Frame::write_request(id, value)
            } else {
                Frame::read_request(id, value)
            };
            prop_assert!(!parity(frame.bits()));
            prop_assert_eq!(frame.data_id(), id);
            prop_assert_eq!(frame.value(), value);
        }

        #[test]
        fn ack_validity_depends_only_on_parity_bit(
            write_ack in any::<bool>(),
            id in any::<u8>(),
            value in any::<u16>(),
            flip in 0..16u32,
        ) {
            let msg_type = if write_ack {
                MessageType::WriteAck
            } else {
                MessageType::ReadAck
            };
            // Valid for any payload content.
            let frame = Frame::new(msg_type, id, value);
            prop_assert!(frame.is_valid_response());
            // Flipping a payload bit and rebuilding re-injects parity and
            // must still validate.
            let rebuilt = Frame::new(msg_type, id, value ^ (1 << flip));
            prop_assert!(rebuilt.is_valid_response());
        }

        #[test]
        fn single_bit_corruption_is_always_caught(
            id in any::<u8>(),
            value in any::<u16>(),
            flip in 0..32u32,
        ) {
            let frame = Frame::new(MessageType::ReadAck, id, value);
            let corrupted = Frame::from_bits(frame.bits() ^ (1 << flip));
            prop_assert!(!corrupted.is_valid_response());
        }
    }
}
