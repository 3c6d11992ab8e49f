//! Ready-made request frames for the common boiler and ventilation
//! operations.
//!
//! These are pure builders; hand the resulting [`Frame`] to the link
//! layer's `exchange`/`send_request` to actually run the exchange.

use crate::data_id;
use crate::frame::Frame;
use crate::payload::{encode_temperature, u8_pair, MasterStatus, VentilationLevel};

/// Status exchange: reports the master flags, reads back the slave flags.
pub const fn boiler_status(status: MasterStatus) -> Frame {
    Frame::read_request(data_id::STATUS, status.to_payload())
}

/// Write the CH water temperature setpoint in °C (clamped to [0, 100]).
pub fn set_boiler_temperature(celsius: f32) -> Frame {
    Frame::write_request(data_id::T_SET, encode_temperature(celsius))
}

/// Read the boiler flow water temperature.
pub const fn boiler_temperature() -> Frame {
    Frame::read_request(data_id::T_BOILER, 0)
}

/// Status exchange with a ventilation / heat-recovery unit.
pub const fn ventilation_status() -> Frame {
    Frame::read_request(data_id::STATUS_VH, 0)
}

/// Write the ventilation setpoint level.
pub const fn set_ventilation_level(level: VentilationLevel) -> Frame {
    Frame::write_request(data_id::CONTROL_SETPOINT_VH, level.to_payload())
}

/// Read one ventilation transparent-slave-parameter by index.
pub const fn ventilation_tsp_setting(index: u8) -> Frame {
    Frame::read_request(data_id::TSP_SETTINGS_VH, index as u16)
}

/// Write the master configuration flags and member-id code.
pub const fn set_master_configuration(flags: u8, member_id: u8) -> Frame {
    Frame::write_request(data_id::M_CONFIG_M_MEMBER_ID, u8_pair(flags, member_id))
}

/// Announce the master product version number and type.
pub const fn set_master_product_version(number: u8, kind: u8) -> Frame {
    Frame::write_request(data_id::MASTER_VERSION, u8_pair(number, kind))
}

/// Read the slave product version number and type.
pub const fn slave_product_version() -> Frame {
    Frame::read_request(data_id::SLAVE_VERSION, 0)
}

/// Read the ventilation configuration flags and member-id code.
pub const fn ventilation_member_id() -> Frame {
    Frame::read_request(data_id::CONFIGURATION_MEMBER_ID_VH, 0)
}

/// Read the relative ventilation level in percent.
pub const fn relative_ventilation() -> Frame {
    Frame::read_request(data_id::RELATIVE_VENTILATION_VH, 0)
}

/// Read the supply inlet temperature of a heat-recovery unit.
pub const fn supply_inlet_temperature() -> Frame {
    Frame::read_request(data_id::T_SUPPLY_INLET_VH, 0)
}

/// Read the supply outlet temperature of a heat-recovery unit.
pub const fn supply_outlet_temperature() -> Frame {
    Frame::read_request(data_id::T_SUPPLY_OUTLET_VH, 0)
}

/// Read the exhaust inlet temperature of a heat-recovery unit.
pub const fn exhaust_inlet_temperature() -> Frame {
    Frame::read_request(data_id::T_EXHAUST_INLET_VH, 0)
}

/// Read the exhaust outlet temperature of a heat-recovery unit.
pub const fn exhaust_outlet_temperature() -> Frame {
    Frame::read_request(data_id::T_EXHAUST_OUTLET_VH, 0)
}
