//! OpenTherm data-item identifiers.
//!
//! The 8-bit id in bits 16..23 of a frame selects one of these data
//! points. The comment on each constant gives the payload format: `flag8`
//! is a bit field in one byte, `u8 / u8` a high/low byte pair, `f8.8`
//! fixed point with 8 fractional bits, `u16`/`s16` plain integers. Ids
//! 70..91 belong to the home-ventilation / heat-recovery extension.

/// flag8 / flag8  Master and slave status flags
pub const STATUS: u8 = 0;
/// f8.8  Control setpoint, CH water temperature setpoint (°C)
pub const T_SET: u8 = 1;
/// flag8 / u8  Master configuration flags / master member-id code
pub const M_CONFIG_M_MEMBER_ID: u8 = 2;
/// flag8 / u8  Slave configuration flags / slave member-id code
pub const S_CONFIG_S_MEMBER_ID: u8 = 3;
/// u8 / u8  Remote command
pub const COMMAND: u8 = 4;
/// flag8 / u8  Application-specific fault flags and OEM fault code
pub const ASF_FLAGS: u8 = 5;
/// flag8 / flag8  Remote boiler parameter transfer-enable and read/write flags
pub const RBP_FLAGS: u8 = 6;
/// f8.8  Cooling control signal (%)
pub const COOLING_CONTROL: u8 = 7;
/// f8.8  Control setpoint for the second CH circuit (°C)
pub const T_SET_CH2: u8 = 8;
/// f8.8  Remote override room setpoint
pub const TR_OVERRIDE: u8 = 9;
/// u8 / u8  Number of transparent slave parameters supported
pub const TSP: u8 = 10;
/// u8 / u8  Transparent slave parameter index / value
pub const TSP_INDEX_VALUE: u8 = 11;
/// u8 / u8  Size of the fault history buffer
pub const FHB_SIZE: u8 = 12;
/// u8 / u8  Fault history buffer entry index / value
pub const FHB_INDEX_VALUE: u8 = 13;
/// f8.8  Maximum relative modulation level setting (%)
pub const MAX_REL_MOD_LEVEL_SETTING: u8 = 14;
/// u8 / u8  Maximum boiler capacity (kW) / minimum modulation level (%)
pub const MAX_CAPACITY_MIN_MOD_LEVEL: u8 = 15;
/// f8.8  Room setpoint (°C)
pub const TR_SET: u8 = 16;
/// f8.8  Relative modulation level (%)
pub const REL_MOD_LEVEL: u8 = 17;
/// f8.8  Water pressure in the CH circuit (bar)
pub const CH_PRESSURE: u8 = 18;
/// f8.8  Water flow rate in the DHW circuit (litres/minute)
pub const DHW_FLOW_RATE: u8 = 19;
/// special / u8  Day of week and time of day
pub const DAY_TIME: u8 = 20;
/// u8 / u8  Calendar date
pub const DATE: u8 = 21;
/// u16  Calendar year
pub const YEAR: u8 = 22;
/// f8.8  Room setpoint for the second CH circuit (°C)
pub const TR_SET_CH2: u8 = 23;
/// f8.8  Room temperature (°C)
pub const TR: u8 = 24;
/// f8.8  Boiler flow water temperature (°C)
pub const T_BOILER: u8 = 25;
/// f8.8  DHW temperature (°C)
pub const T_DHW: u8 = 26;
/// f8.8  Outside temperature (°C)
pub const T_OUTSIDE: u8 = 27;
/// f8.8  Return water temperature (°C)
pub const T_RET: u8 = 28;
/// f8.8  Solar storage temperature (°C)
pub const T_STORAGE: u8 = 29;
/// f8.8  Solar collector temperature (°C)
pub const T_COLLECTOR: u8 = 30;
/// f8.8  Flow water temperature of the second CH circuit (°C)
pub const T_FLOW_CH2: u8 = 31;
/// f8.8  Second domestic hot water temperature (°C)
pub const T_DHW2: u8 = 32;
/// s16  Boiler exhaust temperature (°C)
pub const T_EXHAUST: u8 = 33;
/// s8 / s8  DHW setpoint upper and lower adjustment bounds (°C)
pub const T_DHW_SET_BOUNDS: u8 = 48;
/// s8 / s8  Max CH water setpoint upper and lower adjustment bounds (°C)
pub const MAX_T_SET_BOUNDS: u8 = 49;
/// s8 / s8  OTC heat curve ratio upper and lower adjustment bounds
pub const HC_RATIO_BOUNDS: u8 = 50;
/// f8.8  DHW setpoint (°C), remote parameter 1
pub const T_DHW_SET: u8 = 56;
/// f8.8  Max CH water setpoint (°C), remote parameter 2
pub const MAX_T_SET: u8 = 57;
/// f8.8  OTC heat curve ratio, remote parameter 3
pub const HC_RATIO: u8 = 58;
/// flag8 / flag8  Ventilation master and slave status flags
pub const STATUS_VH: u8 = 70;
/// u8  Ventilation control setpoint (0 off, 1 reduced, 2 normal, 3 high)
pub const CONTROL_SETPOINT_VH: u8 = 71;
/// flag8 / u8  Ventilation fault flags and code
pub const FAULT_FLAGS_VH: u8 = 72;
/// u16  Ventilation diagnostic code
pub const DIAGNOSTIC_CODE_VH: u8 = 73;
/// flag8 / u8  Ventilation configuration flags / member-id code
pub const CONFIGURATION_MEMBER_ID_VH: u8 = 74;
/// u8  Relative ventilation (%)
pub const RELATIVE_VENTILATION_VH: u8 = 77;
/// u8  Relative humidity (%)
pub const RELATIVE_HUMIDITY_VH: u8 = 78;
/// u16  CO2 level (ppm)
pub const CO2_LEVEL_VH: u8 = 79;
/// f8.8  Supply inlet temperature (°C)
pub const T_SUPPLY_INLET_VH: u8 = 80;
/// f8.8  Supply outlet temperature (°C)
pub const T_SUPPLY_OUTLET_VH: u8 = 81;
/// f8.8  Exhaust inlet temperature (°C)
pub const T_EXHAUST_INLET_VH: u8 = 82;
/// f8.8  Exhaust outlet temperature (°C)
pub const T_EXHAUST_OUTLET_VH: u8 = 83;
/// u16  Exhaust fan speed (rpm)
pub const EXHAUST_FAN_SPEED_VH: u8 = 84;
/// u16  Inlet fan speed (rpm)
pub const INLET_FAN_SPEED_VH: u8 = 85;
/// flag8  Ventilation remote parameter transfer-enable flags
pub const VH_REMOTE_PARAMETER: u8 = 86;
/// u8  Nominal ventilation value (%)
pub const NOMINAL_VENTILATION_VH: u8 = 87;
/// u8 / u8  Number of ventilation transparent slave parameters
pub const TSP_SIZE_VH: u8 = 88;
/// u8 / u8  Ventilation transparent slave parameter index / value
pub const TSP_SETTINGS_VH: u8 = 89;
/// u8  Size of the ventilation fault history buffer
pub const FHB_SIZE_VH: u8 = 90;
/// u8 / u8  Ventilation fault history buffer entry index / value
pub const FHB_INDEX_VH: u8 = 91;
/// flag8  Function of manual and program changes of the room setpoint
pub const REMOTE_OVERRIDE_FUNCTION: u8 = 100;
/// u16  OEM-specific diagnostic or service code
pub const OEM_DIAGNOSTIC_CODE: u8 = 115;
/// u16  Number of burner starts
pub const BURNER_STARTS: u8 = 116;
/// u16  Number of CH pump starts
pub const CH_PUMP_STARTS: u8 = 117;
/// u16  Number of DHW pump or valve starts
pub const DHW_PUMP_VALVE_STARTS: u8 = 118;
/// u16  Number of burner starts in DHW mode
pub const DHW_BURNER_STARTS: u8 = 119;
/// u16  Hours of burner operation (flame on)
pub const BURNER_OPERATION_HOURS: u8 = 120;
/// u16  Hours of CH pump operation
pub const CH_PUMP_OPERATION_HOURS: u8 = 121;
/// u16  Hours of DHW pump operation or DHW valve open
pub const DHW_PUMP_VALVE_OPERATION_HOURS: u8 = 122;
/// u16  Hours of burner operation in DHW mode
pub const DHW_BURNER_OPERATION_HOURS: u8 = 123;
/// f8.8  OpenTherm protocol version implemented by the master
pub const OPENTHERM_VERSION_MASTER: u8 = 124;
/// f8.8  OpenTherm protocol version implemented by the slave
pub const OPENTHERM_VERSION_SLAVE: u8 = 125;
/// u8 / u8  Master product version number and type
pub const MASTER_VERSION: u8 = 126;
/// u8 / u8  Slave product version number and type
pub const SLAVE_VERSION: u8 = 127;
