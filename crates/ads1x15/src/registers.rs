//! Register pointers and config register field values for the ADS1x15 family.
//!
//! Every config field occupies its own bit range, see the `*_MASK` constants.
//! A config word is built by OR-ing one value from each field.

/// Conversion result register.
pub const POINTER_CONVERT: u8 = 0x00;
/// Config register.
pub const POINTER_CONFIG: u8 = 0x01;
/// Comparator low threshold register.
pub const POINTER_LOWTHRESH: u8 = 0x02;
/// Comparator high threshold register.
pub const POINTER_HITHRESH: u8 = 0x03;
#[allow(missing_docs)]
pub const POINTER_MASK: u8 = 0x03;

// Operational status / single-shot start (bit 15)
#[allow(missing_docs)]
pub const OS_MASK: u16 = 0x8000;
/// Write: start a single conversion.
pub const OS_SINGLE: u16 = 0x8000;
/// Read: a conversion is in progress.
pub const OS_BUSY: u16 = 0x0000;
/// Read: the device is idle.
pub const OS_NOTBUSY: u16 = 0x8000;

// Input multiplexer (bits 14-12)
#[allow(missing_docs)]
pub const MUX_MASK: u16 = 0x7000;
/// P = AIN0, N = AIN1 (power-on default).
pub const MUX_DIFF_0_1: u16 = 0x0000;
/// P = AIN0, N = AIN3.
pub const MUX_DIFF_0_3: u16 = 0x1000;
/// P = AIN1, N = AIN3.
pub const MUX_DIFF_1_3: u16 = 0x2000;
/// P = AIN2, N = AIN3.
pub const MUX_DIFF_2_3: u16 = 0x3000;
/// Single-ended AIN0. AIN1-3 follow in steps of [`MUX_CHANNEL_STEP`].
pub const MUX_SINGLE_0: u16 = 0x4000;
#[allow(missing_docs)]
pub const MUX_SINGLE_1: u16 = 0x5000;
#[allow(missing_docs)]
pub const MUX_SINGLE_2: u16 = 0x6000;
#[allow(missing_docs)]
pub const MUX_SINGLE_3: u16 = 0x7000;
/// Distance between consecutive single-ended MUX codes.
pub const MUX_CHANNEL_STEP: u16 = 0x1000;

// Programmable gain amplifier (bits 11-9)
#[allow(missing_docs)]
pub const PGA_MASK: u16 = 0x0E00;
/// +/-6.144V, gain 2/3.
pub const PGA_6_144V: u16 = 0x0000;
/// +/-4.096V, gain 1.
pub const PGA_4_096V: u16 = 0x0200;
/// +/-2.048V, gain 2 (power-on default).
pub const PGA_2_048V: u16 = 0x0400;
/// +/-1.024V, gain 4.
pub const PGA_1_024V: u16 = 0x0600;
/// +/-0.512V, gain 8.
pub const PGA_0_512V: u16 = 0x0800;
/// +/-0.256V, gain 16.
pub const PGA_0_256V: u16 = 0x0A00;

// Operating mode (bit 8)
#[allow(missing_docs)]
pub const MODE_MASK: u16 = 0x0100;
/// Continuous conversion.
pub const MODE_CONTIN: u16 = 0x0000;
/// Power-down single-shot (power-on default).
pub const MODE_SINGLE: u16 = 0x0100;

// Data rate (bits 7-5), ADS1015 rates
#[allow(missing_docs)]
pub const DR_MASK: u16 = 0x00E0;
#[allow(missing_docs)]
pub const DR_128SPS: u16 = 0x0000;
#[allow(missing_docs)]
pub const DR_250SPS: u16 = 0x0020;
#[allow(missing_docs)]
pub const DR_490SPS: u16 = 0x0040;
#[allow(missing_docs)]
pub const DR_920SPS: u16 = 0x0060;
/// Power-on default.
pub const DR_1600SPS: u16 = 0x0080;
#[allow(missing_docs)]
pub const DR_2400SPS: u16 = 0x00A0;
#[allow(missing_docs)]
pub const DR_3300SPS: u16 = 0x00C0;

// Comparator mode (bit 4)
#[allow(missing_docs)]
pub const CMODE_MASK: u16 = 0x0010;
/// Traditional comparator with hysteresis (power-on default).
pub const CMODE_TRAD: u16 = 0x0000;
/// Window comparator.
pub const CMODE_WINDOW: u16 = 0x0010;

// Comparator polarity (bit 3)
#[allow(missing_docs)]
pub const CPOL_MASK: u16 = 0x0008;
/// ALERT/RDY low when active (power-on default).
pub const CPOL_ACTVLOW: u16 = 0x0000;
/// ALERT/RDY high when active.
pub const CPOL_ACTVHI: u16 = 0x0008;

// Comparator latch (bit 2)
#[allow(missing_docs)]
pub const CLAT_MASK: u16 = 0x0004;
/// Non-latching (power-on default).
pub const CLAT_NONLAT: u16 = 0x0000;
/// ALERT/RDY stays asserted until the conversion register is read.
pub const CLAT_LATCH: u16 = 0x0004;

// Comparator queue (bits 1-0)
#[allow(missing_docs)]
pub const CQUE_MASK: u16 = 0x0003;
/// Assert after one conversion.
pub const CQUE_1CONV: u16 = 0x0000;
/// Assert after two conversions.
pub const CQUE_2CONV: u16 = 0x0001;
/// Assert after four conversions.
pub const CQUE_4CONV: u16 = 0x0002;
/// Comparator disabled, ALERT/RDY high (power-on default).
pub const CQUE_NONE: u16 = 0x0003;

/// Base config for single-shot single-ended and differential conversions.
pub const SINGLE_SHOT_BASE: u16 =
    CQUE_NONE | CLAT_NONLAT | CPOL_ACTVLOW | CMODE_TRAD | DR_1600SPS | MODE_SINGLE;

/// Base config for comparator mode: continuous conversion, latching, asserting on one match.
pub const COMPARATOR_BASE: u16 =
    CQUE_1CONV | CLAT_LATCH | CPOL_ACTVLOW | CMODE_TRAD | DR_1600SPS | MODE_CONTIN;

/// Every field mask, most significant first.
pub const FIELD_MASKS: [u16; 9] = [
    OS_MASK, MUX_MASK, PGA_MASK, MODE_MASK, DR_MASK, CMODE_MASK, CPOL_MASK, CLAT_MASK, CQUE_MASK,
];

/// MUX code for single-ended input `channel`. Callers must keep `channel` in 0..=3.
pub(crate) const fn mux_single(channel: u8) -> u16 {
    channel as u16 * MUX_CHANNEL_STEP + MUX_SINGLE_0
}

/// Extract the field selected by `mask` from a config word, left in place.
pub const fn field(word: u16, mask: u16) -> u16 {
    word & mask
}
