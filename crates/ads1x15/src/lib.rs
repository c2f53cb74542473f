//! Provides a driver for the Texas Instruments ADS1015/ADS1115 ADCs via the `embedded-hal` ecosystem.
//!
//! Both chips share a register map. The ADS1015 returns 12 bit results packed into the top of the
//! 16 bit conversion register and converts in about 1ms. The ADS1115 returns full 16 bit results
//! and needs up to 8ms. [`Variant`] captures the difference.

#![cfg_attr(not(test), no_std)]
#![forbid(unsafe_code)]

pub mod registers;

mod channel;
mod driver;
mod error;

#[cfg(test)]
mod mock;

pub use channel::{Channel, DifferentialPair};
pub use driver::Ads1x15;
pub use error::Error;

/// Bus address with the ADDR pin tied to GND.
pub const DEFAULT_ADDRESS: u8 = 0x48;

/// Chip variant, selecting the conversion delay and result alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// 12 bit, 1ms conversion.
    Ads1015,
    /// 16 bit, 8ms conversion.
    Ads1115,
}

impl Variant {
    /// Worst case time from starting a conversion to the result being readable.
    pub const fn conversion_delay_ms(self) -> u32 {
        match self {
            Self::Ads1015 => 1,
            Self::Ads1115 => 8,
        }
    }

    /// Right shift applied to the conversion register.
    pub const fn bit_shift(self) -> u8 {
        match self {
            Self::Ads1015 => 4,
            Self::Ads1115 => 0,
        }
    }

    /// Number of significant result bits.
    pub const fn resolution_bits(self) -> u8 {
        16 - self.bit_shift()
    }
}

/// PGA setting. Selects the full-scale input range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u16)]
pub enum Gain {
    /// +/-6.144V
    #[default]
    TwoThirds = registers::PGA_6_144V,
    /// +/-4.096V
    One = registers::PGA_4_096V,
    /// +/-2.048V
    Two = registers::PGA_2_048V,
    /// +/-1.024V
    Four = registers::PGA_1_024V,
    /// +/-0.512V
    Eight = registers::PGA_0_512V,
    /// +/-0.256V
    Sixteen = registers::PGA_0_256V,
}

impl Gain {
    /// Iterate over all gain settings, widest range first.
    pub fn all() -> impl Iterator<Item = Self> {
        [
            Self::TwoThirds,
            Self::One,
            Self::Two,
            Self::Four,
            Self::Eight,
            Self::Sixteen,
        ]
        .into_iter()
    }

    /// PGA field bits for the config register.
    pub const fn bits(self) -> u16 {
        self as u16
    }
}

impl TryFrom<u16> for Gain {
    type Error = u16;

    /// Only the six documented PGA patterns are accepted, the unmasked value is handed back otherwise.
    fn try_from(bits: u16) -> Result<Self, Self::Error> {
        Self::all().find(|gain| gain.bits() == bits).ok_or(bits)
    }
}
