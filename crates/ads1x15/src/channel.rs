use crate::registers::{self, mux_single};

/// Single-ended input channels.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Channel {
    CH0 = 0,
    CH1 = 1,
    CH2 = 2,
    CH3 = 3,
}

impl Channel {
    /// Iterate over all channels.
    pub fn all() -> impl Iterator<Item = Self> {
        [Self::CH0, Self::CH1, Self::CH2, Self::CH3].into_iter()
    }

    /// MUX field bits selecting this input against GND.
    pub const fn mux(self) -> u16 {
        mux_single(self as u8)
    }
}

impl TryFrom<u8> for Channel {
    type Error = u8;

    /// Indices above 3 are handed back unchanged.
    fn try_from(channel: u8) -> Result<Self, Self::Error> {
        match channel {
            0 => Ok(Self::CH0),
            1 => Ok(Self::CH1),
            2 => Ok(Self::CH2),
            3 => Ok(Self::CH3),
            _ => Err(channel),
        }
    }
}

/// Differential input pairs, positive input first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum DifferentialPair {
    /// P = AIN0, N = AIN1
    Ain0Ain1 = registers::MUX_DIFF_0_1,
    /// P = AIN0, N = AIN3
    Ain0Ain3 = registers::MUX_DIFF_0_3,
    /// P = AIN1, N = AIN3
    Ain1Ain3 = registers::MUX_DIFF_1_3,
    /// P = AIN2, N = AIN3
    Ain2Ain3 = registers::MUX_DIFF_2_3,
}

impl DifferentialPair {
    /// Iterate over all pairs.
    pub fn all() -> impl Iterator<Item = Self> {
        [Self::Ain0Ain1, Self::Ain0Ain3, Self::Ain1Ain3, Self::Ain2Ain3].into_iter()
    }

    /// MUX field bits selecting this pair.
    pub const fn mux(self) -> u16 {
        self as u16
    }
}
