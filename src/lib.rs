//! Command line configuration and sampling loop shared by the `pi` binary.

use ads1x15::{Ads1x15, DifferentialPair, Gain, Variant};
use clap::{Parser, Subcommand, ValueEnum};
use embedded_hal::{delay::DelayNs, i2c::I2c};
use log::{debug, info};

/// Sample an ADS1015/ADS1115 over I2C.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// I2C bus number
    #[arg(long, default_value_t = 1)]
    pub bus: u8,

    /// Chip variant
    #[arg(long, value_enum, default_value_t = VariantArg::Ads1115)]
    pub variant: VariantArg,

    /// Chip address, decimal or 0x-prefixed hex
    #[arg(long, value_parser = parse_address, default_value = "0x48")]
    pub address: u8,

    /// Full-scale range
    #[arg(long, value_enum, default_value_t = GainArg::TwoThirds)]
    pub gain: GainArg,

    /// Time between samples in milliseconds
    #[arg(long, default_value_t = 500)]
    pub interval_ms: u64,

    /// Stop after this many samples
    #[arg(long)]
    pub count: Option<u64>,

    #[command(subcommand)]
    pub mode: Mode,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Single-ended conversions against GND
    Single {
        /// Input channel, 0-3
        #[arg(long)]
        channel: u8,
    },
    /// Differential conversions
    Differential {
        #[arg(long, value_enum, default_value_t = PairArg::Ain0Ain1)]
        pair: PairArg,
    },
    /// Continuous comparator mode, polled
    Comparator {
        /// Input channel, 0-3
        #[arg(long)]
        channel: u8,

        /// High threshold in raw result codes
        #[arg(long, allow_negative_numbers = true)]
        threshold: i16,

        /// Sign-extend polled results
        #[arg(long)]
        signed: bool,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantArg {
    Ads1015,
    Ads1115,
}

impl From<VariantArg> for Variant {
    fn from(variant: VariantArg) -> Self {
        match variant {
            VariantArg::Ads1015 => Variant::Ads1015,
            VariantArg::Ads1115 => Variant::Ads1115,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GainArg {
    TwoThirds,
    One,
    Two,
    Four,
    Eight,
    Sixteen,
}

impl From<GainArg> for Gain {
    fn from(gain: GainArg) -> Self {
        match gain {
            GainArg::TwoThirds => Gain::TwoThirds,
            GainArg::One => Gain::One,
            GainArg::Two => Gain::Two,
            GainArg::Four => Gain::Four,
            GainArg::Eight => Gain::Eight,
            GainArg::Sixteen => Gain::Sixteen,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairArg {
    #[value(name = "0-1")]
    Ain0Ain1,
    #[value(name = "0-3")]
    Ain0Ain3,
    #[value(name = "1-3")]
    Ain1Ain3,
    #[value(name = "2-3")]
    Ain2Ain3,
}

impl From<PairArg> for DifferentialPair {
    fn from(pair: PairArg) -> Self {
        match pair {
            PairArg::Ain0Ain1 => DifferentialPair::Ain0Ain1,
            PairArg::Ain0Ain3 => DifferentialPair::Ain0Ain3,
            PairArg::Ain1Ain3 => DifferentialPair::Ain1Ain3,
            PairArg::Ain2Ain3 => DifferentialPair::Ain2Ain3,
        }
    }
}

fn parse_address(s: &str) -> Result<u8, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => s.parse(),
    };

    match parsed {
        Ok(address) if address <= 0x7F => Ok(address),
        Ok(address) => Err(format!("{address:#04x} is not a 7-bit address")),
        Err(error) => Err(error.to_string()),
    }
}

/// Build a driver from the command line settings.
pub fn open<I2C: I2c, D: DelayNs>(args: &Args, i2c: I2C, delay: D) -> Ads1x15<I2C, D> {
    let mut adc = Ads1x15::with_address(args.variant.into(), i2c, delay, args.address);
    adc.set_gain(args.gain.into());
    adc
}

/// Takes samples according to a [`Mode`]. Comparator mode is armed on the first sample.
pub struct Sampler {
    mode: Mode,
    armed: bool,
}

impl Sampler {
    pub fn new(mode: Mode) -> Self {
        Self { mode, armed: false }
    }

    /// Take one sample.
    pub fn sample<I2C: I2c, D: DelayNs>(
        &mut self,
        adc: &mut Ads1x15<I2C, D>,
    ) -> Result<i16, ads1x15::Error<I2C::Error>> {
        match self.mode {
            Mode::Single { channel } => adc.read_channel(channel),
            Mode::Differential { pair } => adc.read_differential(pair.into()),
            Mode::Comparator {
                channel,
                threshold,
                signed,
            } => {
                if !self.armed {
                    adc.start_comparator_channel(channel, threshold)?;
                    self.armed = true;

                    debug!("comparator armed on channel {channel} above {threshold}");
                }

                if signed {
                    adc.poll_comparator_result_signed()
                } else {
                    adc.poll_comparator_result()
                }
            }
        }
    }
}

/// Sample until `count` runs out, calling `wait` between samples.
pub fn run<I2C, D, W>(
    adc: &mut Ads1x15<I2C, D>,
    mode: Mode,
    count: Option<u64>,
    mut wait: W,
) -> Result<(), ads1x15::Error<I2C::Error>>
where
    I2C: I2c,
    D: DelayNs,
    W: FnMut(),
{
    let mut sampler = Sampler::new(mode);
    let mut taken = 0;

    while count.map_or(true, |count| taken < count) {
        let sample = sampler.sample(adc)?;
        taken += 1;

        info!("{mode:?}: {sample}");

        wait();
    }

    Ok(())
}
