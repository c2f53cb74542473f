use embedded_hal::{delay::DelayNs, i2c::I2c};
use log::{debug, trace};

use crate::registers::{
    COMPARATOR_BASE, OS_SINGLE, POINTER_CONFIG, POINTER_CONVERT, POINTER_HITHRESH,
    SINGLE_SHOT_BASE,
};
use crate::{Channel, DifferentialPair, Error, Gain, Variant, DEFAULT_ADDRESS};

/// ADS1015/ADS1115 driver.
///
/// Owns the bus handle for its lifetime. Every read blocks for the variant's conversion delay.
pub struct Ads1x15<I2C, D> {
    i2c: I2C,
    delay: D,
    address: u8,
    variant: Variant,
    gain: Gain,
}

impl<I2C: I2c, D: DelayNs> Ads1x15<I2C, D> {
    /// Creates a new driver at [`DEFAULT_ADDRESS`].
    pub fn new(variant: Variant, i2c: I2C, delay: D) -> Self {
        Self::with_address(variant, i2c, delay, DEFAULT_ADDRESS)
    }

    /// Creates a new driver for a chip at `address`.
    pub fn with_address(variant: Variant, i2c: I2C, delay: D, address: u8) -> Self {
        debug!("{variant:?} at {address:#04x}");

        Self {
            i2c,
            delay,
            address,
            variant,
            gain: Gain::default(),
        }
    }

    /// Creates a new ADS1015 driver at [`DEFAULT_ADDRESS`].
    pub fn new_ads1015(i2c: I2C, delay: D) -> Self {
        Self::new(Variant::Ads1015, i2c, delay)
    }

    /// Creates a new ADS1115 driver at [`DEFAULT_ADDRESS`].
    pub fn new_ads1115(i2c: I2C, delay: D) -> Self {
        Self::new(Variant::Ads1115, i2c, delay)
    }

    /// Gives back the bus and delay.
    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }

    #[allow(missing_docs)]
    pub fn address(&self) -> u8 {
        self.address
    }

    #[allow(missing_docs)]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    #[allow(missing_docs)]
    pub fn gain(&self) -> Gain {
        self.gain
    }

    /// Sets the gain used by subsequent single-ended and differential reads.
    pub fn set_gain(&mut self, gain: Gain) {
        debug!("gain {:?} -> {gain:?}", self.gain);
        self.gain = gain;
    }

    /// Read a single-ended channel by index.
    /// Indices above 3 fail with [`Error::InvalidChannel`] before touching the bus.
    pub fn read_channel(&mut self, channel: u8) -> Result<i16, Error<I2C::Error>> {
        let channel = Channel::try_from(channel).map_err(Error::InvalidChannel)?;

        self.read(channel)
    }

    /// Read a single-ended channel against GND.
    pub fn read(&mut self, ch: Channel) -> Result<i16, Error<I2C::Error>> {
        self.read_adc(SINGLE_SHOT_BASE | ch.mux() | OS_SINGLE)
    }

    /// Read the voltage between AIN0 and AIN1.
    pub fn read_differential_0_1(&mut self) -> Result<i16, Error<I2C::Error>> {
        self.read_differential(DifferentialPair::Ain0Ain1)
    }

    /// Read the voltage between AIN2 and AIN3.
    pub fn read_differential_2_3(&mut self) -> Result<i16, Error<I2C::Error>> {
        self.read_differential(DifferentialPair::Ain2Ain3)
    }

    /// Read the voltage across a differential pair. The result is negative when the
    /// negative input sits above the positive one.
    pub fn read_differential(&mut self, pair: DifferentialPair) -> Result<i16, Error<I2C::Error>> {
        let raw = self.read_adc(SINGLE_SHOT_BASE | pair.mux())?;

        Ok(self.sign_bit_cleanup(raw))
    }

    /// Put the chip in continuous comparator mode on `ch`, latching ALERT/RDY after one
    /// conversion above `threshold_high`. Does not wait for a conversion.
    pub fn start_comparator(
        &mut self,
        ch: Channel,
        threshold_high: i16,
    ) -> Result<(), Error<I2C::Error>> {
        let threshold = (threshold_high as u16) << self.variant.bit_shift();

        self.write_register(POINTER_HITHRESH, threshold)?;
        self.write_register(POINTER_CONFIG, COMPARATOR_BASE | ch.mux())
    }

    /// [`start_comparator`](Self::start_comparator) by channel index.
    /// Indices above 3 fail with [`Error::InvalidChannel`] before touching the bus.
    pub fn start_comparator_channel(
        &mut self,
        channel: u8,
        threshold_high: i16,
    ) -> Result<(), Error<I2C::Error>> {
        let channel = Channel::try_from(channel).map_err(Error::InvalidChannel)?;

        self.start_comparator(channel, threshold_high)
    }

    /// Wait one conversion and read the latest comparator-mode result, without sign extension.
    pub fn poll_comparator_result(&mut self) -> Result<i16, Error<I2C::Error>> {
        self.read_conversion()
    }

    /// Wait one conversion and read the latest comparator-mode result as a signed value.
    pub fn poll_comparator_result_signed(&mut self) -> Result<i16, Error<I2C::Error>> {
        let raw = self.read_conversion()?;

        Ok(self.sign_bit_cleanup(raw))
    }

    /// Start a conversion with `config` at the current gain and read it back.
    fn read_adc(&mut self, config: u16) -> Result<i16, Error<I2C::Error>> {
        self.write_register(POINTER_CONFIG, self.gain.bits() | config)?;

        self.read_conversion()
    }

    fn read_conversion(&mut self) -> Result<i16, Error<I2C::Error>> {
        self.delay.delay_ms(self.variant.conversion_delay_ms());

        let raw = self.read_register(POINTER_CONVERT)?;

        Ok((raw >> self.variant.bit_shift()) as i16)
    }

    /// Right shifting a 12 bit result drops its sign, put it back.
    fn sign_bit_cleanup(&self, res: i16) -> i16 {
        sign_bit_cleanup(self.variant, res)
    }

    fn write_register(&mut self, pointer: u8, value: u16) -> Result<(), Error<I2C::Error>> {
        let [high, low] = value.to_be_bytes();

        trace!("{:#04x}: write {pointer:#04x} <- {value:#06x}", self.address);

        self.i2c
            .write(self.address, &[pointer, high, low])
            .map_err(Error::I2c)
    }

    fn read_register(&mut self, pointer: u8) -> Result<u16, Error<I2C::Error>> {
        let mut buffer = [0; 2];

        self.i2c.write(self.address, &[pointer]).map_err(Error::I2c)?;
        self.i2c.read(self.address, &mut buffer).map_err(Error::I2c)?;

        let value = u16::from_be_bytes(buffer);

        trace!("{:#04x}: read {pointer:#04x} -> {value:#06x}", self.address);

        Ok(value)
    }
}

pub(crate) fn sign_bit_cleanup(variant: Variant, res: i16) -> i16 {
    if variant.bit_shift() != 0 && res > 0x07FF {
        (res as u16 | 0xF000) as i16
    } else {
        res
    }
}
