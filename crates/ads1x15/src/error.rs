use core::fmt;

/// Errors returned by [`Ads1x15`](crate::Ads1x15).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E> {
    /// The underlying I2C transaction failed. The chip state is unknown and the read sequence must
    /// be started again from the top.
    I2c(E),
    /// A single-ended channel above 3 was requested. Nothing was sent to the chip.
    InvalidChannel(u8),
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::I2c(error) => write!(f, "I2C transaction failed: {error:?}"),
            Self::InvalidChannel(channel) => {
                write!(f, "invalid single-ended channel {channel}, expected 0-3")
            }
        }
    }
}

impl<E: fmt::Debug> core::error::Error for Error<E> {}
