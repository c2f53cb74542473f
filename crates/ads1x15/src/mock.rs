//! Recording `embedded-hal` mocks shared by the unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{Error, ErrorKind, ErrorType, I2c, Operation};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Write(u8, Vec<u8>),
    Read(u8, usize),
    DelayMs(u32),
}

/// Shared, ordered log of everything the bus and delay saw.
#[derive(Clone, Default)]
pub struct Recorder(Rc<RefCell<Vec<Event>>>);

impl Recorder {
    fn push(&self, event: Event) {
        self.0.borrow_mut().push(event);
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().clone()
    }

    /// Bytes of every write, in order.
    pub fn writes(&self) -> Vec<Vec<u8>> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Write(_, bytes) => Some(bytes),
                _ => None,
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockError;

impl Error for MockError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// Answers each read with the next queued big-endian word, failing once they run out.
pub struct MockI2c {
    recorder: Recorder,
    words: VecDeque<u16>,
}

impl MockI2c {
    pub fn new(recorder: &Recorder, words: &[u16]) -> Self {
        Self {
            recorder: recorder.clone(),
            words: words.iter().copied().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.words.len()
    }
}

impl ErrorType for MockI2c {
    type Error = MockError;
}

impl I2c for MockI2c {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        for operation in operations {
            match operation {
                Operation::Write(bytes) => {
                    self.recorder.push(Event::Write(address, bytes.to_vec()));
                }
                Operation::Read(buffer) => {
                    assert_eq!(buffer.len(), 2, "conversion reads are one word");

                    let word = self.words.pop_front().ok_or(MockError)?;
                    buffer.copy_from_slice(&word.to_be_bytes());

                    self.recorder.push(Event::Read(address, buffer.len()));
                }
            }
        }

        Ok(())
    }
}

pub struct MockDelay {
    recorder: Recorder,
}

impl MockDelay {
    pub fn new(recorder: &Recorder) -> Self {
        Self {
            recorder: recorder.clone(),
        }
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, _ns: u32) {
        unimplemented!("the driver only waits in whole milliseconds")
    }

    fn delay_ms(&mut self, ms: u32) {
        self.recorder.push(Event::DelayMs(ms));
    }
}
