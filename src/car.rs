use std::fmt::Display;
use std::io::{Read, Write};

use crate::error::Result;

/// Trait defining the interface for car records stored in a collection
/// This allows for different record implementations while maintaining a common interface
///
/// The collection treats the record as an opaque value: it clones it on the
/// way in and out, orders it by the model year, displays it through its own
/// `Display`, and persists it through its own fixed binary format.
pub trait CarInterface: Clone + Display {
    /// Returns the model year, the ordering key for the collection
    fn year(&self) -> u16;

    /// Writes this record's fixed binary representation at the stream's
    /// current position
    fn encode<W: Write>(&self, w: &mut W) -> Result<()>;

    /// Reads one record back from the stream's current position
    ///
    /// Must consume exactly the bytes `encode` produced.
    fn decode<R: Read>(r: &mut R) -> Result<Self>;
}

#[cfg(test)]
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct TestCar {
    make: String,
    year: u16,
}

#[cfg(test)]
impl TestCar {
    pub fn new(make: &str, year: u16) -> Self {
        Self {
            make: make.to_string(),
            year,
        }
    }
}

#[cfg(test)]
impl Display for TestCar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.year, self.make)
    }
}

#[cfg(test)]
impl CarInterface for TestCar {
    fn year(&self) -> u16 {
        self.year
    }

    fn encode<W: Write>(&self, w: &mut W) -> Result<()> {
        let make = self.make.as_bytes();
        w.write_all(&self.year.to_le_bytes())?;
        w.write_all(&(make.len() as u16).to_le_bytes())?;
        w.write_all(make)?;
        Ok(())
    }

    fn decode<R: Read>(r: &mut R) -> Result<Self> {
        let mut year = [0u8; 2];
        r.read_exact(&mut year)?;
        let mut len = [0u8; 2];
        r.read_exact(&mut len)?;
        let mut make = vec![0u8; u16::from_le_bytes(len) as usize];
        r.read_exact(&mut make)?;
        Ok(Self {
            make: String::from_utf8_lossy(&make).into_owned(),
            year: u16::from_le_bytes(year),
        })
    }
}
