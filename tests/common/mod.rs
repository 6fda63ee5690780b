use std::fmt;
use std::io::{Read, Write};

use garage::{CarInterface, Result};

/// A basic car record implementation for testing
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct BasicCar {
    make: String,
    model: String,
    year: u16,
}

impl BasicCar {
    pub fn new(make: &str, model: &str, year: u16) -> Self {
        Self {
            make: make.to_string(),
            model: model.to_string(),
            year,
        }
    }
}

impl fmt::Display for BasicCar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.year, self.make, self.model)
    }
}

impl CarInterface for BasicCar {
    fn year(&self) -> u16 {
        self.year
    }

    fn encode<W: Write>(&self, w: &mut W) -> Result<()> {
        w.write_all(&self.year.to_le_bytes())?;
        for field in [&self.make, &self.model] {
            let bytes = field.as_bytes();
            w.write_all(&(bytes.len() as u16).to_le_bytes())?;
            w.write_all(bytes)?;
        }
        Ok(())
    }

    fn decode<R: Read>(r: &mut R) -> Result<Self> {
        let mut year = [0u8; 2];
        r.read_exact(&mut year)?;

        let mut fields = [String::new(), String::new()];
        for field in fields.iter_mut() {
            let mut len = [0u8; 2];
            r.read_exact(&mut len)?;
            let mut bytes = vec![0u8; u16::from_le_bytes(len) as usize];
            r.read_exact(&mut bytes)?;
            *field = String::from_utf8_lossy(&bytes).into_owned();
        }

        let [make, model] = fields;
        Ok(Self {
            make,
            model,
            year: u16::from_le_bytes(year),
        })
    }
}
