use std::io::{self, Read, Seek, SeekFrom, Write};
use std::mem;

use crate::car::CarInterface;
use crate::error::{Error, Result};
use crate::list::{Iter, List};

/// An ordered collection of car records
///
/// Backed by a doubly linked list, with a cached flag recording whether the
/// chain is currently non-decreasing by model year. The flag is true for
/// collections of at most one record, stays true across sorted inserts, goes
/// false when an unsorted append leaves more than one record, and is raised
/// again by an explicit [`sort_by_year`](Collection::sort_by_year).
pub struct Collection<C: CarInterface> {
    cars: List<C>,
    sorted: bool,
}

impl<C: CarInterface> Collection<C> {
    /// Creates a new empty collection
    pub fn new() -> Self {
        Collection {
            cars: List::new(),
            sorted: true,
        }
    }

    /// Returns the number of cars in the collection
    pub fn len(&self) -> usize {
        self.cars.len()
    }

    /// Returns true if the collection holds no cars
    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }

    /// Returns true if the chain is currently non-decreasing by year
    pub fn is_sorted(&self) -> bool {
        self.sorted
    }

    /// Removes every car and leaves an empty, sorted collection
    pub fn clear(&mut self) {
        self.cars.clear();
        self.sorted = true;
    }

    /// Returns an owned copy of the car at `pos` (0-indexed from the head)
    pub fn get(&self, pos: usize) -> Result<C> {
        self.cars.get(pos).cloned().ok_or(Error::OutOfRange {
            pos,
            len: self.cars.len(),
        })
    }

    /// Appends a car at the tail unconditionally, in O(1)
    ///
    /// Clears the sorted flag whenever more than one car remains; a first
    /// car into an empty collection leaves it sorted.
    pub fn push_unsorted(&mut self, car: C) {
        self.cars.push_back(car);
        if self.cars.len() > 1 {
            self.sorted = false;
        }
    }

    /// Inserts a car at the position that keeps the chain non-decreasing
    /// by year
    ///
    /// Ties land before the first car of equal year, so earlier inserts keep
    /// their relative order. Into an empty collection this is a plain append.
    /// Returns [`Error::NotSorted`] if the collection is currently unsorted;
    /// this operation preserves order, it does not establish it.
    pub fn insert_sorted(&mut self, car: C) -> Result<()> {
        if !self.sorted {
            return Err(Error::NotSorted);
        }

        let year = car.year();
        let first = self.cars.front().map(C::year);
        let last = self.cars.back().map(C::year);

        match (first, last) {
            (None, _) => self.cars.push_back(car),
            (Some(f), _) if year < f => self.cars.push_front(car),
            (_, Some(l)) if year > l => self.cars.push_back(car),
            _ => {
                // First car at or past the new year; the scan cannot miss
                // because the tail year is >= the new year here
                let pos = self
                    .cars
                    .iter()
                    .position(|c| c.year() >= year)
                    .unwrap_or(self.cars.len());
                self.cars.insert_at(pos, car);
            }
        }

        Ok(())
    }

    /// Removes and returns the car at `pos`
    ///
    /// The sorted flag is untouched: removal never breaks an order that
    /// already holds.
    pub fn remove_at(&mut self, pos: usize) -> Result<C> {
        let len = self.cars.len();
        self.cars.remove_at(pos).ok_or(Error::OutOfRange { pos, len })
    }

    /// Sorts the chain in place by ascending year
    ///
    /// No-op when the sorted flag is already up. Otherwise a bubble sort over
    /// the chain: each pass swaps adjacent values whose successor has a
    /// strictly smaller year, and the unsorted suffix shrinks by one per
    /// pass. Equal years never swap, so the sort is stable.
    pub fn sort_by_year(&mut self) {
        if self.sorted {
            return;
        }

        for limit in (2..=self.cars.len()).rev() {
            let mut iter = self.cars.iter_mut();
            if let Some(mut prev) = iter.next() {
                for cur in iter.take(limit - 1) {
                    if cur.year() < prev.year() {
                        mem::swap(&mut *prev, &mut *cur);
                    }
                    prev = cur;
                }
            }
        }

        self.sorted = true;
    }

    /// Writes a header with the sortedness and count, then one car per line
    /// in head-to-tail order
    pub fn print<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        let order = if self.sorted { "sorted by year" } else { "unsorted" };
        writeln!(out, "collection of {} cars ({})", self.cars.len(), order)?;
        for car in self.cars.iter() {
            writeln!(out, "  {car}")?;
        }
        Ok(())
    }

    /// Writes the collection's binary representation from the start of the
    /// stream
    ///
    /// Layout: sorted flag (1 byte, 0 or 1), count (u32 little-endian), then
    /// each car's own fixed format in head-to-tail order. No magic, no
    /// versioning, no per-record framing; readers must know the car format
    /// out-of-band.
    pub fn write_to<W: Write + Seek>(&self, w: &mut W) -> Result<()> {
        w.seek(SeekFrom::Start(0))?;
        w.write_all(&[self.sorted as u8])?;
        w.write_all(&(self.cars.len() as u32).to_le_bytes())?;
        for car in self.cars.iter() {
            car.encode(w)?;
        }
        Ok(())
    }

    /// Replaces the collection's contents with the stream's, read from the
    /// start
    ///
    /// The prior contents are discarded only once the whole stream decodes;
    /// on error the collection is left unchanged.
    pub fn read_from<R: Read + Seek>(&mut self, r: &mut R) -> Result<()> {
        r.seek(SeekFrom::Start(0))?;

        let mut flag = [0u8; 1];
        r.read_exact(&mut flag)?;
        let sorted = match flag[0] {
            0 => false,
            1 => true,
            b => return Err(Error::InvalidFlag(b)),
        };

        let mut count = [0u8; 4];
        r.read_exact(&mut count)?;
        let count = u32::from_le_bytes(count);

        let mut cars = List::new();
        for _ in 0..count {
            cars.push_back(C::decode(r)?);
        }

        // A chain of at most one car is sorted whatever the header says
        self.sorted = sorted || cars.len() <= 1;
        self.cars = cars;
        Ok(())
    }

    /// Returns an iterator over the cars in head-to-tail order
    pub fn iter(&self) -> Iter<'_, C> {
        self.cars.iter()
    }
}

impl<C: CarInterface> Default for Collection<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: CarInterface> Clone for Collection<C> {
    /// Deep copy: every car is cloned in order, the sorted flag carries
    /// over, and no storage is shared with the source
    fn clone(&self) -> Self {
        let mut cars = List::new();
        for car in self.cars.iter() {
            cars.push_back(car.clone());
        }
        Collection {
            cars,
            sorted: self.sorted,
        }
    }
}
