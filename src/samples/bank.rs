// Copyright (C) 2026 Michael Wilson <mike@mdwn.dev>
//
// This program is free software: you can redistribute it and/or modify it under
// the terms of the GNU General Public License as published by the Free Software
// Foundation, version 3.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with
// this program. If not, see <https://www.gnu.org/licenses/>.
//
use core::fmt;

use super::data;
use super::error::SampleError;

/// The number of samples in the embedded bank, derived from the table itself.
pub const SAMPLE_COUNT: usize = data::TABLE.len();

/// A single embedded sample: an immutable byte payload living in the data
/// segment. Length is always derived from the slice, so data and length
/// cannot drift apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sample {
    data: &'static [u8],
}

impl Sample {
    const fn new(data: &'static [u8]) -> Self {
        Sample { data }
    }

    /// The raw payload bytes.
    pub fn data(&self) -> &'static [u8] {
        self.data
    }

    /// The payload length in bytes.
    pub fn byte_len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// An ordered, fixed collection of samples. Consumers address samples by
/// index; every accessor is bounds checked and read-only, so the bank can be
/// shared freely across threads.
pub struct SampleBank {
    table: &'static [&'static [u8]],
}

/// Returns the bank of samples embedded in this binary.
pub fn bank() -> SampleBank {
    SampleBank::new(&data::TABLE)
}

impl SampleBank {
    const fn new(table: &'static [&'static [u8]]) -> SampleBank {
        SampleBank { table }
    }

    /// The number of samples in the bank. Constant for the process lifetime.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Gets the sample at the given index.
    pub fn get(&self, index: usize) -> Result<Sample, SampleError> {
        match self.table.get(index) {
            Some(data) => Ok(Sample::new(data)),
            None => Err(SampleError::OutOfRange {
                index,
                count: self.table.len(),
            }),
        }
    }

    /// Gets the raw payload bytes for the sample at the given index.
    pub fn data(&self, index: usize) -> Result<&'static [u8], SampleError> {
        Ok(self.get(index)?.data())
    }

    /// Gets the payload length in bytes for the sample at the given index.
    /// Always equal to `data(index)?.len()`.
    pub fn byte_len(&self, index: usize) -> Result<usize, SampleError> {
        Ok(self.get(index)?.byte_len())
    }

    /// Iterates over all samples in index order.
    pub fn iter(&self) -> impl Iterator<Item = Sample> + '_ {
        self.table.iter().map(|data| Sample::new(data))
    }
}

impl fmt::Display for SampleBank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Samples (count: {}):", self.len())?;
        for (index, sample) in self.iter().enumerate() {
            writeln!(f, "- {:02}: {} bytes", index, sample.byte_len())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_count_is_fixed() {
        let bank = bank();
        assert_eq!(SAMPLE_COUNT, 8);
        assert_eq!(bank.len(), 8);
        // A fresh handle reports the same count.
        assert_eq!(super::bank().len(), bank.len());
        assert!(!bank.is_empty());
    }

    #[test]
    fn test_lengths_match_data() {
        let bank = bank();
        for index in 0..bank.len() {
            let sample = bank.get(index).unwrap();
            assert_eq!(sample.byte_len(), sample.data().len());
            assert_eq!(bank.byte_len(index).unwrap(), bank.data(index).unwrap().len());
        }
    }

    #[test]
    fn test_payloads_are_nonempty_whole_frames() {
        for sample in bank().iter() {
            assert!(!sample.is_empty());
            // 16-bit PCM payloads always hold whole frames.
            assert_eq!(sample.byte_len() % 2, 0);
        }
    }

    #[test]
    fn test_out_of_range() {
        let bank = bank();
        for index in [bank.len(), bank.len() + 1, usize::MAX] {
            let err = bank.get(index).unwrap_err();
            assert_eq!(
                err,
                SampleError::OutOfRange {
                    index,
                    count: bank.len()
                }
            );
            assert!(bank.data(index).is_err());
            assert!(bank.byte_len(index).is_err());
        }
    }

    #[test]
    fn test_repeated_reads_are_stable() {
        let bank = bank();
        let first: Vec<&[u8]> = (0..bank.len()).map(|i| bank.data(i).unwrap()).collect();
        let second: Vec<&[u8]> = (0..bank.len()).map(|i| bank.data(i).unwrap()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_iter_matches_indexed_access() {
        let bank = bank();
        let via_iter: Vec<Sample> = bank.iter().collect();
        assert_eq!(via_iter.len(), bank.len());
        for (index, sample) in via_iter.iter().enumerate() {
            assert_eq!(*sample, bank.get(index).unwrap());
        }
    }
}
