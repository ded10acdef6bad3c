use std::fs::File;
use std::io::{self, ErrorKind, Read};
use std::path::Path;

use log::debug;

/// Number of possible symbols - one per byte value.
pub const NSYMBOLS: usize = 256;

/// Size of the chunks pulled from the source while counting.
const READ_CHUNK: usize = 16_000;

/// Count of every byte value seen in one input. Created fresh for each run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FreqTable {
    counts: [u64; NSYMBOLS],
}

impl FreqTable {
    /// Create a table with every count set to zero.
    pub fn new() -> Self {
        Self {
            counts: [0; NSYMBOLS],
        }
    }

    /// Add the bytes in data to the counts.
    pub fn add(&mut self, data: &[u8]) {
        data.iter().for_each(|&el| self.counts[el as usize] += 1);
    }

    pub fn count(&self, symbol: u8) -> u64 {
        self.counts[symbol as usize]
    }

    /// Total number of bytes counted.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Number of symbols with a non-zero count.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c != 0).count()
    }

    /// Iterate over the (symbol, count) pairs that occurred, lowest symbol first.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c != 0)
            .map(|(sym, &c)| (sym as u8, c))
    }
}

impl Default for FreqTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns a frequency count of the input data.
pub fn freqs(data: &[u8]) -> FreqTable {
    let mut table = FreqTable::new();
    table.add(data);
    table
}

/// Read the source to the end and count every byte. Any read error aborts the count.
pub fn tabulate<R: Read>(mut source: R) -> io::Result<FreqTable> {
    let mut table = FreqTable::new();
    let mut buf = vec![0_u8; READ_CHUNK];
    loop {
        let received = match source.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        table.add(&buf[..received]);
    }
    debug!(
        "Counted {} bytes, {} distinct symbols",
        table.total(),
        table.distinct()
    );
    Ok(table)
}

/// Open the file at path and count its bytes. The file is closed before returning.
pub fn tabulate_file<P: AsRef<Path>>(path: P) -> io::Result<FreqTable> {
    let fin = File::open(path.as_ref())?;
    tabulate(fin)
}
