use std::fmt;
use std::io::{self, Read};

use tracing::{debug, trace};

use crate::accumulator::Accumulator;
use crate::algorithm::{DEFAULT_ALGORITHMS, DefaultProvider, DigestProvider};
use crate::error::{DigestError, Result};
use crate::options::ReaderOptions;

/// Streaming reader that feeds every byte it delivers into a set of digest
/// accumulators.
///
/// Bytes are passed through unmodified. Digests are finalized lazily by
/// [`hex_digest`](Self::hex_digest) and cached per algorithm. The identity
/// `I` is carried along untouched.
pub struct DigestingReader<I, R, P = DefaultProvider> {
    identity: I,
    source: R,
    provider: P,
    accumulators: Vec<(String, Accumulator)>,
    bytes_read: u64,
}

impl<I, R> DigestingReader<I, R> {
    /// Wrap `source` with MD5 and SHA-1 registered.
    pub fn new(identity: I, source: R) -> Result<Self> {
        Self::with_provider(identity, source, DefaultProvider)
    }

    /// Like [`new`](Self::new), then registers every algorithm in `options`.
    pub fn with_options(identity: I, source: R, options: &ReaderOptions) -> Result<Self> {
        let mut reader = Self::new(identity, source)?;
        for name in &options.algorithms {
            reader.register_algorithm(name)?;
        }
        Ok(reader)
    }
}

impl<I, R, P: DigestProvider> DigestingReader<I, R, P> {
    pub fn with_provider(identity: I, source: R, provider: P) -> Result<Self> {
        let mut reader = Self {
            identity,
            source,
            provider,
            accumulators: Vec::with_capacity(DEFAULT_ALGORITHMS.len()),
            bytes_read: 0,
        };
        for name in DEFAULT_ALGORITHMS {
            reader.register_algorithm(name)?;
        }
        Ok(reader)
    }

    /// Register a fresh accumulator under `name`.
    ///
    /// An existing accumulator with the same name, live or finalized, is
    /// replaced in place and its cached digest is dropped. Only bytes read
    /// after this call are covered.
    pub fn register_algorithm(&mut self, name: &str) -> Result<()> {
        let accumulator = Accumulator::new(self.provider.create(name)?);
        match self.position(name) {
            Some(index) => {
                debug!(
                    algorithm = name,
                    bytes_read = self.bytes_read,
                    "replacing digest accumulator"
                );
                self.accumulators[index].1 = accumulator;
            }
            None => {
                debug!(
                    algorithm = name,
                    bytes_read = self.bytes_read,
                    "registering digest accumulator"
                );
                self.accumulators.push((name.to_string(), accumulator));
            }
        }
        Ok(())
    }

    /// Replace the whole accumulator set.
    ///
    /// All hashers are created before anything is swapped, so an unsupported
    /// name leaves the reader unchanged. Every cached digest is dropped.
    pub fn replace_algorithms<S: AsRef<str>>(
        &mut self,
        names: impl IntoIterator<Item = S>,
    ) -> Result<()> {
        let mut accumulators: Vec<(String, Accumulator)> = Vec::new();
        for name in names {
            let name = name.as_ref();
            let accumulator = Accumulator::new(self.provider.create(name)?);
            match accumulators.iter_mut().find(|(existing, _)| existing == name) {
                Some(entry) => entry.1 = accumulator,
                None => accumulators.push((name.to_string(), accumulator)),
            }
        }
        debug!(
            count = accumulators.len(),
            bytes_read = self.bytes_read,
            "replacing all digest accumulators"
        );
        self.accumulators = accumulators;
        Ok(())
    }
}

impl<I, R, P> DigestingReader<I, R, P> {
    /// Lowercase hex digest for `name`, finalizing it on first request.
    ///
    /// Bytes read after the first call are not reflected in the result.
    pub fn hex_digest(&mut self, name: &str) -> Result<String> {
        let index = self
            .position(name)
            .ok_or_else(|| DigestError::UnknownAlgorithm(name.to_string()))?;
        let accumulator = &mut self.accumulators[index].1;
        if !accumulator.is_finalized() {
            debug!(algorithm = name, bytes_read = self.bytes_read, "finalizing digest");
        }
        Ok(accumulator.finalize().to_string())
    }

    /// Finalize every registered algorithm, in registration order.
    pub fn finalize_all(&mut self) -> Vec<(String, String)> {
        self.accumulators
            .iter_mut()
            .map(|(name, accumulator)| (name.clone(), accumulator.finalize().to_string()))
            .collect()
    }

    pub fn identity(&self) -> &I { &self.identity }

    /// Registered algorithm names in registration order.
    pub fn algorithms(&self) -> impl Iterator<Item = &str> {
        self.accumulators.iter().map(|(name, _)| name.as_str())
    }

    /// `(name, hex)` for every algorithm finalized so far.
    pub fn hex_digests(&self) -> impl Iterator<Item = (&str, &str)> {
        self.accumulators
            .iter()
            .filter_map(|(name, accumulator)| accumulator.hex().map(|hex| (name.as_str(), hex)))
    }

    pub fn contains_algorithm(&self, name: &str) -> bool { self.position(name).is_some() }

    pub fn is_finalized(&self, name: &str) -> bool {
        self.position(name)
            .is_some_and(|index| self.accumulators[index].1.is_finalized())
    }

    /// Total bytes delivered through this reader.
    pub fn bytes_read(&self) -> u64 { self.bytes_read }

    /// Read-only access to the wrapped source. Reading from it directly would
    /// bypass the accumulators.
    pub fn get_ref(&self) -> &R { &self.source }

    pub fn into_inner(self) -> R { self.source }

    pub fn into_parts(self) -> (I, R) { (self.identity, self.source) }

    fn position(&self, name: &str) -> Option<usize> {
        self.accumulators.iter().position(|(existing, _)| existing == name)
    }

    fn feed(&mut self, data: &[u8]) {
        for (_, accumulator) in &mut self.accumulators {
            accumulator.update(data);
        }
        self.bytes_read += data.len() as u64;
        trace!(len = data.len(), total = self.bytes_read, "digested bytes");
    }
}

impl<I, R: Read, P> DigestingReader<I, R, P> {
    /// Read a single byte. `None` marks end of stream.
    pub fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let mut byte = [0u8; 1];
        loop {
            match self.source.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => {
                    self.feed(&byte);
                    return Ok(Some(byte[0]));
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    /// Read up to `len` bytes into `buf[offset..offset + len]`.
    ///
    /// Only `buf[offset..offset + n]` is digested, where `n` is the returned
    /// count. A range outside `buf` fails with `InvalidInput` without
    /// touching the source.
    pub fn read_into(&mut self, buf: &mut [u8], offset: usize, len: usize) -> io::Result<usize> {
        let end = offset
            .checked_add(len)
            .filter(|&end| end <= buf.len())
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("range {offset}+{len} out of bounds for buffer of {}", buf.len()),
                )
            })?;

        let n = self.source.read(&mut buf[offset..end])?;
        if n > len {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("source reported {n} bytes for a {len} byte read"),
            ));
        }
        self.feed(&buf[offset..offset + n]);
        Ok(n)
    }
}

impl<I, R: Read, P> Read for DigestingReader<I, R, P> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let len = buf.len();
        self.read_into(buf, 0, len)
    }
}

impl<I: fmt::Debug, R: fmt::Debug, P> fmt::Debug for DigestingReader<I, R, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DigestingReader")
            .field("identity", &self.identity)
            .field("source", &self.source)
            .field("algorithms", &self.algorithms().collect::<Vec<_>>())
            .field("bytes_read", &self.bytes_read)
            .finish()
    }
}
