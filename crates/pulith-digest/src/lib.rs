//! Digesting reader for artifact streams.
//!
//! Computes one or more checksums over a byte stream while it is consumed for
//! something else, so integrity data is recorded without a second read pass.
//! Bytes reach the caller unmodified; digests are finalized on demand and
//! cached per algorithm.
//!
//! MD5 and SHA-1 are always registered. Further algorithms come from a
//! [`DigestProvider`]; [`DefaultProvider`] knows the SHA-2 family, plus SHA-3
//! and BLAKE3 behind the `sha3` and `blake3` features.
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use pulith_digest::DigestingReader;
//!
//! let mut reader = DigestingReader::new("demo.jar", Cursor::new(b"hello world")).unwrap();
//! reader.register_algorithm("SHA-256").unwrap();
//!
//! let mut stored = Vec::new();
//! std::io::copy(&mut reader, &mut stored).unwrap();
//!
//! assert_eq!(stored, b"hello world");
//! assert_eq!(reader.hex_digest("MD5").unwrap(), "5eb63bbbe01eeed093cb22bb8f5acdc3");
//! ```

pub use self::algorithm::{Algorithm, DEFAULT_ALGORITHMS, DefaultProvider, DigestProvider};
pub use self::error::{DigestError, Result};
pub use self::hasher::{
    DigestHasher, Hasher, Md5Hasher, Sha1Hasher, Sha256Hasher, Sha384Hasher, Sha512Hasher,
};
pub use self::options::ReaderOptions;
pub use self::reader::DigestingReader;

#[cfg(feature = "sha3")]
pub use self::hasher::{Sha3_256Hasher, Sha3_512Hasher};

#[cfg(feature = "blake3")]
pub use self::hasher::Blake3Hasher;

mod accumulator;
mod algorithm;
mod error;
mod hasher;
mod options;
mod reader;
