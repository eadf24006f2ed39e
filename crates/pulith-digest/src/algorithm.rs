//! Digest algorithm catalogue and the provider that turns names into hashers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{DigestError, Result};
use crate::hasher::{Hasher, Md5Hasher, Sha1Hasher, Sha256Hasher, Sha384Hasher, Sha512Hasher};

/// Algorithms registered on every new reader, in this order.
pub const DEFAULT_ALGORITHMS: [&str; 2] =
    [Algorithm::Md5.canonical_name(), Algorithm::Sha1.canonical_name()];

/// Digest algorithms known to [`DefaultProvider`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Md5,
    Sha1,
    Sha256,
    Sha384,
    Sha512,
    #[cfg(feature = "sha3")]
    Sha3_256,
    #[cfg(feature = "sha3")]
    Sha3_512,
    #[cfg(feature = "blake3")]
    Blake3,
}

impl Algorithm {
    pub const fn canonical_name(&self) -> &'static str {
        match self {
            Algorithm::Md5 => "MD5",
            Algorithm::Sha1 => "SHA-1",
            Algorithm::Sha256 => "SHA-256",
            Algorithm::Sha384 => "SHA-384",
            Algorithm::Sha512 => "SHA-512",
            #[cfg(feature = "sha3")]
            Algorithm::Sha3_256 => "SHA3-256",
            #[cfg(feature = "sha3")]
            Algorithm::Sha3_512 => "SHA3-512",
            #[cfg(feature = "blake3")]
            Algorithm::Blake3 => "BLAKE3",
        }
    }

    /// Digest length in bytes.
    pub const fn output_size(&self) -> usize {
        match self {
            Algorithm::Md5 => 16,
            Algorithm::Sha1 => 20,
            Algorithm::Sha256 => 32,
            Algorithm::Sha384 => 48,
            Algorithm::Sha512 => 64,
            #[cfg(feature = "sha3")]
            Algorithm::Sha3_256 => 32,
            #[cfg(feature = "sha3")]
            Algorithm::Sha3_512 => 64,
            #[cfg(feature = "blake3")]
            Algorithm::Blake3 => 32,
        }
    }

    pub fn hasher(&self) -> Box<dyn Hasher> {
        match self {
            Algorithm::Md5 => Box::new(Md5Hasher::new()),
            Algorithm::Sha1 => Box::new(Sha1Hasher::new()),
            Algorithm::Sha256 => Box::new(Sha256Hasher::new()),
            Algorithm::Sha384 => Box::new(Sha384Hasher::new()),
            Algorithm::Sha512 => Box::new(Sha512Hasher::new()),
            #[cfg(feature = "sha3")]
            Algorithm::Sha3_256 => Box::new(crate::hasher::Sha3_256Hasher::new()),
            #[cfg(feature = "sha3")]
            Algorithm::Sha3_512 => Box::new(crate::hasher::Sha3_512Hasher::new()),
            #[cfg(feature = "blake3")]
            Algorithm::Blake3 => Box::new(crate::hasher::Blake3Hasher::new()),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.canonical_name()) }
}

impl FromStr for Algorithm {
    type Err = DigestError;

    /// Case-insensitive; accepts the dashless and bare `SHA` spellings.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "MD5" => Ok(Algorithm::Md5),
            "SHA-1" | "SHA1" | "SHA" => Ok(Algorithm::Sha1),
            "SHA-256" | "SHA256" => Ok(Algorithm::Sha256),
            "SHA-384" | "SHA384" => Ok(Algorithm::Sha384),
            "SHA-512" | "SHA512" => Ok(Algorithm::Sha512),
            #[cfg(feature = "sha3")]
            "SHA3-256" => Ok(Algorithm::Sha3_256),
            #[cfg(feature = "sha3")]
            "SHA3-512" => Ok(Algorithm::Sha3_512),
            #[cfg(feature = "blake3")]
            "BLAKE3" => Ok(Algorithm::Blake3),
            _ => Err(DigestError::UnsupportedAlgorithm(s.to_string())),
        }
    }
}

impl Serialize for Algorithm {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.canonical_name())
    }
}

impl<'de> Deserialize<'de> for Algorithm {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

/// Source of fresh accumulators, looked up by algorithm name.
pub trait DigestProvider {
    /// Create a zero-state hasher for `name`, or fail with
    /// [`DigestError::UnsupportedAlgorithm`].
    fn create(&self, name: &str) -> Result<Box<dyn Hasher>>;
}

/// Provider backed by the RustCrypto primitives compiled into this crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultProvider;

impl DigestProvider for DefaultProvider {
    fn create(&self, name: &str) -> Result<Box<dyn Hasher>> {
        let algorithm: Algorithm = name.parse()?;
        Ok(algorithm.hasher())
    }
}

impl<P: DigestProvider + ?Sized> DigestProvider for &P {
    fn create(&self, name: &str) -> Result<Box<dyn Hasher>> { (**self).create(name) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!("md5".parse::<Algorithm>().unwrap(), Algorithm::Md5);
        assert_eq!("SHA".parse::<Algorithm>().unwrap(), Algorithm::Sha1);
        assert_eq!("sha1".parse::<Algorithm>().unwrap(), Algorithm::Sha1);
        assert_eq!("Sha-256".parse::<Algorithm>().unwrap(), Algorithm::Sha256);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "WHIRLPOOL".parse::<Algorithm>().unwrap_err();
        assert!(matches!(err, DigestError::UnsupportedAlgorithm(name) if name == "WHIRLPOOL"));
    }

    #[test]
    fn test_default_algorithms() {
        assert_eq!(DEFAULT_ALGORITHMS, ["MD5", "SHA-1"]);
    }

    #[test]
    fn test_hasher_output_size_matches_catalogue() {
        for algorithm in [
            Algorithm::Md5,
            Algorithm::Sha1,
            Algorithm::Sha256,
            Algorithm::Sha384,
            Algorithm::Sha512,
        ] {
            assert_eq!(algorithm.hasher().output_size(), algorithm.output_size());
            assert_eq!(algorithm.to_string().parse::<Algorithm>().unwrap(), algorithm);
        }
    }

    #[test]
    fn test_provider_rejects_unknown() {
        assert!(DefaultProvider.create("SHA-256").is_ok());
        assert!(matches!(
            DefaultProvider.create("CRC-32"),
            Err(DigestError::UnsupportedAlgorithm(_))
        ));
    }

    #[test]
    fn test_serde_uses_canonical_name() {
        let json = serde_json::to_string(&Algorithm::Sha1).unwrap();
        assert_eq!(json, "\"SHA-1\"");
        let parsed: Algorithm = serde_json::from_str("\"sha256\"").unwrap();
        assert_eq!(parsed, Algorithm::Sha256);
    }
}
