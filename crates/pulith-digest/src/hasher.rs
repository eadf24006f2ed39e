use digest::Digest;

/// Incremental digest accumulator.
///
/// `finalize` consumes the boxed hasher, so a finalized accumulator cannot be
/// updated or finalized again.
pub trait Hasher: Send {
    fn update(&mut self, data: &[u8]);
    fn finalize(self: Box<Self>) -> Vec<u8>;
    fn output_size(&self) -> usize;
}

/// Adapter for any RustCrypto [`Digest`] implementation.
pub struct DigestHasher<D: Digest + Send>(D);

impl<D: Digest + Send> DigestHasher<D> {
    pub fn new() -> Self { Self(D::new()) }

    pub fn digest(data: &[u8]) -> Vec<u8> { D::digest(data).to_vec() }
}

impl<D: Digest + Send> Default for DigestHasher<D> {
    fn default() -> Self { Self::new() }
}

impl<D: Digest + Send> Hasher for DigestHasher<D> {
    fn update(&mut self, data: &[u8]) { Digest::update(&mut self.0, data); }
    fn finalize(self: Box<Self>) -> Vec<u8> { self.0.finalize().to_vec() }
    fn output_size(&self) -> usize { <D as Digest>::output_size() }
}

pub type Md5Hasher = DigestHasher<md5::Md5>;
pub type Sha1Hasher = DigestHasher<sha1::Sha1>;
pub type Sha256Hasher = DigestHasher<sha2::Sha256>;
pub type Sha384Hasher = DigestHasher<sha2::Sha384>;
pub type Sha512Hasher = DigestHasher<sha2::Sha512>;

#[cfg(feature = "sha3")]
pub type Sha3_256Hasher = DigestHasher<sha3::Sha3_256>;

#[cfg(feature = "sha3")]
pub type Sha3_512Hasher = DigestHasher<sha3::Sha3_512>;

#[cfg(feature = "blake3")]
pub struct Blake3Hasher(blake3::Hasher);

#[cfg(feature = "blake3")]
impl Hasher for Blake3Hasher {
    fn update(&mut self, data: &[u8]) { self.0.update(data); }
    fn finalize(self: Box<Self>) -> Vec<u8> { self.0.finalize().as_bytes().to_vec() }
    fn output_size(&self) -> usize { blake3::OUT_LEN }
}

#[cfg(feature = "blake3")]
impl Blake3Hasher {
    pub fn new() -> Self { Self(blake3::Hasher::new()) }

    pub fn digest(data: &[u8]) -> Vec<u8> { blake3::hash(data).as_bytes().to_vec() }
}

#[cfg(feature = "blake3")]
impl Default for Blake3Hasher {
    fn default() -> Self { Self::new() }
}
