//! Digest primitives for exact and fuzzy deduplication.
//!
//! The exact engine (`exactdedup`) compares whole-record digests for value
//! equality; the MinHash engine (`minhash`) needs a 32-bit integer hash per
//! shingle. Byte order and byte selection are part of the contract here:
//! changing either changes every signature and digest downstream.

use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256};

/// Content hash algorithms available to the exact-dedup engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashFunc {
    Md5,
    Sha256,
    Xxh3,
}

impl HashFunc {
    /// Parse a hash function name as used in configuration (`hash_func`).
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "md5" => Some(Self::Md5),
            "sha256" => Some(Self::Sha256),
            "xxh3" => Some(Self::Xxh3),
            _ => None,
        }
    }
}

/// A content digest, as raw bytes. Two digests are equal iff their bytes are
/// equal; the exact-dedup engine uses this directly as a hash-set key.
pub type Digest16 = Vec<u8>;

/// Hash `content` with the algorithm named by `func`, returning raw digest
/// bytes suitable as a `seen`-set key.
pub fn digest(func: HashFunc, content: &str) -> Digest16 {
    match func {
        HashFunc::Md5 => md5_digest(content),
        HashFunc::Sha256 => sha256_digest(content),
        HashFunc::Xxh3 => xxh3_128_digest(content),
    }
}

/// MD5 digest of `content`, as a lowercase hex string.
pub fn md5_hexdigest(content: &str) -> String {
    hex::encode(md5_digest(content))
}

/// MD5 digest of `content`, as raw bytes.
pub fn md5_digest(content: &str) -> Vec<u8> {
    let mut hasher = Md5::new();
    hasher.update(content.as_bytes());
    hasher.finalize().to_vec()
}

/// SHA-256 digest of `content`, as a lowercase hex string.
pub fn sha256_hexdigest(content: &str) -> String {
    hex::encode(sha256_digest(content))
}

/// SHA-256 digest of `content`, as raw bytes.
pub fn sha256_digest(content: &str) -> Vec<u8> {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hasher.finalize().to_vec()
}

/// xxh3-128 digest of `content`, as raw 16 bytes.
pub fn xxh3_128_digest(content: &str) -> Vec<u8> {
    xxhash_rust::xxh3::xxh3_128(content.as_bytes())
        .to_be_bytes()
        .to_vec()
}

/// The 32-bit shingle hash used by the MinHash engine: the first 4 bytes of
/// `SHA-1(utf8(token))`, reinterpreted little-endian as an unsigned 32-bit
/// integer. Byte order matters here; this is not a generic hash, it is a
/// fixed bit pattern that signature computation depends on bit-for-bit.
pub fn sha1_hash32(token: &str) -> u32 {
    let mut hasher = Sha1::new();
    hasher.update(token.as_bytes());
    let digest = hasher.finalize();
    u32::from_le_bytes([digest[0], digest[1], digest[2], digest[3]])
}
