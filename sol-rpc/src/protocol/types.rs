//! Solana protocol value types.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ParsePubkeyError;

/// Number of bytes in a public key.
pub const PUBKEY_BYTES: usize = 32;

/// Maximum length of a base58-encoded public key.
pub const MAX_BASE58_LEN: usize = 44;

/// Solana account address (32 bytes, ed25519 public key or program address).
///
/// Parsed from and displayed as base58 text.
#[derive(Clone, Copy, Default, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Pubkey([u8; PUBKEY_BYTES]);

impl Pubkey {
    /// Create a public key from raw bytes.
    pub const fn new(bytes: [u8; PUBKEY_BYTES]) -> Self {
        Self(bytes)
    }

    /// Return the raw bytes.
    pub const fn to_bytes(self) -> [u8; PUBKEY_BYTES] {
        self.0
    }
}

impl FromStr for Pubkey {
    type Err = ParsePubkeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Reject oversized input before decoding
        if s.len() > MAX_BASE58_LEN {
            return Err(ParsePubkeyError::WrongSize);
        }

        let bytes = bs58::decode(s)
            .into_vec()
            .map_err(|_| ParsePubkeyError::Invalid)?;

        let bytes: [u8; PUBKEY_BYTES] = bytes
            .try_into()
            .map_err(|_| ParsePubkeyError::WrongSize)?;

        Ok(Self(bytes))
    }
}

impl AsRef<[u8]> for Pubkey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Pubkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&bs58::encode(self.0).into_string())
    }
}

impl fmt::Debug for Pubkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pubkey({})", self)
    }
}

/// Commitment level a query is evaluated at.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Commitment {
    /// Most recent block seen by the node.
    Processed,
    /// Block voted on by a supermajority.
    Confirmed,
    /// Block rooted by a supermajority.
    Finalized,
}
