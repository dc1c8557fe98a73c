//! HMAC-based Extract-and-Expand Key Derivation, as described in [RFC
//! 5869](https://www.rfc-editor.org/rfc/rfc5869).
//!
//! If you have a secret that isn't itself suitable for use as a key -- the output of a
//! Diffie-Hellman exchange, say, or a long-lived master secret -- and you need one or more proper
//! keys from it, then HKDF is what you want.  It happens in two steps:
//!
//! 1. **Extract** squeezes the input keying material (and an optional, non-secret salt) down into
//!    a fixed-length [`Prk`], a pseudorandom key that is as long as the underlying hash's digest.
//!
//! 2. **Expand** stretches that [`Prk`] out into as much output keying material as you ask for
//!    (up to 255 times the digest length), bound to an `info` string describing what the key is
//!    for.  Different `info`, different keys.
//!
//! You can call [`extract`] and [`expand`] (or [`derive`], which does both) directly, or create
//! an [`Hkdf`], which extracts once and then expands as many times as you like.
//!
//! ```rust
//! # use hkdf_engine::{Error, Hkdf};
//! # fn main() -> Result<(), Error> {
//! let hkdf = Hkdf::new(b"master secret", b"")?;
//!
//! let encryption_key = hkdf.expand(b"encryption", 32)?;
//! let signing_key = hkdf.expand(b"signing", 64)?;
//! # assert_ne!(encryption_key[..], signing_key[..32]);
//! # Ok(())
//! # }
//! ```
//!
//! # Picking a Hash
//!
//! The default is HMAC-SHA-512.  Anything implementing [`HashFunction`] can be used instead;
//! [`Sha1`], [`Sha256`], [`Sha384`] and [`Sha512`] are provided, and [`Algorithm`] lets you choose
//! between them at runtime.  Whatever you pick, extract and expand must use the same hash.
//!
//! Output keys are just bytes.  If you compare them, do it in constant time.
mod engine;
mod error;
mod hash;
mod kdf;
mod prk;

#[cfg(test)]
mod test_support;

pub use engine::Hkdf;
pub use error::Error;
pub use hash::{Algorithm, HashFunction, Sha1, Sha256, Sha384, Sha512, max_output_length};
pub use kdf::{derive, expand, expand_into, extract};
pub use prk::{Prk, generate_salt};
