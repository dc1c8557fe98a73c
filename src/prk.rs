use secrecy::{ExposeSecret as _, SecretSlice};

use super::HashFunction;

/// A pseudorandom key, as produced by [`extract`](super::extract).
///
/// It is exactly as long as the digest of the hash function that produced it, and is the key for
/// every subsequent expansion.  The bytes are wiped when the [`Prk`] is dropped, and never appear
/// in [`Debug`] output.
#[derive(Debug)]
pub struct Prk(SecretSlice<u8>);

impl Prk {
	pub fn expose_secret(&self) -> &[u8] {
		self.0.expose_secret()
	}

	pub fn len(&self) -> usize {
		self.expose_secret().len()
	}

	pub fn is_empty(&self) -> bool {
		self.expose_secret().is_empty()
	}
}

impl Clone for Prk {
	fn clone(&self) -> Self {
		Self::from(self.expose_secret())
	}
}

impl From<Vec<u8>> for Prk {
	fn from(k: Vec<u8>) -> Self {
		Prk(k.into())
	}
}

impl From<&[u8]> for Prk {
	fn from(k: &[u8]) -> Self {
		k.to_vec().into()
	}
}

impl PartialEq for Prk {
	fn eq(&self, other: &Self) -> bool {
		constant_time_eq::constant_time_eq(self.expose_secret(), other.expose_secret())
	}
}

impl Eq for Prk {}

/// Create a random salt of the length RFC 5869 recommends for `hash`.
///
/// HKDF works without a salt, but a random one strengthens the extraction considerably.  It
/// doesn't need to be secret, so store it alongside whatever you derived with it.
#[tracing::instrument(level = "debug", skip(hash), fields(hash = hash.name()))]
pub fn generate_salt<H: HashFunction + ?Sized>(hash: &H) -> Vec<u8> {
	use rand::{RngCore, rng};

	let mut salt = vec![0u8; hash.digest_size()];

	rng().fill_bytes(&mut salt);

	salt
}
