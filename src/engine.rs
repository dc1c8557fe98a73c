use std::fmt::Debug;

use super::{Error, HashFunction, Prk, Sha512, kdf};

/// Derive as many keys as you need from one piece of input keying material.
///
/// An [`Hkdf`] runs the extract step once, when it is created, and then hands out independent
/// output keys for each distinct `info` you ask it to expand.  Asking twice for the same `info`
/// and length gets you the same key twice.
///
/// Without a type parameter you get HKDF-SHA-512; use [`Hkdf::with_hash`] to pick another
/// [`HashFunction`].
///
/// # Example
///
/// ```rust
/// # use hkdf_engine::{Error, Hkdf, Sha256};
/// # fn main() -> Result<(), Error> {
/// let shared_secret = b"the result of some key agreement";
///
/// let hkdf = Hkdf::with_hash(shared_secret, b"handshake salt", Sha256)?;
///
/// let client_key = hkdf.expand(b"client write key", 32)?;
/// let server_key = hkdf.expand(b"server write key", 32)?;
///
/// assert_ne!(client_key, server_key);
///
/// // The default hash is SHA-512
/// let hkdf = Hkdf::new(shared_secret, b"")?;
/// assert_eq!(64, hkdf.digest_length());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Hkdf<H = Sha512> {
	hash: H,
	prk: Prk,
}

impl Hkdf<Sha512> {
	/// Create a new HKDF-SHA-512 [`Hkdf`].  An empty `salt` means "no salt".
	///
	/// # Errors
	///
	/// Only [`Error::Primitive`], which HMAC-SHA-512 won't produce.
	pub fn new(ikm: impl AsRef<[u8]>, salt: impl AsRef<[u8]>) -> Result<Self, Error> {
		Self::with_hash(ikm, salt, Sha512)
	}
}

impl<H: HashFunction> Hkdf<H> {
	/// Create a new [`Hkdf`] that uses `hash`.  An empty `salt` means "no salt".
	///
	/// # Errors
	///
	/// Will return [`Error::Primitive`] if `hash` fails during the extract step.
	#[tracing::instrument(level = "debug", skip(ikm, salt, hash), fields(hash = hash.name()))]
	pub fn with_hash(
		ikm: impl AsRef<[u8]>,
		salt: impl AsRef<[u8]>,
		hash: H,
	) -> Result<Self, Error> {
		let prk = kdf::extract(ikm.as_ref(), salt.as_ref(), &hash)?;

		Ok(Self { hash, prk })
	}

	/// Wrap a pseudorandom key that was extracted elsewhere.
	pub fn from_prk(prk: impl Into<Prk>, hash: H) -> Self {
		Self {
			hash,
			prk: prk.into(),
		}
	}

	pub fn digest_length(&self) -> usize {
		self.hash.digest_size()
	}

	pub fn hash(&self) -> &H {
		&self.hash
	}

	pub fn prk(&self) -> &Prk {
		&self.prk
	}

	/// Produce `length` bytes of output keying material for the context `info`.
	///
	/// # Errors
	///
	/// Will return [`Error::InvalidLength`] if `length` is more than 255 times
	/// [`digest_length`](Hkdf::digest_length), or [`Error::Primitive`] if the hash fails.
	#[tracing::instrument(level = "debug", skip(self), fields(hash = self.hash.name()))]
	pub fn expand(
		&self,
		info: impl AsRef<[u8]> + Debug,
		length: usize,
	) -> Result<Vec<u8>, Error> {
		kdf::expand(self.prk.expose_secret(), info.as_ref(), length, &self.hash)
	}

	/// Fill `okm` with output keying material for the context `info`.
	///
	/// # Errors
	///
	/// As for [`expand`](Hkdf::expand).
	#[tracing::instrument(
		level = "debug",
		skip(self, okm),
		fields(hash = self.hash.name(), length = okm.len())
	)]
	pub fn expand_into(
		&self,
		info: impl AsRef<[u8]> + Debug,
		okm: &mut [u8],
	) -> Result<(), Error> {
		kdf::expand_into(self.prk.expose_secret(), info.as_ref(), okm, &self.hash)
	}

	/// The old name for [`expand`](Hkdf::expand).
	///
	/// # Errors
	///
	/// As for [`expand`](Hkdf::expand).
	#[deprecated(note = "use expand() instead")]
	pub fn extract_key(
		&self,
		info: impl AsRef<[u8]> + Debug,
		length: usize,
	) -> Result<Vec<u8>, Error> {
		tracing::warn!("Hkdf::extract_key is deprecated, use Hkdf::expand instead");
		self.expand(info, length)
	}
}
