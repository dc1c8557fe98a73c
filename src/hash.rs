use hmac::{Mac as _, digest::OutputSizeUser};
use std::{fmt, str::FromStr};
use typenum::Unsigned as _;

use super::Error;

/// The keyed hash underlying both halves of HKDF.
///
/// Anything that can compute a fixed-length MAC over an arbitrary key and message can drive the
/// key derivation.  The crate ships HMAC over SHA-1 and the SHA-2 family; [`Algorithm`] lets you
/// pick one of those at runtime.
///
/// Implementations must be stateless between calls: the same `(key, message)` always yields the
/// same `digest_size()` bytes.
pub trait HashFunction {
	/// A human-readable name, used in log output.
	fn name(&self) -> &'static str;

	/// The number of bytes every call to [`mac`](HashFunction::mac) returns.
	fn digest_size(&self) -> usize;

	/// Compute `MAC(key, message)`.
	///
	/// # Errors
	///
	/// Returns [`Error::Primitive`] if the underlying primitive cannot process its input.
	fn mac(&self, key: &[u8], message: &[u8]) -> Result<Vec<u8>, Error>;
}

impl<H: HashFunction + ?Sized> HashFunction for &H {
	fn name(&self) -> &'static str {
		(**self).name()
	}

	fn digest_size(&self) -> usize {
		(**self).digest_size()
	}

	fn mac(&self, key: &[u8], message: &[u8]) -> Result<Vec<u8>, Error> {
		(**self).mac(key, message)
	}
}

macro_rules! hmac_hash {
	($(#[$meta:meta])* $name:ident, $digest:ty, $label:literal) => {
		$(#[$meta])*
		#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
		pub struct $name;

		impl HashFunction for $name {
			fn name(&self) -> &'static str {
				$label
			}

			fn digest_size(&self) -> usize {
				<<$digest as OutputSizeUser>::OutputSize>::USIZE
			}

			fn mac(&self, key: &[u8], message: &[u8]) -> Result<Vec<u8>, Error> {
				let mut mac = hmac::Hmac::<$digest>::new_from_slice(key)
					.map_err(|e| Error::primitive(format!("HMAC-{}: {e}", $label)))?;
				mac.update(message);

				Ok(mac.finalize().into_bytes().to_vec())
			}
		}
	};
}

hmac_hash!(
	/// HMAC-SHA-1.  Only here for compatibility with protocols that still specify it.
	Sha1,
	sha1::Sha1,
	"SHA-1"
);
hmac_hash!(
	/// HMAC-SHA-256.
	Sha256,
	sha2::Sha256,
	"SHA-256"
);
hmac_hash!(
	/// HMAC-SHA-384.
	Sha384,
	sha2::Sha384,
	"SHA-384"
);
hmac_hash!(
	/// HMAC-SHA-512, the default for [`Hkdf`](super::Hkdf).
	Sha512,
	sha2::Sha512,
	"SHA-512"
);

/// A hash function chosen at runtime, for when the choice comes from configuration or the wire.
///
/// ```rust
/// # use hkdf_engine::{Algorithm, Error, HashFunction};
/// # fn main() -> Result<(), Error> {
/// let hash: Algorithm = "sha256".parse()?;
///
/// assert_eq!(Algorithm::Sha256, hash);
/// assert_eq!(32, hash.digest_size());
/// assert_eq!("SHA-256", hash.to_string());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Algorithm {
	Sha1,
	Sha256,
	Sha384,
	#[default]
	Sha512,
}

impl Algorithm {
	fn hash(self) -> &'static dyn HashFunction {
		match self {
			Self::Sha1 => &Sha1,
			Self::Sha256 => &Sha256,
			Self::Sha384 => &Sha384,
			Self::Sha512 => &Sha512,
		}
	}
}

impl HashFunction for Algorithm {
	fn name(&self) -> &'static str {
		self.hash().name()
	}

	fn digest_size(&self) -> usize {
		self.hash().digest_size()
	}

	fn mac(&self, key: &[u8], message: &[u8]) -> Result<Vec<u8>, Error> {
		self.hash().mac(key, message)
	}
}

impl fmt::Display for Algorithm {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for Algorithm {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_lowercase().replace('-', "").as_str() {
			"sha1" => Ok(Self::Sha1),
			"sha256" => Ok(Self::Sha256),
			"sha384" => Ok(Self::Sha384),
			"sha512" => Ok(Self::Sha512),
			_ => Err(Error::unknown_algorithm(s)),
		}
	}
}

/// The most output keying material a single expansion can produce with `hash`.
pub fn max_output_length<H: HashFunction + ?Sized>(hash: &H) -> usize {
	hash.digest_size() * 255
}
