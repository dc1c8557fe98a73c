use secrecy::zeroize::Zeroize as _;

use super::{Error, HashFunction, Prk, max_output_length};

/// HKDF-Extract: condense `ikm` and `salt` into a [`Prk`].
///
/// An empty `salt` is replaced by `hash.digest_size()` zero bytes before use, so "no salt" and
/// "empty salt" are the same thing.
///
/// # Errors
///
/// Only [`Error::Primitive`], if `hash` fails.
#[tracing::instrument(level = "trace", skip_all, fields(hash = hash.name()))]
pub fn extract<H: HashFunction + ?Sized>(
	ikm: &[u8],
	salt: &[u8],
	hash: &H,
) -> Result<Prk, Error> {
	let zeroes;
	let salt = if salt.is_empty() {
		zeroes = vec![0u8; hash.digest_size()];
		&zeroes[..]
	} else {
		salt
	};

	let prk = checked_mac(hash, salt, ikm)?;

	Ok(prk.into())
}

/// HKDF-Expand: stretch `prk` into `length` bytes of output keying material bound to `info`.
///
/// Output for a shorter `length` is always a prefix of the output for a longer one.
///
/// # Errors
///
/// * [`Error::InvalidLength`] if `length` is more than 255 times the digest size of `hash`.
///   This is checked before any MAC is computed.
/// * [`Error::Primitive`] if `hash` fails.
#[tracing::instrument(level = "trace", skip(prk, info, hash), fields(hash = hash.name()))]
pub fn expand<H: HashFunction + ?Sized>(
	prk: &[u8],
	info: &[u8],
	length: usize,
	hash: &H,
) -> Result<Vec<u8>, Error> {
	check_length(length, hash)?;

	let mut okm = vec![0u8; length];

	expand_into(prk, info, &mut okm, hash)?;

	Ok(okm)
}

/// Like [`expand`], but fills `okm` instead of allocating; the requested length is `okm.len()`.
///
/// On error `okm` is left zeroed.
///
/// # Errors
///
/// As for [`expand`].
pub fn expand_into<H: HashFunction + ?Sized>(
	prk: &[u8],
	info: &[u8],
	okm: &mut [u8],
	hash: &H,
) -> Result<(), Error> {
	let length = okm.len();
	check_length(length, hash)?;

	let mut block: Vec<u8> = Vec::new();
	let mut message: Vec<u8> = Vec::with_capacity(hash.digest_size() + info.len() + 1);
	let mut block_index: usize = 1;
	let mut filled = 0;

	let result = loop {
		if filled >= length {
			break Ok(());
		}

		// T(i) = MAC(PRK, T(i-1) || info || i)
		message.clear();
		message.extend_from_slice(&block);
		message.extend_from_slice(info);
		message.push((block_index % 256) as u8);

		block.zeroize();
		block = match checked_mac(hash, prk, &message) {
			Ok(b) => b,
			Err(e) => break Err(e),
		};

		let take = block.len().min(length - filled);
		okm[filled..filled + take].copy_from_slice(&block[..take]);
		filled += take;
		block_index += 1;
	};

	block.zeroize();
	message.zeroize();

	if result.is_err() {
		okm.zeroize();
	}

	result
}

/// Extract, then expand: the whole of HKDF in one call.
///
/// ```rust
/// # use hkdf_engine::{Error, Sha256};
/// # fn main() -> Result<(), Error> {
/// let okm = hkdf_engine::derive(b"shared secret", b"some salt", b"session key", 32, &Sha256)?;
///
/// assert_eq!(32, okm.len());
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// As for [`extract`] and [`expand`].
#[tracing::instrument(level = "trace", skip(ikm, salt, info, hash), fields(hash = hash.name()))]
pub fn derive<H: HashFunction + ?Sized>(
	ikm: &[u8],
	salt: &[u8],
	info: &[u8],
	length: usize,
	hash: &H,
) -> Result<Vec<u8>, Error> {
	let prk = extract(ikm, salt, hash)?;

	expand(prk.expose_secret(), info, length, hash)
}

fn check_length<H: HashFunction + ?Sized>(length: usize, hash: &H) -> Result<(), Error> {
	let max = max_output_length(hash);

	if length > max {
		tracing::debug!(length, max, "Refusing to expand beyond the HKDF output limit");
		return Err(Error::invalid_length(length, max));
	}

	Ok(())
}

fn checked_mac<H: HashFunction + ?Sized>(
	hash: &H,
	key: &[u8],
	message: &[u8],
) -> Result<Vec<u8>, Error> {
	let mut out = hash.mac(key, message)?;

	if out.len() != hash.digest_size() {
		let len = out.len();
		out.zeroize();
		return Err(Error::primitive(format!(
			"{} returned {len} bytes, expected {}",
			hash.name(),
			hash.digest_size()
		)));
	}

	Ok(out)
}
