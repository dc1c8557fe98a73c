#[derive(Debug, thiserror::Error, thiserror_ext::Construct)]
#[non_exhaustive]
pub enum Error {
	#[error("requested {length} bytes of output keying material, maximum is {max}")]
	InvalidLength { length: usize, max: usize },

	#[error("MAC primitive failure: {0}")]
	Primitive(String),

	#[error("unknown hash algorithm: {0:?}")]
	UnknownAlgorithm(String),
}
