#[derive(PartialEq, Eq, Clone, Copy)]
pub struct Error {
	pub kind: ErrorKind,
	pub message: &'static str,
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ErrorKind {
	/// The input is well formed but its value does not fit in 256 bits.
	RangeExceeded,

	/// The input is malformed.
	SyntaxError,

	/// A cache configuration outside of the supported limits.
	InvalidConfig,
}

impl std::fmt::Debug for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Error").field("kind", &self.kind).field("message", &self.message).finish()
	}
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let kind = match self.kind {
			ErrorKind::RangeExceeded => "value out of range",
			ErrorKind::SyntaxError => "syntax error",
			ErrorKind::InvalidConfig => "invalid configuration",
		};
		write!(f, "{kind}: {}", self.message)
	}
}

impl std::error::Error for Error {}

impl Error {
	pub fn new(kind: ErrorKind, msg: &'static str) -> Self {
		Self { kind, message: msg }
	}

	pub fn new_range_exceeded(msg: &'static str) -> Self {
		Self::new(ErrorKind::RangeExceeded, msg)
	}

	pub fn new_syntax_error(msg: &'static str) -> Self {
		Self::new(ErrorKind::SyntaxError, msg)
	}

	pub fn new_invalid_config(msg: &'static str) -> Self {
		Self::new(ErrorKind::InvalidConfig, msg)
	}

	pub fn is_range_exceeded(&self) -> bool {
		self.kind == ErrorKind::RangeExceeded
	}

	pub fn is_syntax_error(&self) -> bool {
		self.kind == ErrorKind::SyntaxError
	}
}

#[cold]
fn fail(err: fn() -> Error) -> Error {
	err()
}

#[inline(always)]
pub fn assert(what: bool, err: fn() -> Error) -> Result<(), Error> {
	if what { Ok(()) } else { Err(fail(err)) }
}

//--------------------------------------------------------------------------------------------------
