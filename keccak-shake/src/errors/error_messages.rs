use displaydoc::Display;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Display, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    //////////
    // Generic
    //////////
    /// Value out of range (max: {0}, found: {1})
    ValueOutOfRange(usize, usize),
    /// Size of vec/array does not match (expected: {0}, found: {1})
    LengthMismatch(usize, usize),

    //////////
    // Sponge
    //////////
    /// Sponge is already squeezing, reset before absorbing more input
    AbsorbAfterFinalize,
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
