use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariateError {
    /// The gaussian snapshot given to a generator is not consistent.
    /// A spare value was announced (`has_gauss == true`) but the stored
    /// value is not a finite number.
    #[error(
        "The gaussian snapshot is not consistent. A spare value was announced but the stored value is not a finite number. "
    )]
    InvalidState,
    /// A NaN (Not a Number) was found in the input.
    #[error("A NaN (Not a Number) was found in the input. ")]
    NanErr,
    /// The a number did not fullfill the conditions of the function.
    /// Usually it was infinite (`+-inf`) when only finite values are allowed.
    #[error(
        "The a number did not fullfill the conditions of the function. Usually it was infinite when only finite values are allowed. "
    )]
    InvalidNumber,
}
