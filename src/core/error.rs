use thiserror::Error;

#[derive(Error, Debug)]
/// Errors raised by the library.
pub enum HssError {
    #[error("You must provide at least one point to select a subset from")]
    NoPoints,
    #[error("The subset selection is only available for 2 or 3 objectives, but {0} were given")]
    UnsupportedDimension(usize),
    #[error("The subset size ({0}) must be between 1 and the number of points ({1})")]
    InvalidSubsetSize(usize, usize),
    #[error("The {0} #{1} has {2} coordinates, but the points have {3} objectives")]
    WrongDimension(String, usize, usize, usize),
    #[error("A non-finite value was detected in the {0} #{1}")]
    NonFiniteValue(String, usize),
    #[error("Cannot allocate memory for {0}")]
    Allocation(String),
    #[error("An error occurred in the calculation of the '{0}' metric: {1}")]
    Metric(String, String),
    #[error("An error occurred when reading '{0}': {1}")]
    Io(String, String),
    #[error("Cannot parse line {1} of '{0}': {2}")]
    Parse(String, usize, String),
    #[error("The selected point #{0} is not in the set of {1} points")]
    MissingPoint(usize, usize),
    #[error("Invalid reference point '{0}'")]
    InvalidReferencePoint(String),
    #[error("The output format code must be between 0 and 4, but {0} was given")]
    InvalidOutputFormat(u8),
    #[error("An error occurred when exporting the selection data: {0}")]
    Export(String),
}
