pub use error::HssError;

mod error;
pub(crate) mod list;
pub(crate) mod point;
#[cfg(test)]
pub(crate) mod test_utils;
