mod error;
pub use error::Error;

pub mod driver;

pub mod env;

pub mod models;
pub use models::Registry;

pub mod stmt;

/// A Result type alias that uses armature's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
