pub mod kind;

pub use lineq_error::Error;
