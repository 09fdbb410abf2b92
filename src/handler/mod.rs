pub mod error;
pub mod formula;
