//! Building and linking
//!
//! [`AutomatonBuilder`] takes constructor calls from a parser and produces a
//! linked [`Regex`].

pub mod builder;
pub mod result;

pub use builder::AutomatonBuilder;
pub use result::Regex;
