//! Derivation of display and search values from media records.
//!
//! Every function here is pure and total over its input record: missing
//! fields come back as documented defaults ("?" labels, sentinel
//! numbers, empty strings, or `None`) rather than errors. Nothing is
//! cached between calls and no input is ever mutated, so the whole
//! module is safe to call from any number of threads.

pub mod episodes;
pub mod relations;
pub mod status;
pub mod text;
pub mod time;
pub mod titles;
