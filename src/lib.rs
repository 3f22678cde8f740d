//! Command-line front end for the folio-fx effects.

pub mod cli;
pub mod logging;

pub use folio_core;
