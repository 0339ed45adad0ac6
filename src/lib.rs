//! # plateau-rover
//!
//! Simulates rovers on a bounded rectangular plateau. Each rover starts from a
//! pose and executes a string of `L`/`R`/`M` instructions one symbol at a time;
//! moves are clamped at the plateau edge and the first invalid symbol or
//! out-of-bounds pose ends that rover's run.
//!
//! The interpreter is pure. All console output goes through a
//! [`ReportSink`] passed to [`run_all`].

pub mod driver;
pub mod error;
pub mod interpreter;
pub mod mission;
pub mod plateau;
pub mod rover;

pub use driver::*;
pub use error::*;
pub use interpreter::*;
pub use mission::*;
pub use plateau::*;
pub use rover::*;
