/// Core functionality modules
///
/// Contains the command interpreter and the small helpers its rules use:
/// argument parsing, the calculator, calendar math and random picks.

pub mod args;
pub mod calculator;
pub mod calendar;
pub mod interpreter;
pub mod picker;

pub use calendar::{Clock, FixedClock, SystemClock};
pub use interpreter::Interpreter;

#[cfg(test)]
mod proptests;
