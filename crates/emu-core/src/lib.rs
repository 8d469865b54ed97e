//! Shared traits for bus-mapped chip emulators.
//!
//! Chips are driven by a host through [`Bus`] and inspected through
//! [`Observable`]. Neither trait knows anything about a particular chip.

mod bus;
mod observable;

pub use bus::Bus;
pub use observable::{Observable, Value, parse_address};
