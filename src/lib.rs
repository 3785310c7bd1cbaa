//! Human-readable names for the MIDI 1.0 Control Change controllers.
//!
//! ```
//! use midi_cc_names::midi::cc;
//!
//! assert_eq!(cc::name(7u8).unwrap(), "MIDI Volume");
//! assert!(cc::name(128i32).is_err());
//! ```

pub mod midi;
pub use midi::{cc, CCName, ControllerNumber, Error};
