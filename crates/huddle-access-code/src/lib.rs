//! Stateless meeting access codes.
//!
//! An access code is 8 decimal digits: a 4-digit keyed checksum of the meeting
//! minute (plus the normalized client label) followed by the meeting's
//! minute-since-epoch value modulo 10000. Nothing is stored; the resolver
//! recovers the meeting start by sweeping the minutes that share the code's
//! time digits and regenerating each candidate.

pub mod code;
pub mod error;
pub mod generator;
pub mod hash;
pub mod resolver;
pub mod time;
pub mod window;

pub use code::{AccessCode, normalize_label};
pub use error::AccessCodeError;
pub use generator::{CodeGenerator, CodeSecret, GeneratedCode};
pub use resolver::{CodeResolver, RejectReason, Resolution};
pub use time::parse_meeting_time;
pub use window::ValidityWindow;
