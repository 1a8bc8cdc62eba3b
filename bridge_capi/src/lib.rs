#![allow(clippy::needless_lifetimes)] // Diplomat requires explicit lifetimes at times
#![allow(clippy::wrong_self_convention)] // Diplomat forces self conventions that may not always be ideal

//! C interface to `temporal_bridge`.
//!
//! Every entry point is exported with a `temporal_bridge_` symbol prefix.
//! Text crosses the boundary as UTF-8 byte slices in and `DiplomatWrite`
//! sinks out.

extern crate alloc;

pub mod error;
pub mod fields;
pub mod formatter;
pub mod instant;
pub mod iterator;
pub mod locale;
pub mod plain_date;
pub mod plain_date_time;
pub mod plain_time;
