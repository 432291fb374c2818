//! List transfer codec
//!
//! Turns an entry list into a single string that can ride in a route
//! parameter, and back again.

mod codec;
mod error;

pub use codec::{decode, encode};
