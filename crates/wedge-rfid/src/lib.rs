//! RFID frame decoding for the keyboard wedge.
//!
//! The [`awid`] module turns one raw AWID line into a [`TagIdentity`]; the
//! [`processor`] module applies the session's [`ReadMode`] to decide whether
//! a line is decoded or forwarded as-is.
//!
//! ```
//! use wedge_rfid::awid;
//!
//! let tag = awid::decode("0400006001").unwrap();
//! assert_eq!(tag.to_string(), "8:192");
//! ```
//!
//! [`TagIdentity`]: wedge_core::TagIdentity
//! [`ReadMode`]: wedge_core::ReadMode

pub mod awid;
pub mod processor;

pub use awid::{BitStream, decode};
pub use processor::process_frame;
