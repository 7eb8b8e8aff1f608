//! Prelude module for convenient imports.
//!
//! ```rust
//! use snmp_ber::prelude::*;
//! ```
//!
//! This imports:
//! - Decoding entry points: [`decode_value`], [`Message`], [`Pdu`]
//! - Core types: [`Oid`], [`Tag`], [`Value`], [`Variable`], [`VarBind`]
//! - Error handling: [`Error`], [`Result`]
//! - The [`oid!`] macro

pub use crate::ber::Tag;
pub use crate::error::{Error, Result};
pub use crate::message::Message;
pub use crate::oid::Oid;
pub use crate::pdu::{Pdu, PduResponse};
pub use crate::value::Value;
pub use crate::varbind::VarBind;
pub use crate::variable::{Variable, decode_value};
pub use crate::version::Version;

#[doc(no_inline)]
pub use crate::oid;
