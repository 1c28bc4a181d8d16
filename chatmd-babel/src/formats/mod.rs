//! Format implementations
//!
//! This module contains all format implementations that convert between
//! block lists and text representations.

pub mod chatmd;
pub mod json;
pub mod treeviz;

pub use chatmd::ChatMdFormat;
pub use json::JsonFormat;
pub use treeviz::TreevizFormat;
