//! Multi-touch tracking for a canvas stage.
//!
//! Browser touches are mapped into a centered virtual stage space, kept per contact in a
//! [`state::TouchRegistry`], and queried against sprite geometry: containment, distance to
//! the closest finger and its coordinates. [`context::TouchContext`] ties it together and
//! [`opcode`] exposes it to a block runtime.

pub mod config;
pub mod context;
pub mod error;
pub mod ingest;
pub mod listener;
pub mod mapper;
pub mod model;
pub mod opcode;
pub mod query;
pub mod state;
pub mod util;

pub use context::{TouchAction, TouchContext};
pub use error::{Error, Result};
