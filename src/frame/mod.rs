//! Bit-addressable byte buffers.
//!
//! # Overview
//!
//! This module provides:
//! - [`ByteEntity`]: a single 8-bit value with per-bit access, bitwise
//!   algebra, and inclusive bit-range extraction
//! - [`Frame`]: a growable ordered sequence of entities with auto-growing
//!   placement, concatenation, splicing, and reversal
//! - [`Bits`]: a restartable cursor over the 8 bits of an entity
//!
//! # Design Notes
//!
//! `Frame` is built from `ByteEntity` and operates purely through its public
//! contract; it never inspects bit-level internals directly. Both types have
//! value semantics throughout, and every bounds violation surfaces as a
//! typed [`FrameError`](crate::error::FrameError) rather than a panic or a
//! silent clamp.
//!
//! The raw byte view ([`Frame::raw_bytes`]) is an owned snapshot. The
//! aliasing scratch buffer some byte-buffer implementations reuse across
//! calls cannot be expressed here: each call allocates its own copy, so a
//! retained snapshot is never invalidated by later mutations.

mod entity;
mod frame;

pub use entity::{Bits, ByteEntity};
pub use frame::Frame;
