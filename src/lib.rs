//! Bitframe: bit-addressable byte buffers with auto-growing placement.
//!
//! # Overview
//!
//! Bitframe provides the low-level buffer primitive that sits beneath
//! protocol encoders, binary-format readers, and wire serializers: a
//! contiguous, growable sequence of bytes where every byte is individually
//! addressable down to the bit.
//!
//! Two cooperating types form the buffer:
//!
//! - [`ByteEntity`]: a single fixed-width 8-bit value with per-bit
//!   read/write access, bitwise algebra, and inclusive bit-range extraction
//! - [`Frame`]: an ordered, growable sequence of entities with positional
//!   placement, concatenation, splicing, and reversal
//!
//! # Core Guarantees
//!
//! - **Bounds-checked access**: every bit index, byte index, and splice
//!   endpoint is validated; violations surface as typed errors, never as
//!   silent clamping or auto-correction
//! - **Growth never truncates**: placing a value past the end grows the
//!   frame to exactly the highest index touched, padding new positions with
//!   the frame's fill policy; existing content is never shrunk or reordered
//! - **Value semantics**: frames own their entities exclusively; cloning
//!   deep-copies every byte, and no two frames ever alias storage
//! - **Snapshot views**: the raw byte view is an owned copy whose validity
//!   cannot be invalidated by later mutations
//!
//! # Example
//!
//! ```
//! use bitframe::{ByteEntity, Frame};
//!
//! let mut frame = Frame::from_slice(&[0x01, 0x02]);
//! frame.place_at(5, 0x37);
//! assert_eq!(frame.len(), 6);
//! assert_eq!(frame.raw_bytes(), [0x01, 0x02, 0x00, 0x00, 0x00, 0x37]);
//!
//! let entity = ByteEntity::from_value(0b1111_0000);
//! assert_eq!((!entity).to_value(), 0b0000_1111);
//! ```
//!
//! # Module Structure
//!
//! - [`frame`]: the buffer types ([`ByteEntity`], [`Frame`], bit iteration)
//! - [`error`]: typed error surface ([`FrameError`], [`Result`])

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_inception)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_const_for_fn)]

pub mod error;
pub mod frame;

pub use error::{FrameError, Result};
pub use frame::{Bits, ByteEntity, Frame};
