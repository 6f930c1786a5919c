//! # bitrange_core: Foundation for Unbiased Range Generation
//!
//! ## Layer 1 (Foundation) Role
//!
//! bitrange_core is the bottom layer of the workspace, providing:
//! - O(1) bit width lookup via de Bruijn multiplication (`bits::bit_width`)
//! - Buffer word abstraction and static width selection (`bits::word`)
//! - The raw bit source contract and two seedable engines (`source`)
//! - Boundary kinds and error types (`types`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other bitrange_* crates, with minimal external dependencies:
//! - num-traits: Generic unsigned word arithmetic
//! - rand: `RngCore` / `SeedableRng` interoperability
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use bitrange_core::bits::bit_count_and_mask_u32;
//! use bitrange_core::source::{BitSource, SaveState, XorShift128Plus};
//!
//! let (bit_count, bit_mask) = bit_count_and_mask_u32(1428);
//! assert_eq!(bit_count, 11);
//! assert_eq!(bit_mask, 0x7FF);
//!
//! let mut source = XorShift128Plus::new(42);
//! let state = source.save_state();
//! let first = source.next_u64();
//! let mut restored = XorShift128Plus::restore_from_state(&state).unwrap();
//! assert_eq!(restored.next_u64(), first);
//! ```
//!
//! ## Feature Flags
//!
//! - `word32`: Buffer 32-bit words for outputs of 32 bits or fewer
//! - `serde`: Enable serialisation for `BoundaryKind` and `SourceState`

#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod bits;
pub mod source;
pub mod types;
