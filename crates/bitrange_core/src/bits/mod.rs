//! Bit-level building blocks.
//!
//! This module provides:
//! - [`bit_width`]: smallest bit count and all-ones mask covering a maximum value
//! - [`word`]: the unsigned buffer words (`u32`, `u64`) the strategies draw into

pub mod bit_width;
pub mod word;

pub use bit_width::{
    bit_count_and_mask_u16, bit_count_and_mask_u32, bit_count_and_mask_u64,
    bit_count_and_mask_u8, is_power_of_two_u32, is_power_of_two_u64, smear_u32, smear_u64,
    BitWidth,
};
pub use word::{NativeWord, Word, WordMode, WORD_MODE};
