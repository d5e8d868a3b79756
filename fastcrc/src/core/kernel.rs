// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The five processing kernels.
//!
//! All five compute the exact same register update; they differ only in
//! how many input bytes they fold per table lookup. [`Kernel::Byte`] is the
//! reference: one byte, one lookup. The word kernels absorb 4, 8, 16, or 32
//! bytes (1, 2, 4, or 8 native `u32` words) per fused step using that many
//! rows of the table (the "slicing-by-N" technique), then hand any
//! non-multiple remainder back to the byte kernel.

use super::table::Table;
use super::word::CrcWord;

/// Selects which inner-loop shape processes a `consume` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kernel {
    /// One byte per table lookup.
    Byte,
    /// One 32-bit word (4 bytes) per fused step. On a 64-bit register this
    /// has no second word to absorb the high half into, so it's processed
    /// as [`Kernel::Byte`] instead — still correct, just not fused.
    Word1,
    /// Two 32-bit words (8 bytes) per fused step.
    Word2,
    /// Four 32-bit words (16 bytes) per fused step.
    Word4,
    /// Eight 32-bit words (32 bytes) per fused step.
    Word8,
}

impl Kernel {
    /// Every kernel, in the order the self-tuner trials them.
    pub const ALL: [Kernel; 5] = [
        Kernel::Byte,
        Kernel::Word1,
        Kernel::Word2,
        Kernel::Word4,
        Kernel::Word8,
    ];

    fn word_count(self) -> Option<usize> {
        match self {
            Kernel::Byte => None,
            Kernel::Word1 => Some(1),
            Kernel::Word2 => Some(2),
            Kernel::Word4 => Some(4),
            Kernel::Word8 => Some(8),
        }
    }

    /// Blocks processed per outer-loop pass; purely an instruction-scheduling
    /// hint, never a correctness requirement.
    fn unroll_factor(n: usize) -> usize {
        match n {
            1 => 16,
            2 => 8,
            4 => 4,
            8 => 2,
            _ => 1,
        }
    }
}

/// Dispatch `data` through `kernel`, returning the updated register.
///
/// `Kernel::Word1` has only one 32-bit word per block, but a `W = u64`
/// register needs two (one for each half once reflected/byte-swapped in) to
/// carry the pre-block register value all the way into `acc` — see
/// `fold_block`. That combination falls back to the byte kernel instead of
/// silently losing the high half of the register.
pub(crate) fn run<W: CrcWord>(
    kernel: Kernel,
    table: &Table<W>,
    register: W,
    reflect_in: bool,
    data: &[u8],
) -> W {
    match kernel.word_count() {
        None => byte_kernel(table, register, reflect_in, data),
        Some(1) if W::BITS == 64 => byte_kernel(table, register, reflect_in, data),
        Some(n) => word_kernel(table, register, reflect_in, n, data),
    }
}

/// Byte-at-a-time kernel: the correctness reference every other kernel is
/// tested against.
pub(crate) fn byte_kernel<W: CrcWord>(
    table: &Table<W>,
    mut register: W,
    reflect_in: bool,
    data: &[u8],
) -> W {
    let row0 = table.row(0);
    if reflect_in {
        for &byte in data {
            let index = ((register.to_u64() as u8) ^ byte) as usize;
            register = register.shr(8).bitxor(row0[index]);
        }
    } else {
        for &byte in data {
            let index = (((register.to_u64() >> (W::BITS - 8)) as u8) ^ byte) as usize;
            register = register.shl(8).bitxor(row0[index]);
        }
    }
    register
}

/// Slicing-by-`4n` kernel: folds `n` native-endian 32-bit words (`4n` bytes)
/// per step, using rows `0..4n` of the table. Falls back to the byte kernel
/// for any input that doesn't fill a final block.
fn word_kernel<W: CrcWord>(
    table: &Table<W>,
    mut register: W,
    reflect_in: bool,
    n: usize,
    data: &[u8],
) -> W {
    let block_bytes = 4 * n;
    let unroll = Kernel::unroll_factor(n);
    let group_bytes = block_bytes * unroll;

    let mut offset = 0;
    while offset + group_bytes <= data.len() {
        let group = &data[offset..offset + group_bytes];
        for block in group.chunks_exact(block_bytes) {
            register = fold_block(table, register, reflect_in, n, block);
        }
        offset += group_bytes;
    }
    while offset + block_bytes <= data.len() {
        register = fold_block(table, register, reflect_in, n, &data[offset..offset + block_bytes]);
        offset += block_bytes;
    }
    byte_kernel(table, register, reflect_in, &data[offset..])
}

/// Fold one block of `n` native-endian 32-bit words into `register`.
///
/// The register is first absorbed into the leading word(s) of the block
/// (two words for `W = u64`, one otherwise); in the non-reflected path the
/// absorbed register is byte-swapped first to compensate for reading the
/// stream as native-endian words. Every byte of every word then indexes one
/// table row: word `n` (the most recently read) uses rows `0..4`, word
/// `n-1` uses rows `4..8`, and so on down to word 1, which uses rows
/// `4*(n-1)..4*(n-1)+4`. Within a word's group of four rows, its
/// most-significant byte uses the lowest row index.
fn fold_block<W: CrcWord>(
    table: &Table<W>,
    register: W,
    reflect_in: bool,
    n: usize,
    block: &[u8],
) -> W {
    debug_assert_eq!(block.len(), 4 * n);
    debug_assert!(n >= 2 || W::BITS != 64, "a 64-bit register needs at least two words to absorb into");
    let mut words = [0u32; 8];
    for (i, word) in words.iter_mut().take(n).enumerate() {
        *word = u32::from_ne_bytes(block[i * 4..i * 4 + 4].try_into().unwrap());
    }

    let absorbed = if reflect_in {
        register.to_u64()
    } else {
        register.byte_swap().to_u64()
    };
    words[0] ^= absorbed as u32;
    if W::BITS == 64 {
        words[1] ^= (absorbed >> 32) as u32;
    }

    let mut acc = W::ZERO;
    for k in 1..=n {
        let word = words[k - 1];
        for b in 0..4u32 {
            let row_index = 4 * (n - k) + b as usize;
            let byte = ((word >> (8 * (3 - b))) & 0xFF) as usize;
            acc = acc.bitxor(table.row(row_index)[byte]);
        }
    }
    acc
}
