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

use super::profile::Profile;
use super::word::CrcWord;

/// Number of rows. Row `j` holds the effect of advancing row 0's result by
/// an additional `8*j` bits of zero input, enabling slicing-by-(j+1) all
/// the way up to the 8-word (32 byte) kernel.
pub(crate) const ROWS: usize = 32;

/// A 32x256 lookup table of width-`W` entries, row 0 being the standard
/// byte-at-a-time CRC table and rows 1..31 its zero-extended descendants.
#[derive(Clone)]
pub(crate) struct Table<W: CrcWord> {
    rows: Box<[[W; 256]]>,
}

impl<W: CrcWord> Table<W> {
    pub(crate) fn row(&self, index: usize) -> &[W; 256] {
        &self.rows[index]
    }

    pub(crate) fn build(profile: &Profile<W>) -> Self {
        let mut rows = vec![[W::ZERO; 256]; ROWS];
        build_row0(&mut rows[0], profile);
        for j in 1..ROWS {
            let (done, rest) = rows.split_at_mut(j);
            let prev = &done[j - 1];
            build_next_row(&mut rest[0], prev, &done[0], profile.reflect_in);
        }
        Self {
            rows: rows.into_boxed_slice(),
        }
    }
}

fn build_row0<W: CrcWord>(row0: &mut [W; 256], profile: &Profile<W>) {
    for (i, slot) in row0.iter_mut().enumerate() {
        let v = i as u8;
        let seed = if profile.reflect_in { v.reverse_bits() } else { v };
        let mut reg = W::from_u64((seed as u64) << (W::BITS - 8));
        for _ in 0..8 {
            reg = shift_step(reg, profile.polynomial);
        }
        *slot = if profile.reflect_in { reg.reflect() } else { reg };
    }
}

fn build_next_row<W: CrcWord>(row: &mut [W; 256], prev: &[W; 256], row0: &[W; 256], reflect_in: bool) {
    for i in 0..256 {
        let p = prev[i];
        row[i] = if reflect_in {
            let next_index = (p.to_u64() & 0xFF) as usize;
            p.shr(8).bitxor(row0[next_index])
        } else {
            let next_index = ((p.to_u64() >> (W::BITS - 8)) & 0xFF) as usize;
            p.shl(8).bitxor(row0[next_index])
        };
    }
}

/// One MSB-first polynomial division step: shift left, XOR the polynomial
/// in whenever the bit shifted out was a 1.
fn shift_step<W: CrcWord>(reg: W, polynomial: W) -> W {
    let top_bit_set = (reg.to_u64() >> (W::BITS - 1)) & 1 != 0;
    let shifted = reg.shl(1);
    if top_bit_set {
        shifted.bitxor(polynomial)
    } else {
        shifted
    }
}
