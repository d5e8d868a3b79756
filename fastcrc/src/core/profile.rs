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

use super::kernel::Kernel;
use super::word::CrcWord;

/// Immutable description of a CRC variant.
///
/// A `Profile<W>` is the six fields from the parameterization: polynomial,
/// initial register, output XOR mask, the two reflection flags, and the
/// kernel `tune`/construction falls back to absent an override. The width
/// itself is carried by `W` rather than stored as a field, so an
/// out-of-range width cannot be represented at all for this generic path —
/// see [`crate::make_engine`] for the runtime-checked entry point that
/// exists precisely because callers without a compile-time width need that
/// validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Profile<W: CrcWord> {
    /// Human-readable name, used for `Debug` output only.
    pub name: &'static str,
    /// Generator polynomial in normal (non-reflected) form, high bit omitted.
    pub polynomial: W,
    /// Initial register value, in non-reflected representation.
    pub initial: W,
    /// Value XORed into the register after the reflect-out step.
    pub xor_out: W,
    /// Whether input bytes are bit-reversed before folding.
    pub reflect_in: bool,
    /// Whether the register is bit-reversed before `xor_out`.
    pub reflect_out: bool,
    /// Kernel an [`Engine`](super::Engine) uses until `tune`d or overridden.
    pub default_kernel: Kernel,
}

impl<W: CrcWord> Profile<W> {
    /// Construct a profile from its six defining fields plus a display name.
    ///
    /// Because `W` is always a native `u16`/`u32`/`u64`, `polynomial`,
    /// `initial`, and `xor_out` can never carry bits above `W::BITS - 1` —
    /// the type itself is the proof. There is no fallible counterpart at
    /// this layer; [`crate::make_engine`] is where that check is real.
    pub const fn new(
        name: &'static str,
        polynomial: W,
        initial: W,
        xor_out: W,
        reflect_in: bool,
        reflect_out: bool,
        default_kernel: Kernel,
    ) -> Self {
        Self {
            name,
            polynomial,
            initial,
            xor_out,
            reflect_in,
            reflect_out,
            default_kernel,
        }
    }

    /// Register value right after construction or `reset()`.
    pub(crate) fn initial_register(&self) -> W {
        if self.reflect_in {
            self.initial.reflect()
        } else {
            self.initial
        }
    }
}
