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

//! Reusable engine, table, and kernels shared by every width and preset.

pub(crate) mod kernel;
pub(crate) mod profile;
pub(crate) mod table;
pub(crate) mod tuner;
pub(crate) mod word;

use core::fmt;

pub use kernel::Kernel;
pub use profile::Profile;
pub use word::CrcWord;

use table::Table;

use crate::error::Error;

/// A stateful CRC engine for a fixed profile and width `W`.
///
/// Construction builds the 32x256 table once; `consume` never allocates.
/// See the crate-level docs for the streaming contract.
#[derive(Clone)]
pub struct Engine<W: CrcWord> {
    profile: Profile<W>,
    table: Table<W>,
    register: W,
    active_kernel: Kernel,
}

impl<W: CrcWord> Engine<W> {
    /// Build a new engine for `profile`, constructing its table up front.
    pub fn new(profile: Profile<W>) -> Self {
        let table = Table::build(&profile);
        let register = profile.initial_register();
        let active_kernel = profile.default_kernel;
        Self {
            profile,
            table,
            register,
            active_kernel,
        }
    }

    /// The profile this engine was constructed with.
    pub fn profile(&self) -> &Profile<W> {
        &self.profile
    }

    /// The kernel that `consume` uses when not overridden.
    pub fn active_kernel(&self) -> Kernel {
        self.active_kernel
    }

    /// Reset the register to its post-construction value.
    pub fn reset(&mut self) {
        self.register = self.profile.initial_register();
    }

    /// Fold `data` into the register using the active kernel. A no-op for
    /// empty input.
    pub fn consume(&mut self, data: &[u8]) {
        self.consume_with(data, self.active_kernel);
    }

    /// Fold `data` into the register using `kernel`, for this call only.
    pub fn consume_with(&mut self, data: &[u8], kernel: Kernel) {
        if data.is_empty() {
            return;
        }
        self.register = kernel::run(kernel, &self.table, self.register, self.profile.reflect_in, data);
    }

    /// Compute the finalized digest without mutating the register.
    pub fn digest(&self) -> W {
        let mut value = self.register;
        if self.profile.reflect_in ^ self.profile.reflect_out {
            value = value.reflect();
        }
        value.bitxor(self.profile.xor_out)
    }

    /// Benchmark all five kernels over the default scratch buffer
    /// (8191 bytes, 128 repeats) and adopt the fastest.
    pub fn tune(&mut self) -> Kernel {
        self.tune_with(tuner::DEFAULT_BUFFER_SIZE, tuner::DEFAULT_REPEATS)
    }

    /// Benchmark all five kernels over a `buffer_size`-byte scratch buffer,
    /// `repeats` times each, and adopt the fastest. Leaves the digest that a
    /// subsequent `consume`+`digest` pair would produce unaffected.
    pub fn tune_with(&mut self, buffer_size: usize, repeats: usize) -> Kernel {
        let best = tuner::tune(
            &self.table,
            self.register,
            self.profile.reflect_in,
            buffer_size,
            repeats,
        );
        self.active_kernel = best;
        self.reset();
        best
    }
}

impl<W: CrcWord> fmt::Debug for Engine<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("profile", &self.profile.name)
            .field("active_kernel", &self.active_kernel)
            .finish()
    }
}

/// A width-erased engine, for callers that only know the width at runtime.
///
/// This is the concrete type behind [`crate::make_engine`]; most callers
/// that know their width at compile time should prefer the generic
/// [`Engine<W>`] directly (or one of the preset constructors).
pub enum DynEngine {
    /// A 16-bit engine.
    Width16(Engine<u16>),
    /// A 32-bit engine.
    Width32(Engine<u32>),
    /// A 64-bit engine.
    Width64(Engine<u64>),
}

impl DynEngine {
    /// Reset the register to its post-construction value.
    pub fn reset(&mut self) {
        match self {
            DynEngine::Width16(engine) => engine.reset(),
            DynEngine::Width32(engine) => engine.reset(),
            DynEngine::Width64(engine) => engine.reset(),
        }
    }

    /// Fold `data` into the register using the active kernel.
    pub fn consume(&mut self, data: &[u8]) {
        match self {
            DynEngine::Width16(engine) => engine.consume(data),
            DynEngine::Width32(engine) => engine.consume(data),
            DynEngine::Width64(engine) => engine.consume(data),
        }
    }

    /// Fold `data` into the register using `kernel`, for this call only.
    pub fn consume_with(&mut self, data: &[u8], kernel: Kernel) {
        match self {
            DynEngine::Width16(engine) => engine.consume_with(data, kernel),
            DynEngine::Width32(engine) => engine.consume_with(data, kernel),
            DynEngine::Width64(engine) => engine.consume_with(data, kernel),
        }
    }

    /// Compute the finalized digest, widened to `u64`.
    pub fn digest(&self) -> u64 {
        match self {
            DynEngine::Width16(engine) => engine.digest() as u64,
            DynEngine::Width32(engine) => engine.digest() as u64,
            DynEngine::Width64(engine) => engine.digest(),
        }
    }

    /// Benchmark all five kernels over the default scratch buffer and adopt
    /// the fastest.
    pub fn tune(&mut self) -> Kernel {
        match self {
            DynEngine::Width16(engine) => engine.tune(),
            DynEngine::Width32(engine) => engine.tune(),
            DynEngine::Width64(engine) => engine.tune(),
        }
    }

    /// Benchmark all five kernels over a `buffer_size`-byte scratch buffer,
    /// `repeats` times each, and adopt the fastest.
    pub fn tune_with(&mut self, buffer_size: usize, repeats: usize) -> Kernel {
        match self {
            DynEngine::Width16(engine) => engine.tune_with(buffer_size, repeats),
            DynEngine::Width32(engine) => engine.tune_with(buffer_size, repeats),
            DynEngine::Width64(engine) => engine.tune_with(buffer_size, repeats),
        }
    }

    /// Bit width of the underlying engine (16, 32, or 64).
    pub fn width(&self) -> u32 {
        match self {
            DynEngine::Width16(_) => 16,
            DynEngine::Width32(_) => 32,
            DynEngine::Width64(_) => 64,
        }
    }
}

/// Build an engine from a runtime-checked width and parameterization.
///
/// This is the dynamic counterpart to constructing an [`Engine<W>`]
/// directly: `width` is validated against `{16, 32, 64}`
/// ([`Error::UnsupportedWidth`]), and `polynomial`/`initial`/`xor_out` are
/// validated against it ([`Error::InvalidProfile`]) before the
/// corresponding generic engine is constructed.
pub fn make_engine(
    width: u32,
    polynomial: u64,
    initial: u64,
    xor_out: u64,
    reflect_in: bool,
    reflect_out: bool,
    default_kernel: Kernel,
) -> Result<DynEngine, Error> {
    let mask: u64 = match width {
        16 => 0xFFFF,
        32 => 0xFFFF_FFFF,
        64 => u64::MAX,
        other => return Err(Error::UnsupportedWidth { width: other }),
    };

    for (field, value) in [
        ("polynomial", polynomial),
        ("initial", initial),
        ("xor_out", xor_out),
    ] {
        if value & !mask != 0 {
            return Err(Error::InvalidProfile { field, width });
        }
    }

    let engine = match width {
        16 => DynEngine::Width16(Engine::new(Profile::new(
            "custom",
            polynomial as u16,
            initial as u16,
            xor_out as u16,
            reflect_in,
            reflect_out,
            default_kernel,
        ))),
        32 => DynEngine::Width32(Engine::new(Profile::new(
            "custom",
            polynomial as u32,
            initial as u32,
            xor_out as u32,
            reflect_in,
            reflect_out,
            default_kernel,
        ))),
        64 => DynEngine::Width64(Engine::new(Profile::new(
            "custom",
            polynomial,
            initial,
            xor_out,
            reflect_in,
            reflect_out,
            default_kernel,
        ))),
        _ => unreachable!("width already validated above"),
    };
    Ok(engine)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CRC16_ARC: Profile<u16> =
        Profile::new("crc16", 0x8005, 0x0000, 0x0000, true, true, Kernel::Word4);

    #[test]
    fn reset_then_empty_digest_is_initial_xor_xor_out() {
        let mut engine = Engine::new(CRC16_ARC);
        engine.consume(b"garbage to perturb the register");
        engine.reset();
        assert_eq!(engine.digest(), 0x0000);
    }

    #[test]
    fn tune_does_not_affect_subsequent_digest() {
        let mut tuned = Engine::new(CRC16_ARC);
        tuned.tune_with(256, 4);
        tuned.consume(b"123456789");
        let mut fresh = Engine::new(CRC16_ARC);
        fresh.consume(b"123456789");
        assert_eq!(tuned.digest(), fresh.digest());
    }

    #[test]
    fn make_engine_rejects_bad_width() {
        let err = make_engine(24, 0, 0, 0, false, false, Kernel::Byte).unwrap_err();
        assert!(matches!(err, Error::UnsupportedWidth { width: 24 }));
    }

    #[test]
    fn make_engine_rejects_oversized_polynomial() {
        let err = make_engine(16, 0x1_0000, 0, 0, false, false, Kernel::Byte).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidProfile {
                field: "polynomial",
                width: 16
            }
        ));
    }

    #[test]
    fn make_engine_matches_generic_crc16_arc() {
        let mut dynamic = make_engine(16, 0x8005, 0x0000, 0x0000, true, true, Kernel::Byte).unwrap();
        dynamic.consume(b"123456789");
        assert_eq!(dynamic.digest(), 0xBB3D);
    }
}
