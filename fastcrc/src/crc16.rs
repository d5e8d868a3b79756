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

use digest::core_api::OutputSizeUser;
use digest::typenum::U2;
use digest::{FixedOutput, FixedOutputReset, HashMarker, Output, Reset, Update};

use crate::core::{Engine, Kernel, Profile};

/// CRC-16/ARC, a.k.a. CRC-16 or CRC-IBM: used by Modbus's sibling variants
/// and many embedded link layers.
const ARC: Profile<u16> = Profile::new("crc16/arc", 0x8005, 0x0000, 0x0000, true, true, Kernel::Word4);

/// CRC-16/CCITT-FALSE, despite the name the variant most BACnet and XMODEM
/// tooling actually means by "CRC-16/CCITT".
const CCITT_FALSE: Profile<u16> = Profile::new(
    "crc16/ccitt-false",
    0x1021,
    0xFFFF,
    0x0000,
    false,
    false,
    Kernel::Word4,
);

/// Streaming CRC-16/ARC digest implementing the RustCrypto `digest::Digest`
/// blanket impl.
#[derive(Clone)]
pub struct Crc16 {
    inner: Engine<u16>,
}

impl Crc16 {
    /// Create a new CRC-16/ARC digest instance.
    pub fn new() -> Self {
        Self {
            inner: Engine::new(ARC),
        }
    }

    /// Retrieve the checksum as `u16`.
    pub fn finalize_u16(self) -> u16 {
        self.inner.digest()
    }
}

impl Default for Crc16 {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputSizeUser for Crc16 {
    type OutputSize = U2;
}

impl Update for Crc16 {
    fn update(&mut self, data: &[u8]) {
        self.inner.consume(data);
    }
}

impl Reset for Crc16 {
    fn reset(&mut self) {
        self.inner.reset();
    }
}

impl FixedOutput for Crc16 {
    fn finalize_into(self, out: &mut Output<Self>) {
        out.copy_from_slice(&self.finalize_u16().to_be_bytes());
    }
}

impl FixedOutputReset for Crc16 {
    fn finalize_into_reset(&mut self, out: &mut Output<Self>) {
        out.copy_from_slice(&self.inner.digest().to_be_bytes());
        self.inner.reset();
    }
}

impl HashMarker for Crc16 {}

/// One-shot helper for calculating CRC-16/ARC over a byte slice.
pub fn crc16(data: &[u8]) -> u16 {
    let mut digest = Crc16::new();
    digest.update(data);
    digest.finalize_u16()
}

/// Streaming CRC-16/CCITT-FALSE digest implementing the RustCrypto
/// `digest::Digest` blanket impl.
#[derive(Clone)]
pub struct Crc16Ccitt {
    inner: Engine<u16>,
}

impl Crc16Ccitt {
    /// Create a new CRC-16/CCITT-FALSE digest instance.
    pub fn new() -> Self {
        Self {
            inner: Engine::new(CCITT_FALSE),
        }
    }

    /// Retrieve the checksum as `u16`.
    pub fn finalize_u16(self) -> u16 {
        self.inner.digest()
    }
}

impl Default for Crc16Ccitt {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputSizeUser for Crc16Ccitt {
    type OutputSize = U2;
}

impl Update for Crc16Ccitt {
    fn update(&mut self, data: &[u8]) {
        self.inner.consume(data);
    }
}

impl Reset for Crc16Ccitt {
    fn reset(&mut self) {
        self.inner.reset();
    }
}

impl FixedOutput for Crc16Ccitt {
    fn finalize_into(self, out: &mut Output<Self>) {
        out.copy_from_slice(&self.finalize_u16().to_be_bytes());
    }
}

impl FixedOutputReset for Crc16Ccitt {
    fn finalize_into_reset(&mut self, out: &mut Output<Self>) {
        out.copy_from_slice(&self.inner.digest().to_be_bytes());
        self.inner.reset();
    }
}

impl HashMarker for Crc16Ccitt {}

/// One-shot helper for calculating CRC-16/CCITT-FALSE over a byte slice.
pub fn crc16_ccitt(data: &[u8]) -> u16 {
    let mut digest = Crc16Ccitt::new();
    digest.update(data);
    digest.finalize_u16()
}
