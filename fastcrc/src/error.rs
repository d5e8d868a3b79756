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

//! Construction-time failures. Both kinds are programmer errors: neither
//! is raised by `consume` or `digest`, and neither is recoverable in place.

use thiserror::Error;

/// Failure constructing an engine through [`crate::make_engine`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// `width` was not one of the three supported register widths.
    #[error("unsupported CRC width: {width} bits (expected 16, 32, or 64)")]
    UnsupportedWidth {
        /// The width that was requested.
        width: u32,
    },

    /// A profile field carried bits above the representable range for its
    /// width.
    #[error("invalid profile: `{field}` has bits set above bit {width}-1")]
    InvalidProfile {
        /// Name of the offending field (`polynomial`, `initial`, or `xor_out`).
        field: &'static str,
        /// The width the field was checked against.
        width: u32,
    },
}
