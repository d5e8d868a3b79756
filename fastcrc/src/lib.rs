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

//! FastCRC is a generic, table-driven CRC engine under a single crate.
//!
//! The crate is structured in layers:
//! - [`core`] hosts the width-generic engine, profile, table builder, the
//!   five processing kernels, and the self-tuner.
//! - [`crc16`], [`crc32`], and [`crc64`] contain the five named presets
//!   (CRC-16/ARC, CRC-16/CCITT-FALSE, CRC-32/IEEE, CRC-64/ECMA,
//!   CRC-64/ISO) plus their ergonomic one-shot and streaming helpers.
//! - [`error`] holds the two construction-time failure kinds.
//!
//! Top-level re-exports make the most common types available directly from
//! the crate root. Callers who only need a named preset should reach for
//! [`crc32`](crate::crc32()) and friends; callers building a custom
//! parameterization should construct an [`Engine`] from a [`Profile`]
//! directly, or go through [`make_engine`] if the width is only known at
//! runtime.

#![deny(unsafe_code)]

mod core;
mod crc16;
mod crc32;
mod crc64;
mod error;

pub use crate::core::{make_engine, CrcWord, DynEngine, Engine, Kernel, Profile};
pub use crate::crc16::{crc16, crc16_ccitt, Crc16, Crc16Ccitt};
pub use crate::crc32::{crc32, Crc32};
pub use crate::crc64::{crc64, crc64_iso, Crc64, Crc64Iso};
pub use crate::error::Error;
