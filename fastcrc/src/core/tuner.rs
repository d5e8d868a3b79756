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

//! Self-tuner: a micro-benchmark that picks the fastest kernel for the
//! current host.

use std::hint::black_box;
use std::time::{Duration, Instant};

use super::kernel::{self, Kernel};
use super::table::Table;
use super::word::CrcWord;

/// Default scratch buffer size: large enough to amortize `Instant` overhead
/// without spilling out of L2 on most hosts.
pub const DEFAULT_BUFFER_SIZE: usize = 8191;
/// Default number of trials per kernel.
pub const DEFAULT_REPEATS: usize = 128;

/// Run all five kernels `repeats` times over a `buffer_size`-byte scratch
/// buffer and return the fastest. Never mutates `register` itself (each
/// trial starts from a local copy); the caller is responsible for resetting
/// its own register afterward.
pub(crate) fn tune<W: CrcWord>(
    table: &Table<W>,
    register: W,
    reflect_in: bool,
    buffer_size: usize,
    repeats: usize,
) -> Kernel {
    let scratch = vec![0u8; buffer_size];
    let mut best = Kernel::Byte;
    let mut best_elapsed = Duration::MAX;

    for candidate in Kernel::ALL {
        let start = Instant::now();
        let mut probe = register;
        for _ in 0..repeats {
            probe = kernel::run(candidate, table, probe, reflect_in, black_box(&scratch));
        }
        black_box(probe);
        let elapsed = start.elapsed();

        #[cfg(feature = "tracing")]
        tracing::debug!(kernel = ?candidate, ?elapsed, "tuner trial");

        if elapsed < best_elapsed {
            best_elapsed = elapsed;
            best = candidate;
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(winner = ?best, elapsed = ?best_elapsed, "tuner selected kernel");

    best
}
