// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
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

//! Crate-wide error type
//!
//! Every fallible operation in `core` returns [`Result<T>`], an alias over
//! [`EmulatorError`]. Bus open-bus reads are not errors and never construct
//! one; see `core::memory`.

use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, EmulatorError>;

/// Errors raised by the emulation core
#[derive(Debug, Error)]
pub enum EmulatorError {
    /// BIOS file could not be located on disk
    #[error("BIOS file not found: {0}")]
    BiosNotFound(String),

    /// BIOS image exceeds the 512 KiB ROM size
    #[error("BIOS image too large: expected at most {expected} bytes, got {got}")]
    BiosTooLarge { expected: usize, got: usize },

    /// BIOS image size mismatch (legacy exact-size check, retained for
    /// callers that still want strict sizing)
    #[error("invalid BIOS size: expected {expected} bytes, got {got}")]
    InvalidBiosSize { expected: usize, got: usize },

    /// Access to an address with no mapped region and no open-bus policy
    #[error("invalid memory access at address 0x{address:08X}")]
    InvalidMemoryAccess { address: u32 },

    /// Misaligned 16/32-bit access outside the explicit unaligned load/store
    /// instructions
    #[error("unaligned {size}-byte access at address 0x{address:08X}")]
    UnalignedAccess { address: u32, size: u8 },

    /// Dispatch landed on a primary/secondary opcode slot with no handler
    #[error("reserved instruction 0x{instruction:08X} at PC 0x{pc:08X}")]
    ReservedInstruction { instruction: u32, pc: u32 },

    /// Trapping arithmetic (ADD/ADDI/SUB) overflowed
    #[error("integer overflow at PC 0x{pc:08X}")]
    IntegerOverflow { pc: u32 },

    /// Underlying filesystem error while loading a BIOS image
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
