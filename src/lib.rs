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

//! psrx: the execution core of a MIPS-I-class console emulator
//!
//! This crate provides the memory bus and CPU interpreter that define
//! correctness for everything layered above them. Peripheral devices (GPU,
//! SPU, CD-ROM, DMA, timers, controllers) are not part of this crate; they
//! would attach to the bus via [`core::memory::IODevice`].
//!
//! # Example
//!
//! ```no_run
//! use psrx::core::system::System;
//!
//! let mut system = System::new();
//! system.load_bios(&std::fs::read("bios.bin")?)?;
//! system.step()?;
//! # Ok::<(), psrx::core::error::EmulatorError>(())
//! ```
//!
//! # Modules
//!
//! - [`core::cpu`]: MIPS-I CPU interpreter (registers, dispatch, instruction
//!   semantics, branch/load delay slots, COP0)
//! - [`core::memory`]: Page-table-backed address map and memory bus
//! - [`core::system`]: Wires the bus and CPU together for a single-step loop
//!
//! # Error Handling
//!
//! All fallible operations return [`core::error::Result<T>`], an alias for
//! `Result<T, EmulatorError>`.

pub mod core;

// Re-export commonly used types
pub use core::error::{EmulatorError, Result};
