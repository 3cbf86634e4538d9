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

//! System integration: wires the CPU and bus together for a step loop.

use crate::core::cpu::CPU;
use crate::core::error::Result;
use crate::core::memory::Bus;

/// Owns the CPU and bus and drives single-instruction stepping
///
/// This is the minimal integration point the core exposes; a frontend
/// (CLI, test harness) creates one, loads a BIOS image, and calls
/// [`System::step`] or [`System::run_steps`] in a loop.
pub struct System {
    cpu: CPU,
    bus: Bus,
}

impl System {
    /// Create a new system with a fresh CPU and bus
    pub fn new() -> Self {
        Self {
            cpu: CPU::new(),
            bus: Bus::new(),
        }
    }

    /// Load a BIOS image (at most 512 KiB; shorter images are zero-padded)
    pub fn load_bios(&mut self, data: &[u8]) -> Result<()> {
        self.bus.load_bios(data)
    }

    /// Execute a single instruction
    ///
    /// Returns the number of cycles consumed (always 1; this core does not
    /// model cycle-exact timing).
    pub fn step(&mut self) -> Result<u32> {
        self.cpu.step(&mut self.bus)
    }

    /// Execute `count` instructions, stopping early on error
    pub fn run_steps(&mut self, count: u32) -> Result<()> {
        for _ in 0..count {
            self.step()?;
        }
        Ok(())
    }

    /// Borrow the CPU
    pub fn cpu(&self) -> &CPU {
        &self.cpu
    }

    /// Borrow the bus
    pub fn bus(&self) -> &Bus {
        &self.bus
    }

    /// Mutably borrow the bus (e.g. to write an executable into RAM before
    /// running it)
    pub fn bus_mut(&mut self) -> &mut Bus {
        &mut self.bus
    }
}

impl Default for System {
    fn default() -> Self {
        Self::new()
    }
}
