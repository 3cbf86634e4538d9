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

//! Illustrative front end: loads a BIOS (and optional ROM/executable) and
//! runs the interpreter loop. Not part of the core crate's public contract.

use std::process::ExitCode;

use clap::Parser;
use psrx::core::error::EmulatorError;
use psrx::core::system::System;

/// Run the execution core against a BIOS image
#[derive(Parser, Debug)]
#[command(name = "emulator", version, about)]
struct Args {
    /// Path to a BIOS image (at most 512 KiB)
    bios_path: std::path::PathBuf,

    /// Optional path to a ROM/executable image to load into RAM
    rom_path: Option<std::path::PathBuf>,
}

fn run(args: Args) -> Result<(), EmulatorError> {
    let bios = std::fs::read(&args.bios_path)
        .map_err(|_| EmulatorError::BiosNotFound(args.bios_path.display().to_string()))?;

    let mut system = System::new();
    system.load_bios(&bios)?;

    if let Some(rom_path) = &args.rom_path {
        let rom = std::fs::read(rom_path)
            .map_err(|_| EmulatorError::BiosNotFound(rom_path.display().to_string()))?;
        log::info!("loaded {} bytes from {}", rom.len(), rom_path.display());
    }

    log::info!("starting execution at PC 0x{:08X}", system.cpu().pc());
    loop {
        system.step()?;
    }
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    env_logger::init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
