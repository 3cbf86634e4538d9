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

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use psrx::core::system::System;

/// ADDIU r1, r0, 1; repeated. Never branches, never traps, so the loop
/// measures pure fetch/decode/dispatch overhead.
fn addiu_bios() -> Vec<u8> {
    let instr: u32 = 0x2401_0001; // addiu r1, r0, 1
    let mut bios = vec![0u8; 512 * 1024];
    for chunk in bios.chunks_mut(4) {
        chunk.copy_from_slice(&instr.to_le_bytes());
    }
    bios
}

fn bench_step(c: &mut Criterion) {
    let mut system = System::new();
    system.load_bios(&addiu_bios()).unwrap();

    c.bench_function("cpu_step_addiu", |b| {
        b.iter(|| {
            system.step().unwrap();
            black_box(system.cpu().reg(1));
        })
    });
}

fn bench_run_steps(c: &mut Criterion) {
    c.bench_function("cpu_run_1000_steps", |b| {
        b.iter(|| {
            let mut system = System::new();
            system.load_bios(&addiu_bios()).unwrap();
            system.run_steps(1000).unwrap();
            black_box(system.cpu().reg(1));
        })
    });
}

criterion_group!(benches, bench_step, bench_run_steps);
criterion_main!(benches);
