//! Fuzz target for running arbitrary program images.
//!
//! Feeds raw bytes to the interpreter as a program image mapped at 0x0000.
//! Execution is bounded by a step budget since an arbitrary program may loop
//! forever; every failure must be a clean out-of-bounds error (a read past
//! the end or any write into the image).

#![no_main]

use libfuzzer_sys::fuzz_target;
use nes_cpu::{Cpu, ExecutionError, ProgramImage, Step};

const MAX_STEPS: usize = 10_000;

fuzz_target!(|program: &[u8]| {
    let Ok(mut image) = ProgramImage::new(program) else {
        return;
    };
    let mut cpu = Cpu::new();

    for _ in 0..MAX_STEPS {
        match cpu.step(&mut image) {
            Ok(Step::Continue) => {}
            Ok(Step::Halt) => break,
            Err(ExecutionError::OutOfBounds { .. }) => break,
            Err(err) => panic!("unexpected error: {err}"),
        }
    }
});
