//! # Interpreter Configuration
//!
//! Knobs that change how the interpreter treats input it does not recognize.
//! Documented opcodes behave identically under every configuration.

/// What the interpreter does with an opcode byte that has no handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownOpcodePolicy {
    /// Treat the byte as a one-byte no-op and keep going.
    #[default]
    Skip,

    /// Stop with
    /// [`ExecutionError::UnimplementedOpcode`](crate::ExecutionError::UnimplementedOpcode).
    Error,
}

/// Interpreter configuration.
///
/// # Examples
///
/// ```
/// use nes_cpu::{Cpu, CpuConfig, ExecutionError, UnknownOpcodePolicy};
///
/// let config = CpuConfig::default().with_unknown_opcodes(UnknownOpcodePolicy::Error);
/// let mut cpu = Cpu::with_config(config);
///
/// assert_eq!(
///     cpu.interpret(&[0xFF, 0x00]),
///     Err(ExecutionError::UnimplementedOpcode(0xFF))
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CpuConfig {
    /// Handling of opcodes without a handler.
    pub unknown_opcodes: UnknownOpcodePolicy,
}

impl CpuConfig {
    /// Returns a copy with the given unknown-opcode policy.
    pub fn with_unknown_opcodes(mut self, policy: UnknownOpcodePolicy) -> Self {
        self.unknown_opcodes = policy;
        self
    }
}
