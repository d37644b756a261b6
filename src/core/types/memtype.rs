use super::limits::Limits;

/// Memory types classify linear memories and their size range. The limits constrain the
/// minimum and optionally the maximum size of a memory. The limits are given in units of
/// page size.
///
/// <https://webassembly.github.io/spec/core/syntax/types.html#memory-types>
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct MemType {
    pub limits: Limits,
}
