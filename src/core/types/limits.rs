/// Limits classify the size range of resizeable storage associated with memory types and
/// table types. If no maximum is given, the respective storage can grow to any size.
///
/// <https://webassembly.github.io/spec/core/syntax/types.html#limits>
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Limits {
    pub min: u32,
    pub max: Option<u32>,
}
