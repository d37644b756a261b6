use super::numtype::NumType;
use super::reftype::RefType;

/// Value types classify the individual values that WebAssembly code can compute with and
/// the values that a variable accepts. They are either number types or reference types.
///
/// <https://webassembly.github.io/spec/core/syntax/types.html#value-types>
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum ValType {
    Num(NumType),
    Ref(RefType),
}
