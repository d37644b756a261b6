use super::valtype::ValType;

/// Global types classify global variables, which hold a value and can either be mutable or
/// immutable.
///
/// <https://webassembly.github.io/spec/core/syntax/types.html#global-types>
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct GlobalType(pub Mut, pub ValType);

#[derive(Debug, PartialEq, Copy, Clone)]
pub enum Mut {
    Const,
    Var,
}
