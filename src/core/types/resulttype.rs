use super::valtype::ValType;

/// Result types classify the result of executing instructions or functions,
/// which is a sequence of values, written with brackets.
///
/// <https://webassembly.github.io/spec/core/syntax/types.html#result-types>
pub type ResultType = Vec<ValType>;
