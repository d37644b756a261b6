use super::ValType;

/// Function types classify the signature of functions, mapping a vector of parameters to a
/// vector of results. They are also used to classify the inputs and outputs of blocks and of
/// indirect calls, which this representation carries pre-resolved rather than as type
/// indices.
///
/// <https://webassembly.github.io/spec/core/syntax/types.html#function-types>
#[derive(Debug, Clone, PartialEq)]
pub struct FuncType {
    pub parameters: Vec<ValType>,
    pub results: Vec<ValType>,
}
