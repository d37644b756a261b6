//! A type-checking validator for decoded WebAssembly modules.
//!
//! This library implements the validation phase of the WebAssembly [specification] for
//! already decoded, index-resolved modules: every function body, every constant initializer
//! expression and every cross-entity reference is checked against the type system, using
//! the standard polymorphic-stack discipline for unreachable code. The reference-types and
//! tail-call proposals are covered; of the GC proposal, the reference and i31 instructions
//! are typed while the structural struct/array/cast machinery is rejected as unsupported
//! rather than guessed at.
//!
//! The main entry point is the [`validate()`] function.
//!
//! [specification]: https://webassembly.github.io/spec/core/valid/index.html
#![forbid(unsafe_code)]

mod core;
pub use crate::core::indices;
pub use crate::core::instruction::{BlockType, Instruction, Memarg};
pub use crate::core::types;
pub use crate::core::{
    Data, DataMode, Elem, ElemMode, Export, ExportDesc, Expr, Func, Global, Module,
};

pub mod valid;
pub use valid::{validate, ValidationError};
