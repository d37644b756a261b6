//! Static validation of decoded modules.
//!
//! Validation is a pure function over the module view: initializer expressions first (which
//! is also what populates the set of declared function references), then every function
//! body, threading an abstract operand stack through each instruction. The first failure
//! aborts the whole run; a module either validates fully or is rejected.
mod constexpr;
mod env;
mod expr;
mod stack;
mod typ;

use std::collections::HashSet;

use thiserror::Error;

use crate::core::indices::FuncIdx;
use crate::core::{ExportDesc, Module};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// An operand stack did not have the shape an instruction requires. The payload is a
    /// short advisory context naming the offending construct; callers should match on the
    /// variant, not the text.
    #[error("type mismatch: {0}")]
    TypeMismatch(String),

    #[error("unknown memory {0}")]
    UnknownMemory(u32),

    #[error("alignment must be smaller than the access width")]
    AlignmentTooLarge,

    #[error("unknown label")]
    UnknownLabel,

    #[error("unknown global")]
    UnknownGlobal,

    #[error("undeclared function reference")]
    UndeclaredFunctionReference,

    /// A construct whose typing rules are not implemented. Validation refuses such modules
    /// rather than guessing.
    #[error("unsupported instruction: {0}")]
    UnsupportedInstruction(&'static str),
}

/// Validates every initializer expression, cross-entity reference and function body of a
/// decoded module.
///
/// Order matters: globals, element segments and data segments run first, because walking
/// their constant expressions is what declares function references; exported functions are
/// declared next; only then are function bodies checked against the completed set. The
/// module itself is never mutated.
pub fn validate(module: &Module) -> Result<(), ValidationError> {
    let mut refs: HashSet<FuncIdx> = HashSet::new();

    for global in &module.globals {
        constexpr::check_global(module, &mut refs, global)?;
    }
    for elem in &module.elems {
        constexpr::check_elem(module, &mut refs, elem)?;
    }
    for data in &module.datas {
        constexpr::check_data(module, &mut refs, data)?;
    }
    for export in &module.exports {
        if let ExportDesc::Func(idx) = export.desc {
            refs.insert(idx);
        }
    }

    for func in &module.funcs {
        expr::check_func(module, &refs, func)?;
    }
    Ok(())
}
