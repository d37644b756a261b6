//! The per-function validation environment.
use std::collections::HashSet;

use super::typ::Typ;
use super::ValidationError;
use crate::core::indices::{ElemIdx, FuncIdx, GlobalIdx, LabelIdx, LocalIdx, TableIdx};
use crate::core::types::functype::FuncType;
use crate::core::types::globaltype::GlobalType;
use crate::core::types::tabletype::TableType;
use crate::core::types::valtype::ValType;
use crate::core::{Elem, Func, Global, Module};

/// Everything a function body is checked against: the module view, the function's locals
/// and result type, the jump targets of the enclosing blocks, and the set of function
/// indices that may be named by `ref.func`.
///
/// `locals` and `refs` are fixed for the whole walk; only the label stack changes, pushed
/// on block entry and popped on exit.
pub(crate) struct Env<'m> {
    pub(crate) module: &'m Module,
    pub(crate) locals: Vec<Typ>,
    pub(crate) result_type: &'m [ValType],
    /// Jump types of the enclosing blocks, innermost last.
    pub(crate) blocks: Vec<Vec<Typ>>,
    pub(crate) refs: &'m HashSet<FuncIdx>,
}

impl<'m> Env<'m> {
    pub(crate) fn new(
        module: &'m Module,
        signature: &'m FuncType,
        locals: &[ValType],
        refs: &'m HashSet<FuncIdx>,
    ) -> Self {
        let locals = signature
            .parameters
            .iter()
            .chain(locals)
            .copied()
            .map(Typ::from)
            .collect();
        Env {
            module,
            locals,
            result_type: &signature.results,
            blocks: Vec::new(),
            refs,
        }
    }

    pub(crate) fn local(&self, idx: LocalIdx) -> Result<Typ, ValidationError> {
        self.locals.get(idx.0 as usize).copied().ok_or_else(|| {
            ValidationError::TypeMismatch(format!("unknown local {}", idx.0))
        })
    }

    /// The stack shape a branch to the given label must produce. Label 0 is the innermost
    /// enclosing block.
    pub(crate) fn jump_type(&self, label: LabelIdx) -> Result<Vec<Typ>, ValidationError> {
        let Some(depth) = self.blocks.len().checked_sub(1 + label.0 as usize) else {
            return Err(ValidationError::UnknownLabel);
        };
        Ok(self.blocks[depth].clone())
    }

    pub(crate) fn func_type(&self, idx: FuncIdx) -> Result<&'m FuncType, ValidationError> {
        self.module
            .funcs
            .get(idx.0 as usize)
            .map(Func::signature)
            .ok_or_else(|| ValidationError::TypeMismatch(format!("unknown function {}", idx.0)))
    }

    pub(crate) fn global_type(&self, idx: GlobalIdx) -> Result<&'m GlobalType, ValidationError> {
        self.module
            .globals
            .get(idx.0 as usize)
            .map(Global::global_type)
            .ok_or(ValidationError::UnknownGlobal)
    }

    pub(crate) fn table_type(&self, idx: TableIdx) -> Result<&'m TableType, ValidationError> {
        self.module
            .tables
            .get(idx.0 as usize)
            .ok_or_else(|| ValidationError::TypeMismatch(format!("unknown table {}", idx.0)))
    }

    pub(crate) fn elem(&self, idx: ElemIdx) -> Result<&'m Elem, ValidationError> {
        self.module.elems.get(idx.0 as usize).ok_or_else(|| {
            ValidationError::TypeMismatch(format!("unknown element segment {}", idx.0))
        })
    }

    /// Memory-bearing instructions check that a memory exists and that the claimed
    /// alignment stays below the access width.
    pub(crate) fn check_mem(&self, align: u32, width: u32) -> Result<(), ValidationError> {
        self.check_mem_exists()?;
        if align >= width {
            return Err(ValidationError::AlignmentTooLarge);
        }
        Ok(())
    }

    pub(crate) fn check_mem_exists(&self) -> Result<(), ValidationError> {
        if self.module.mems.is_empty() {
            return Err(ValidationError::UnknownMemory(0));
        }
        Ok(())
    }
}
