//! The constant-expression sub-language.
//!
//! Global initializers, element-segment initializers and active-segment offsets are limited
//! to a small instruction subset that needs no function environment: constants, null and
//! function references, reads of imported globals, integer arithmetic, and a few aggregate
//! constructors. Walking a `ref.func` here is also what declares the function index as
//! referenceable from code, so the checker threads the declared-references set through.
use std::collections::HashSet;

use super::stack::{self, TypeStack};
use super::typ::Typ;
use super::ValidationError;
use crate::core::indices::FuncIdx;
use crate::core::instruction::Instruction;
use crate::core::types::globaltype::GlobalType;
use crate::core::types::heaptype::{AbsHeapType, HeapType};
use crate::core::types::numtype::NumType;
use crate::core::{Data, DataMode, Elem, ElemMode, Global, Module};

const I32: Typ = Typ::Num(NumType::Int32);
const I64: Typ = Typ::Num(NumType::Int64);
const FUNC_REF: Typ = Typ::Ref(HeapType::Abs(AbsHeapType::Func));
const I31_REF: Typ = Typ::Ref(HeapType::Abs(AbsHeapType::I31));
const ARRAY_REF: Typ = Typ::Ref(HeapType::Abs(AbsHeapType::Array));

/// Checks a constant expression and returns the single operand type it produces.
pub(crate) fn check_const_expr(
    module: &Module,
    refs: &mut HashSet<FuncIdx>,
    expr: &[Instruction],
) -> Result<Typ, ValidationError> {
    let mut stack = TypeStack::new();
    for instr in expr {
        stack = check_const_instr(module, refs, stack, instr)?;
    }
    match stack.as_slice() {
        [t] => Ok(*t),
        _ => Err(ValidationError::TypeMismatch(
            "initializer must produce exactly one value".to_owned(),
        )),
    }
}

fn check_const_instr(
    module: &Module,
    refs: &mut HashSet<FuncIdx>,
    stack: TypeStack,
    instr: &Instruction,
) -> Result<TypeStack, ValidationError> {
    match instr {
        Instruction::I32Const(_) => Ok(stack::push(&[I32], &stack)),
        Instruction::I64Const(_) => Ok(stack::push(&[I64], &stack)),
        Instruction::F32Const(_) => Ok(stack::push(&[Typ::Num(NumType::Float32)], &stack)),
        Instruction::F64Const(_) => Ok(stack::push(&[Typ::Num(NumType::Float64)], &stack)),
        Instruction::RefNull(ht) => Ok(stack::push(&[Typ::Ref(*ht)], &stack)),
        Instruction::RefFunc(idx) => {
            refs.insert(*idx);
            Ok(stack::push(&[FUNC_REF], &stack))
        }
        // Initializers may only read imported globals: locally defined globals are not
        // initialized yet while initializers run, which also rules out cycles.
        Instruction::GlobalGet(idx) => match module.globals.get(idx.0 as usize) {
            Some(Global::Imported {
                r#type: GlobalType(_, t),
            }) => Ok(stack::push(&[Typ::from(*t)], &stack)),
            Some(Global::Local { .. }) | None => Err(ValidationError::UnknownGlobal),
        },
        Instruction::I32Add
        | Instruction::I32Sub
        | Instruction::I32Mul
        | Instruction::I32DivS
        | Instruction::I32DivU
        | Instruction::I32RemS
        | Instruction::I32RemU
        | Instruction::I32And
        | Instruction::I32Or
        | Instruction::I32Xor
        | Instruction::I32Shl
        | Instruction::I32ShrS
        | Instruction::I32ShrU
        | Instruction::I32Rotl
        | Instruction::I32Rotr => {
            let stack = stack::pop(&[I32, I32], &stack, "constant i32 operator")?;
            Ok(stack::push(&[I32], &stack))
        }
        Instruction::I64Add
        | Instruction::I64Sub
        | Instruction::I64Mul
        | Instruction::I64DivS
        | Instruction::I64DivU
        | Instruction::I64RemS
        | Instruction::I64RemU
        | Instruction::I64And
        | Instruction::I64Or
        | Instruction::I64Xor
        | Instruction::I64Shl
        | Instruction::I64ShrS
        | Instruction::I64ShrU
        | Instruction::I64Rotl
        | Instruction::I64Rotr => {
            let stack = stack::pop(&[I64, I64], &stack, "constant i64 operator")?;
            Ok(stack::push(&[I64], &stack))
        }
        Instruction::ArrayNew(field) => {
            let stack = stack::pop(&[I32, Typ::from(*field)], &stack, "array.new")?;
            Ok(stack::push(&[ARRAY_REF], &stack))
        }
        Instruction::RefI31 => {
            let stack = stack::pop(&[I32], &stack, "ref.i31")?;
            Ok(stack::push(&[I31_REF], &stack))
        }
        _ => Err(ValidationError::UnsupportedInstruction(
            "non-constant instruction in initializer",
        )),
    }
}

/// A locally defined global's initializer must produce exactly its declared type
/// (nullability already erased on both sides).
pub(crate) fn check_global(
    module: &Module,
    refs: &mut HashSet<FuncIdx>,
    global: &Global,
) -> Result<(), ValidationError> {
    let Global::Local {
        r#type: GlobalType(_, declared),
        init,
    } = global
    else {
        return Ok(());
    };
    let produced = check_const_expr(module, refs, init)?;
    if produced != Typ::from(*declared) {
        return Err(ValidationError::TypeMismatch("global initializer".to_owned()));
    }
    Ok(())
}

pub(crate) fn check_elem(
    module: &Module,
    refs: &mut HashSet<FuncIdx>,
    elem: &Elem,
) -> Result<(), ValidationError> {
    for init in &elem.init {
        let produced = check_const_expr(module, refs, init)?;
        if let Typ::Ref(ht) = produced {
            if ht != elem.r#type.heap_type {
                return Err(ValidationError::TypeMismatch(
                    "element initializer type".to_owned(),
                ));
            }
        }
    }
    if let ElemMode::Active { table, offset } = &elem.mode {
        let table_type = module
            .tables
            .get(table.0 as usize)
            .ok_or_else(|| ValidationError::TypeMismatch(format!("unknown table {}", table.0)))?;
        if table_type.reftype != elem.r#type {
            return Err(ValidationError::TypeMismatch("element segment table".to_owned()));
        }
        check_const_expr(module, refs, offset)?;
    }
    Ok(())
}

pub(crate) fn check_data(
    module: &Module,
    refs: &mut HashSet<FuncIdx>,
    data: &Data,
) -> Result<(), ValidationError> {
    if let DataMode::Active { offset, .. } = &data.mode {
        check_const_expr(module, refs, offset)?;
    }
    Ok(())
}
