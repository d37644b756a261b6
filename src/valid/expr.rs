//! The instruction and expression checker.
//!
//! A function body is checked by threading an abstract operand stack through each
//! instruction in turn. Blocks, loops and both arms of an `if` recurse through
//! [`check_expr`], which is also the entry point for whole function bodies: a body is a
//! block whose signature is `(∅, results)`.
use std::collections::HashSet;

use super::env::Env;
use super::stack::{self, TypeStack};
use super::typ::{match_ref_type, match_types, Typ};
use super::ValidationError;
use crate::core::indices::FuncIdx;
use crate::core::instruction::{Instruction, Memarg};
use crate::core::types::functype::FuncType;
use crate::core::types::globaltype::GlobalType;
use crate::core::types::heaptype::{AbsHeapType, HeapType};
use crate::core::types::numtype::NumType;
use crate::core::types::valtype::ValType;
use crate::core::{Func, Module};

const I32: Typ = Typ::Num(NumType::Int32);
const I64: Typ = Typ::Num(NumType::Int64);
const F32: Typ = Typ::Num(NumType::Float32);
const F64: Typ = Typ::Num(NumType::Float64);
const FUNC_REF: Typ = Typ::Ref(HeapType::Abs(AbsHeapType::Func));
const I31_REF: Typ = Typ::Ref(HeapType::Abs(AbsHeapType::I31));

/// Checks one locally defined function; imported functions carry no body to check.
pub(crate) fn check_func(
    module: &Module,
    refs: &HashSet<FuncIdx>,
    func: &Func,
) -> Result<(), ValidationError> {
    let Func::Local {
        r#type,
        locals,
        body,
    } = func
    else {
        return Ok(());
    };
    let mut env = Env::new(module, r#type, locals, refs);
    let stack = check_expr(&mut env, body, false, &[], &r#type.results, &[])?;
    if !stack::stack_equal(&stack::rev_typs(&r#type.results), &stack) {
        return Err(ValidationError::TypeMismatch("function result".to_owned()));
    }
    Ok(())
}

/// Checks a block body against its signature and applies the block to the surrounding
/// stack.
///
/// The body starts from a fresh stack holding only the block parameters and must end in the
/// declared results. A branch out of the block must produce the block's jump type: the
/// parameters for a loop (branches restart it), the results for everything else. Finally
/// the block as a whole consumes its parameters from `prev_stack` and produces its results
/// on the remainder.
pub(crate) fn check_expr(
    env: &mut Env,
    expr: &[Instruction],
    is_loop: bool,
    params: &[ValType],
    results: &[ValType],
    prev_stack: &[Typ],
) -> Result<TypeStack, ValidationError> {
    let pt = stack::rev_typs(params);
    let rt = stack::rev_typs(results);

    let jump_type = if is_loop { pt.clone() } else { rt.clone() };
    env.blocks.push(jump_type);

    let mut stack = pt.clone();
    for instr in expr {
        stack = check_instr(env, stack, instr)?;
    }

    env.blocks.pop();

    if !stack::stack_equal(&stack, &rt) {
        return Err(ValidationError::TypeMismatch(format!(
            "block produced {stack:?}, expected {rt:?}"
        )));
    }
    let Some(tail) = stack::match_prefix(&pt, prev_stack) else {
        return Err(ValidationError::TypeMismatch(format!(
            "block expects {pt:?} on a stack shaped {prev_stack:?}"
        )));
    };
    Ok(stack::push(&rt, &tail))
}

fn check_instr(
    env: &mut Env,
    stack: TypeStack,
    instr: &Instruction,
) -> Result<TypeStack, ValidationError> {
    match instr {
        // --- Control instructions ---
        Instruction::Unreachable => Ok(vec![Typ::Any]),
        Instruction::Nop => Ok(stack),
        Instruction::Block(bt, body) => {
            let (params, results) = bt.signature();
            check_expr(env, body, false, params, results, &stack)
        }
        Instruction::Loop(bt, body) => {
            let (params, results) = bt.signature();
            check_expr(env, body, true, params, results, &stack)
        }
        Instruction::If(bt, then_body, else_body) => {
            let stack = stack::pop(&[I32], &stack, "if")?;
            let (params, results) = bt.signature();
            let then_stack = check_expr(env, then_body, false, params, results, &stack)?;
            let else_stack = match else_body {
                Some(body) => check_expr(env, body, false, params, results, &stack)?,
                None => check_expr(env, &[], false, params, results, &stack)?,
            };
            if !stack::stack_equal(&then_stack, &else_stack) {
                return Err(ValidationError::TypeMismatch("if arms".to_owned()));
            }
            Ok(then_stack)
        }
        Instruction::Br(label) => {
            let jt = env.jump_type(*label)?;
            stack::pop(&jt, &stack, "br")?;
            Ok(vec![Typ::Any])
        }
        Instruction::BrIf(label) => {
            let stack = stack::pop(&[I32], &stack, "br_if")?;
            let jt = env.jump_type(*label)?;
            let stack = stack::pop(&jt, &stack, "br_if")?;
            Ok(stack::push(&jt, &stack))
        }
        Instruction::BrTable(labels, default) => {
            let stack = stack::pop(&[I32], &stack, "br_table")?;
            let default_jt = env.jump_type(*default)?;
            let stack = stack::pop(&default_jt, &stack, "br_table")?;
            for label in labels {
                let jt = env.jump_type(*label)?;
                if jt.len() != default_jt.len() {
                    return Err(ValidationError::TypeMismatch("br_table".to_owned()));
                }
                stack::pop(&jt, &stack, "br_table")?;
            }
            Ok(vec![Typ::Any])
        }
        Instruction::Return => {
            stack::pop(&stack::rev_typs(env.result_type), &stack, "return")?;
            Ok(vec![Typ::Any])
        }
        Instruction::Call(idx) => {
            let ty = env.func_type(*idx)?;
            stack::pop_push(ty, &stack, "call")
        }
        Instruction::CallIndirect(_, ty) => {
            let stack = stack::pop(&[I32], &stack, "call_indirect")?;
            stack::pop_push(ty, &stack, "call_indirect")
        }
        // TODO: pop the declared signature's parameters and push its results once
        // call_ref immediates resolve to full signatures.
        Instruction::CallRef(_) => stack::pop_ref(&stack),
        Instruction::ReturnCall(idx) => {
            let ty = env.func_type(*idx)?;
            check_tail_results(env, ty, "return_call")?;
            stack::pop(&stack::rev_typs(&ty.parameters), &stack, "return_call")?;
            Ok(vec![Typ::Any])
        }
        Instruction::ReturnCallIndirect(_, ty) => {
            check_tail_results(env, ty, "return_call_indirect")?;
            let stack = stack::pop(&[I32], &stack, "return_call_indirect")?;
            stack::pop(
                &stack::rev_typs(&ty.parameters),
                &stack,
                "return_call_indirect",
            )?;
            Ok(vec![Typ::Any])
        }
        Instruction::ReturnCallRef(ty) => {
            check_tail_results(env, ty, "return_call_ref")?;
            let stack = stack::pop_ref(&stack)?;
            stack::pop(&stack::rev_typs(&ty.parameters), &stack, "return_call_ref")?;
            Ok(vec![Typ::Any])
        }

        // --- Reference instructions ---
        Instruction::RefNull(ht) => Ok(stack::push(&[Typ::Ref(*ht)], &stack)),
        Instruction::RefIsNull => {
            let stack = stack::pop_ref(&stack)?;
            Ok(stack::push(&[I32], &stack))
        }
        Instruction::RefFunc(idx) => {
            if !env.refs.contains(idx) {
                return Err(ValidationError::UndeclaredFunctionReference);
            }
            Ok(stack::push(&[FUNC_REF], &stack))
        }
        Instruction::RefI31 => {
            let stack = stack::pop(&[I32], &stack, "ref.i31")?;
            Ok(stack::push(&[I31_REF], &stack))
        }
        Instruction::I31GetS | Instruction::I31GetU => {
            let stack = stack::pop(&[I31_REF], &stack, "i31.get")?;
            Ok(stack::push(&[I32], &stack))
        }
        Instruction::ArrayLen => {
            let stack = stack::pop(&[Typ::Something], &stack, "array.len")?;
            Ok(stack::push(&[I32], &stack))
        }
        Instruction::RefEq => Err(ValidationError::UnsupportedInstruction("ref.eq")),
        Instruction::RefAsNonNull => {
            Err(ValidationError::UnsupportedInstruction("ref.as_non_null"))
        }
        Instruction::RefTest(_) => Err(ValidationError::UnsupportedInstruction("ref.test")),
        Instruction::RefCast(_) => Err(ValidationError::UnsupportedInstruction("ref.cast")),
        Instruction::BrOnNull(_) => Err(ValidationError::UnsupportedInstruction("br_on_null")),
        Instruction::BrOnNonNull(_) => {
            Err(ValidationError::UnsupportedInstruction("br_on_non_null"))
        }
        Instruction::BrOnCast(..) => Err(ValidationError::UnsupportedInstruction("br_on_cast")),
        Instruction::BrOnCastFail(..) => {
            Err(ValidationError::UnsupportedInstruction("br_on_cast_fail"))
        }
        Instruction::ArrayNew(_) => Err(ValidationError::UnsupportedInstruction("array.new")),
        Instruction::ArrayNewDefault(_) => {
            Err(ValidationError::UnsupportedInstruction("array.new_default"))
        }
        Instruction::ArrayGet(_) => Err(ValidationError::UnsupportedInstruction("array.get")),
        Instruction::ArrayGetS(_) => Err(ValidationError::UnsupportedInstruction("array.get_s")),
        Instruction::ArrayGetU(_) => Err(ValidationError::UnsupportedInstruction("array.get_u")),
        Instruction::ArraySet(_) => Err(ValidationError::UnsupportedInstruction("array.set")),
        Instruction::StructNew(_) => Err(ValidationError::UnsupportedInstruction("struct.new")),
        Instruction::StructNewDefault(_) => {
            Err(ValidationError::UnsupportedInstruction("struct.new_default"))
        }
        Instruction::StructGet(..) => Err(ValidationError::UnsupportedInstruction("struct.get")),
        Instruction::StructGetS(..) => {
            Err(ValidationError::UnsupportedInstruction("struct.get_s"))
        }
        Instruction::StructGetU(..) => {
            Err(ValidationError::UnsupportedInstruction("struct.get_u"))
        }
        Instruction::StructSet(..) => Err(ValidationError::UnsupportedInstruction("struct.set")),
        Instruction::AnyConvertExtern => {
            Err(ValidationError::UnsupportedInstruction("any.convert_extern"))
        }
        Instruction::ExternConvertAny => {
            Err(ValidationError::UnsupportedInstruction("extern.convert_any"))
        }

        // --- Parametric instructions ---
        Instruction::Drop => stack::drop_top(&stack),
        Instruction::Select(Some(types)) => {
            let types = stack::rev_typs(types);
            let stack = stack::pop(&[I32], &stack, "select")?;
            let stack = stack::pop(&types, &stack, "select")?;
            let stack = stack::pop(&types, &stack, "select")?;
            Ok(stack::push(&types, &stack))
        }
        Instruction::Select(None) => {
            let stack = stack::pop(&[I32], &stack, "select")?;
            match stack.as_slice() {
                [Typ::Any, ..] => Ok(vec![Typ::Something, Typ::Any]),
                [Typ::Ref(_), ..] => {
                    Err(ValidationError::TypeMismatch("select implicit".to_owned()))
                }
                [x, Typ::Any, ..] => Ok(vec![*x, Typ::Any]),
                [x, y, tail @ ..] => {
                    if match_types(*x, *y) {
                        Ok(stack::push(&[*x], tail))
                    } else {
                        Err(ValidationError::TypeMismatch("select".to_owned()))
                    }
                }
                _ => Err(ValidationError::TypeMismatch("select".to_owned())),
            }
        }

        // --- Variable instructions ---
        Instruction::LocalGet(idx) => {
            let t = env.local(*idx)?;
            Ok(stack::push(&[t], &stack))
        }
        Instruction::LocalSet(idx) => {
            let t = env.local(*idx)?;
            stack::pop(&[t], &stack, "local.set")
        }
        Instruction::LocalTee(idx) => {
            let t = env.local(*idx)?;
            let stack = stack::pop(&[t], &stack, "local.tee")?;
            Ok(stack::push(&[t], &stack))
        }
        Instruction::GlobalGet(idx) => {
            let GlobalType(_, t) = *env.global_type(*idx)?;
            Ok(stack::push(&[Typ::from(t)], &stack))
        }
        // Mutability of the target global is checked elsewhere, not by typing.
        Instruction::GlobalSet(idx) => {
            let GlobalType(_, t) = *env.global_type(*idx)?;
            stack::pop(&[Typ::from(t)], &stack, "global.set")
        }

        // --- Table instructions ---
        Instruction::TableGet(idx) => {
            let ht = env.table_type(*idx)?.reftype.heap_type;
            let stack = stack::pop(&[I32], &stack, "table.get")?;
            Ok(stack::push(&[Typ::Ref(ht)], &stack))
        }
        Instruction::TableSet(idx) => {
            let ht = env.table_type(*idx)?.reftype.heap_type;
            stack::pop(&[Typ::Ref(ht), I32], &stack, "table.set")
        }
        Instruction::TableInit(table_idx, elem_idx) => {
            let table = env.table_type(*table_idx)?;
            let elem = env.elem(*elem_idx)?;
            if !match_ref_type(table.reftype.heap_type, elem.r#type.heap_type) {
                return Err(ValidationError::TypeMismatch("table_init".to_owned()));
            }
            stack::pop(&[I32, I32, I32], &stack, "table_init")
        }
        Instruction::ElemDrop(idx) => {
            env.elem(*idx)?;
            Ok(stack)
        }
        Instruction::TableCopy(dst_idx, src_idx) => {
            let dst = env.table_type(*dst_idx)?;
            let src = env.table_type(*src_idx)?;
            if dst.reftype != src.reftype {
                return Err(ValidationError::TypeMismatch("table_copy".to_owned()));
            }
            stack::pop(&[I32, I32, I32], &stack, "table_copy")
        }
        Instruction::TableGrow(idx) => {
            let ht = env.table_type(*idx)?.reftype.heap_type;
            let stack = stack::pop(&[I32, Typ::Ref(ht)], &stack, "table.grow")?;
            Ok(stack::push(&[I32], &stack))
        }
        Instruction::TableSize(_) => Ok(stack::push(&[I32], &stack)),
        Instruction::TableFill(idx) => {
            let ht = env.table_type(*idx)?.reftype.heap_type;
            stack::pop(&[I32, Typ::Ref(ht), I32], &stack, "table.fill")
        }

        // --- Memory instructions ---
        Instruction::I32Load(m) => load(env, &stack, m, 4, I32, "i32.load"),
        Instruction::I64Load(m) => load(env, &stack, m, 8, I64, "i64.load"),
        Instruction::F32Load(m) => load(env, &stack, m, 4, F32, "f32.load"),
        Instruction::F64Load(m) => load(env, &stack, m, 8, F64, "f64.load"),
        Instruction::I32Load8s(m) | Instruction::I32Load8u(m) => {
            load(env, &stack, m, 1, I32, "i32.load8")
        }
        Instruction::I32Load16s(m) | Instruction::I32Load16u(m) => {
            load(env, &stack, m, 2, I32, "i32.load16")
        }
        Instruction::I64Load8s(m) | Instruction::I64Load8u(m) => {
            load(env, &stack, m, 1, I64, "i64.load8")
        }
        Instruction::I64Load16s(m) | Instruction::I64Load16u(m) => {
            load(env, &stack, m, 2, I64, "i64.load16")
        }
        Instruction::I64Load32s(m) | Instruction::I64Load32u(m) => {
            load(env, &stack, m, 4, I64, "i64.load32")
        }
        Instruction::I32Store(m) => store(env, &stack, m, 4, I32, "i32.store"),
        Instruction::I64Store(m) => store(env, &stack, m, 8, I64, "i64.store"),
        Instruction::F32Store(m) => store(env, &stack, m, 4, F32, "f32.store"),
        Instruction::F64Store(m) => store(env, &stack, m, 8, F64, "f64.store"),
        Instruction::I32Store8(m) => store(env, &stack, m, 1, I32, "i32.store8"),
        Instruction::I32Store16(m) => store(env, &stack, m, 2, I32, "i32.store16"),
        Instruction::I64Store8(m) => store(env, &stack, m, 1, I64, "i64.store8"),
        Instruction::I64Store16(m) => store(env, &stack, m, 2, I64, "i64.store16"),
        Instruction::I64Store32(m) => store(env, &stack, m, 4, I64, "i64.store32"),
        Instruction::MemorySize => {
            env.check_mem_exists()?;
            Ok(stack::push(&[I32], &stack))
        }
        Instruction::MemoryGrow => {
            env.check_mem_exists()?;
            let stack = stack::pop(&[I32], &stack, "memory.grow")?;
            Ok(stack::push(&[I32], &stack))
        }
        Instruction::MemoryInit(_) => {
            env.check_mem_exists()?;
            stack::pop(&[I32, I32, I32], &stack, "memory.init")
        }
        Instruction::DataDrop(_) => Ok(stack),
        Instruction::MemoryCopy => {
            env.check_mem_exists()?;
            stack::pop(&[I32, I32, I32], &stack, "memory.copy")
        }
        Instruction::MemoryFill => {
            env.check_mem_exists()?;
            stack::pop(&[I32, I32, I32], &stack, "memory.fill")
        }

        // --- Numeric instructions ---
        Instruction::I32Const(_) => Ok(stack::push(&[I32], &stack)),
        Instruction::I64Const(_) => Ok(stack::push(&[I64], &stack)),
        Instruction::F32Const(_) => Ok(stack::push(&[F32], &stack)),
        Instruction::F64Const(_) => Ok(stack::push(&[F64], &stack)),

        Instruction::I32Eqz => testop(I32, &stack, "i32.eqz"),
        Instruction::I64Eqz => testop(I64, &stack, "i64.eqz"),

        Instruction::I32Eq
        | Instruction::I32Ne
        | Instruction::I32LtS
        | Instruction::I32LtU
        | Instruction::I32GtS
        | Instruction::I32GtU
        | Instruction::I32LeS
        | Instruction::I32LeU
        | Instruction::I32GeS
        | Instruction::I32GeU => relop(I32, &stack, "i32 comparison"),
        Instruction::I64Eq
        | Instruction::I64Ne
        | Instruction::I64LtS
        | Instruction::I64LtU
        | Instruction::I64GtS
        | Instruction::I64GtU
        | Instruction::I64LeS
        | Instruction::I64LeU
        | Instruction::I64GeS
        | Instruction::I64GeU => relop(I64, &stack, "i64 comparison"),
        Instruction::F32Eq
        | Instruction::F32Ne
        | Instruction::F32Lt
        | Instruction::F32Gt
        | Instruction::F32Le
        | Instruction::F32Ge => relop(F32, &stack, "f32 comparison"),
        Instruction::F64Eq
        | Instruction::F64Ne
        | Instruction::F64Lt
        | Instruction::F64Gt
        | Instruction::F64Le
        | Instruction::F64Ge => relop(F64, &stack, "f64 comparison"),

        Instruction::I32Clz | Instruction::I32Ctz | Instruction::I32Popcnt => {
            unop(I32, &stack, "i32 unary operator")
        }
        Instruction::I64Clz | Instruction::I64Ctz | Instruction::I64Popcnt => {
            unop(I64, &stack, "i64 unary operator")
        }
        Instruction::F32Abs
        | Instruction::F32Neg
        | Instruction::F32Ceil
        | Instruction::F32Floor
        | Instruction::F32Trunc
        | Instruction::F32Nearest
        | Instruction::F32Sqrt => unop(F32, &stack, "f32 unary operator"),
        Instruction::F64Abs
        | Instruction::F64Neg
        | Instruction::F64Ceil
        | Instruction::F64Floor
        | Instruction::F64Trunc
        | Instruction::F64Nearest
        | Instruction::F64Sqrt => unop(F64, &stack, "f64 unary operator"),

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
        | Instruction::I32Rotr => binop(I32, &stack, "i32 binary operator"),
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
        | Instruction::I64Rotr => binop(I64, &stack, "i64 binary operator"),
        Instruction::F32Add
        | Instruction::F32Sub
        | Instruction::F32Mul
        | Instruction::F32Div
        | Instruction::F32Min
        | Instruction::F32Max
        | Instruction::F32Copysign => binop(F32, &stack, "f32 binary operator"),
        Instruction::F64Add
        | Instruction::F64Sub
        | Instruction::F64Mul
        | Instruction::F64Div
        | Instruction::F64Min
        | Instruction::F64Max
        | Instruction::F64Copysign => binop(F64, &stack, "f64 binary operator"),

        Instruction::I32WrapI64 => cvtop(I64, I32, &stack, "i32.wrap_i64"),
        Instruction::I32TruncF32S
        | Instruction::I32TruncF32U
        | Instruction::I32TruncSatF32S
        | Instruction::I32TruncSatF32U
        | Instruction::I32ReinterpretF32 => cvtop(F32, I32, &stack, "i32 from f32"),
        Instruction::I32TruncF64S
        | Instruction::I32TruncF64U
        | Instruction::I32TruncSatF64S
        | Instruction::I32TruncSatF64U => cvtop(F64, I32, &stack, "i32 from f64"),
        Instruction::I64ExtendI32S | Instruction::I64ExtendI32U => {
            cvtop(I32, I64, &stack, "i64 from i32")
        }
        Instruction::I64TruncF32S
        | Instruction::I64TruncF32U
        | Instruction::I64TruncSatF32S
        | Instruction::I64TruncSatF32U => cvtop(F32, I64, &stack, "i64 from f32"),
        Instruction::I64TruncF64S
        | Instruction::I64TruncF64U
        | Instruction::I64TruncSatF64S
        | Instruction::I64TruncSatF64U
        | Instruction::I64ReinterpretF64 => cvtop(F64, I64, &stack, "i64 from f64"),
        Instruction::F32ConvertI32S
        | Instruction::F32ConvertI32U
        | Instruction::F32ReinterpretI32 => cvtop(I32, F32, &stack, "f32 from i32"),
        Instruction::F32ConvertI64S | Instruction::F32ConvertI64U => {
            cvtop(I64, F32, &stack, "f32 from i64")
        }
        Instruction::F32DemoteF64 => cvtop(F64, F32, &stack, "f32.demote_f64"),
        Instruction::F64ConvertI32S | Instruction::F64ConvertI32U => {
            cvtop(I32, F64, &stack, "f64 from i32")
        }
        Instruction::F64ConvertI64S
        | Instruction::F64ConvertI64U
        | Instruction::F64ReinterpretI64 => cvtop(I64, F64, &stack, "f64 from i64"),
        Instruction::F64PromoteF32 => cvtop(F32, F64, &stack, "f64.promote_f32"),
        Instruction::I32Extend8S | Instruction::I32Extend16S => {
            unop(I32, &stack, "i32 sign extension")
        }
        Instruction::I64Extend8S | Instruction::I64Extend16S | Instruction::I64Extend32S => {
            unop(I64, &stack, "i64 sign extension")
        }
    }
}

/// A tail call stands for the caller's return, so the callee must produce exactly the
/// caller's results.
fn check_tail_results(
    env: &Env,
    callee: &FuncType,
    context: &str,
) -> Result<(), ValidationError> {
    let callee_results = stack::rev_typs(&callee.results);
    let caller_results = stack::rev_typs(env.result_type);
    if !stack::stack_equal(&callee_results, &caller_results) {
        return Err(ValidationError::TypeMismatch(context.to_owned()));
    }
    Ok(())
}

fn unop(t: Typ, stack: &[Typ], context: &str) -> Result<TypeStack, ValidationError> {
    let stack = stack::pop(&[t], stack, context)?;
    Ok(stack::push(&[t], &stack))
}

fn binop(t: Typ, stack: &[Typ], context: &str) -> Result<TypeStack, ValidationError> {
    let stack = stack::pop(&[t, t], stack, context)?;
    Ok(stack::push(&[t], &stack))
}

fn testop(t: Typ, stack: &[Typ], context: &str) -> Result<TypeStack, ValidationError> {
    let stack = stack::pop(&[t], stack, context)?;
    Ok(stack::push(&[I32], &stack))
}

fn relop(t: Typ, stack: &[Typ], context: &str) -> Result<TypeStack, ValidationError> {
    let stack = stack::pop(&[t, t], stack, context)?;
    Ok(stack::push(&[I32], &stack))
}

fn cvtop(from: Typ, to: Typ, stack: &[Typ], context: &str) -> Result<TypeStack, ValidationError> {
    let stack = stack::pop(&[from], stack, context)?;
    Ok(stack::push(&[to], &stack))
}

fn load(
    env: &Env,
    stack: &[Typ],
    memarg: &Memarg,
    width: u32,
    t: Typ,
    context: &str,
) -> Result<TypeStack, ValidationError> {
    env.check_mem(memarg.align, width)?;
    let stack = stack::pop(&[I32], stack, context)?;
    Ok(stack::push(&[t], &stack))
}

fn store(
    env: &Env,
    stack: &[Typ],
    memarg: &Memarg,
    width: u32,
    t: Typ,
    context: &str,
) -> Result<TypeStack, ValidationError> {
    env.check_mem(memarg.align, width)?;
    stack::pop(&[t, I32], stack, context)
}
