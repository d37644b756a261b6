//! Operand-stack algebra.
//!
//! Stacks are ordered top-first: index 0 is the top of the stack. Module-declared parameter
//! and result lists are written bottom-first, so they are reversed before they ever meet a
//! stack; [`rev_typs`] is that bridge.
//!
//! The bottom element [`Typ::Any`] may stand for any number of operands, so matching against
//! a stack that contains it is a search: at every bottom element both readings (consume it,
//! or leave it to produce further operands) are explored, and an operation succeeds if any
//! choice does.
use super::typ::{match_types, Typ};
use super::ValidationError;
use crate::core::types::functype::FuncType;
use crate::core::types::valtype::ValType;

pub(crate) type TypeStack = Vec<Typ>;

/// Reverses a declared (bottom-first) value-type list into top-first operand types.
pub(crate) fn rev_typs(types: &[ValType]) -> Vec<Typ> {
    types.iter().rev().copied().map(Typ::from).collect()
}

/// Prepends `types` onto `stack`; `types[0]` becomes the new top.
pub(crate) fn push(types: &[Typ], stack: &[Typ]) -> TypeStack {
    let mut out = Vec::with_capacity(types.len() + stack.len());
    out.extend_from_slice(types);
    out.extend_from_slice(stack);
    out
}

/// Removes the top operand. The bottom element swallows the stack beneath it, so dropping
/// on it leaves a lone bottom.
pub(crate) fn drop_top(stack: &[Typ]) -> Result<TypeStack, ValidationError> {
    match stack.first() {
        None => Err(ValidationError::TypeMismatch("drop".to_owned())),
        Some(Typ::Any) => Ok(vec![Typ::Any]),
        Some(_) => Ok(stack[1..].to_vec()),
    }
}

/// Removes a reference from the top. The bottom element stays in place, since it can keep
/// producing operands.
pub(crate) fn pop_ref(stack: &[Typ]) -> Result<TypeStack, ValidationError> {
    match stack.first() {
        Some(Typ::Ref(_) | Typ::Something) => Ok(stack[1..].to_vec()),
        Some(Typ::Any) => Ok(stack.to_vec()),
        _ => Err(ValidationError::TypeMismatch("expected a reference".to_owned())),
    }
}

/// Consumes `prefix` (top-first) from the head of `stack` and returns the remaining tail,
/// or `None` if no reading of the bottom element makes them agree.
pub(crate) fn match_prefix(prefix: &[Typ], stack: &[Typ]) -> Option<TypeStack> {
    let Some((&required, rest)) = prefix.split_first() else {
        return Some(stack.to_vec());
    };
    match stack.split_first() {
        None => None,
        Some((Typ::Any, _)) => {
            match_prefix(rest, stack).or_else(|| match_prefix(rest, &stack[1..]))
        }
        Some((&got, tail)) => {
            if match_types(required, got) {
                match_prefix(rest, tail)
            } else {
                None
            }
        }
    }
}

/// [`match_prefix`] surfaced as a result, with the failing instruction as context.
pub(crate) fn pop(
    required: &[Typ],
    stack: &[Typ],
    context: &str,
) -> Result<TypeStack, ValidationError> {
    match_prefix(required, stack).ok_or_else(|| ValidationError::TypeMismatch(context.to_owned()))
}

/// Applies a signature to the stack: consume the parameters, produce the results.
pub(crate) fn pop_push(
    ty: &FuncType,
    stack: &[Typ],
    context: &str,
) -> Result<TypeStack, ValidationError> {
    let stack = pop(&rev_typs(&ty.parameters), stack, context)?;
    Ok(push(&rev_typs(&ty.results), &stack))
}

/// Equality of two stacks modulo the bottom element, which may stand for any number of
/// operands on either side. An empty stack equals exactly the stacks made of bottoms.
pub(crate) fn stack_equal(a: &[Typ], b: &[Typ]) -> bool {
    match (a.first(), b.first()) {
        (None, None) => true,
        (None, Some(_)) => b.iter().all(|t| *t == Typ::Any),
        (Some(_), None) => a.iter().all(|t| *t == Typ::Any),
        (Some(Typ::Any), Some(_)) => stack_equal(&a[1..], b) || stack_equal(a, &b[1..]),
        (Some(_), Some(Typ::Any)) => stack_equal(a, &b[1..]) || stack_equal(&a[1..], b),
        (Some(&x), Some(&y)) => match_types(x, y) && stack_equal(&a[1..], &b[1..]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::heaptype::{AbsHeapType, HeapType};
    use crate::core::types::numtype::NumType;

    const I32: Typ = Typ::Num(NumType::Int32);
    const I64: Typ = Typ::Num(NumType::Int64);
    const F64: Typ = Typ::Num(NumType::Float64);
    const FUNC: Typ = Typ::Ref(HeapType::Abs(AbsHeapType::Func));

    #[test]
    fn empty_stack_equals_exactly_the_all_bottom_stacks() {
        assert!(stack_equal(&[], &[]));
        assert!(stack_equal(&[], &[Typ::Any]));
        assert!(stack_equal(&[Typ::Any, Typ::Any], &[]));
        assert!(!stack_equal(&[], &[I32]));
        assert!(!stack_equal(&[], &[Typ::Any, I32]));
    }

    #[test]
    fn stack_equality_is_reflexive() {
        for s in [
            vec![],
            vec![I32],
            vec![I32, I64, F64],
            vec![Typ::Any],
            vec![I32, Typ::Any],
            vec![Typ::Something, FUNC],
            vec![Typ::Any, I32, Typ::Any],
        ] {
            assert!(stack_equal(&s, &s), "{s:?} should equal itself");
        }
    }

    #[test]
    fn bottom_splits_to_cover_either_side() {
        assert!(stack_equal(&[Typ::Any], &[I32, I64, F64]));
        assert!(stack_equal(&[I32, Typ::Any], &[I32, I64, F64]));
        assert!(stack_equal(&[I32, I64, F64], &[Typ::Any]));
        assert!(!stack_equal(&[I64, Typ::Any], &[I32, I64, F64]));
    }

    #[test]
    fn pop_undoes_push_for_concrete_prefixes() {
        let stack = vec![F64, FUNC];
        let prefix = [I32, I64];
        let pushed = push(&prefix, &stack);
        assert_eq!(pushed, vec![I32, I64, F64, FUNC]);
        assert_eq!(pop(&prefix, &pushed, "test").unwrap(), stack);
    }

    #[test]
    fn drop_undoes_push_of_one_concrete_operand() {
        let stack = vec![I64];
        assert_eq!(drop_top(&push(&[I32], &stack)).unwrap(), stack);
    }

    #[test]
    fn drop_on_bottom_leaves_a_lone_bottom() {
        assert_eq!(drop_top(&[Typ::Any]).unwrap(), vec![Typ::Any]);
        assert_eq!(drop_top(&[Typ::Any, I32]).unwrap(), vec![Typ::Any]);
        assert!(matches!(
            drop_top(&[]),
            Err(ValidationError::TypeMismatch(_))
        ));
    }

    #[test]
    fn pop_ref_accepts_references_top_and_bottom() {
        assert_eq!(pop_ref(&[FUNC, I32]).unwrap(), vec![I32]);
        assert_eq!(pop_ref(&[Typ::Something]).unwrap(), vec![]);
        // the bottom is not consumed
        assert_eq!(pop_ref(&[Typ::Any]).unwrap(), vec![Typ::Any]);
        assert!(pop_ref(&[I32]).is_err());
        assert!(pop_ref(&[]).is_err());
    }

    #[test]
    fn match_prefix_explores_both_readings_of_bottom() {
        // the bottom absorbs the whole prefix and remains
        assert_eq!(
            match_prefix(&[I32, I64], &[Typ::Any]).unwrap(),
            vec![Typ::Any]
        );
        // or is consumed against a prefix element
        assert_eq!(match_prefix(&[I32], &[Typ::Any, I64]).unwrap(), vec![I64]);
        // concrete mismatch stays a mismatch
        assert!(match_prefix(&[I32], &[I64]).is_none());
        // underflow without a bottom is a mismatch
        assert!(match_prefix(&[I32], &[]).is_none());
    }

    #[test]
    fn pop_push_applies_a_signature() {
        use crate::core::types::valtype::ValType;
        let ty = FuncType {
            parameters: vec![ValType::Num(NumType::Int32), ValType::Num(NumType::Int64)],
            results: vec![ValType::Num(NumType::Float64)],
        };
        // parameters are consumed last-first, so i64 must be on top
        let stack = [I64, I32, FUNC];
        assert_eq!(pop_push(&ty, &stack, "test").unwrap(), vec![F64, FUNC]);
        assert!(pop_push(&ty, &[I32, I64, FUNC], "test").is_err());
    }
}
