use super::heaptype::{AbsHeapType, HeapType};

/// Reference types classify first-class references to objects in the runtime store. A
/// reference type is characterised by the heap type it points to, plus a nullability flag
/// stating whether the null reference inhabits it.
///
/// Reference types are opaque, meaning that neither their size nor their bit pattern can be
/// observed. Values of reference type can be stored in tables.
///
/// <https://webassembly.github.io/spec/core/syntax/types.html#reference-types>
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct RefType {
    pub nullable: bool,
    pub heap_type: HeapType,
}

impl RefType {
    /// The classic funcref shorthand, `(ref null func)`.
    pub const FUNC_REF: RefType = RefType {
        nullable: true,
        heap_type: HeapType::Abs(AbsHeapType::Func),
    };

    /// The classic externref shorthand, `(ref null extern)`.
    pub const EXTERN_REF: RefType = RefType {
        nullable: true,
        heap_type: HeapType::Abs(AbsHeapType::Extern),
    };
}
