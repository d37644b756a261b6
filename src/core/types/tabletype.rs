use super::limits::Limits;
use super::reftype::RefType;

/// Table types classify tables over elements of reference type within a size range. Like
/// memories, tables are constrained by limits for their minimum and optionally maximum
/// size. The limits are given in numbers of entries.
///
/// <https://webassembly.github.io/spec/core/syntax/types.html#table-types>
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct TableType {
    pub reftype: RefType,
    pub limits: Limits,
}
