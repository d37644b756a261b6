use crate::core::indices::{FuncIdx, GlobalIdx, MemIdx, TableIdx};
use crate::core::types::{
    functype::FuncType, globaltype::GlobalType, memtype::MemType, reftype::RefType,
    tabletype::TableType, valtype::ValType,
};
use crate::core::Expr;

/// A decoded, index-resolved module as validation consumes it.
///
/// Imported and locally defined entities share one index space per kind, so each entity is
/// either `Local` or `Imported` in place. Signatures are carried pre-resolved; there is no
/// separate type section to chase indices through.
///
/// <https://webassembly.github.io/spec/core/syntax/modules.html>
#[derive(Debug, Default, PartialEq)]
pub struct Module {
    /// The funcs component of a module defines a vector of functions. The parameters of a
    /// function are referenced through 0-based local indices in the function's body; the
    /// locals declare further mutable variables, indexed after the parameters. The body is
    /// an instruction sequence that upon termination must produce a stack matching the
    /// signature's result type.
    ///
    /// <https://webassembly.github.io/spec/core/syntax/modules.html#functions>
    pub funcs: Vec<Func>,

    /// The tables component of a module defines a vector of tables described by their table
    /// type: a vector of opaque values of a particular reference type.
    ///
    /// <https://webassembly.github.io/spec/core/syntax/modules.html#tables>
    pub tables: Vec<TableType>,

    /// The mems component of a module defines a vector of linear memories described by
    /// their memory type.
    ///
    /// <https://webassembly.github.io/spec/core/syntax/modules.html#memories>
    pub mems: Vec<MemType>,

    /// The globals component of a module defines a vector of global variables. Each global
    /// stores a single value of the given global type, and locally defined ones carry an
    /// initializer that must be a constant expression.
    ///
    /// <https://webassembly.github.io/spec/core/syntax/modules.html#globals>
    pub globals: Vec<Global>,

    /// The elems component of a module defines a vector of element segments: a reference
    /// type together with a list of constant initializer expressions and a mode. Active
    /// segments copy their elements into a table at a constant offset during
    /// instantiation; declarative segments merely forward-declare references formed in
    /// code with instructions like `ref.func`.
    ///
    /// <https://webassembly.github.io/spec/core/syntax/modules.html#element-segments>
    pub elems: Vec<Elem>,

    /// The datas component of a module defines a vector of data segments. Active data
    /// segments copy their contents into a memory at a constant offset during
    /// instantiation.
    ///
    /// <https://webassembly.github.io/spec/core/syntax/modules.html#data-segments>
    pub datas: Vec<Data>,

    /// The exports component of a module defines a set of exports that become accessible
    /// to the host environment once the module has been instantiated.
    ///
    /// <https://webassembly.github.io/spec/core/syntax/modules.html#exports>
    pub exports: Vec<Export>,
}

#[derive(Debug, PartialEq)]
pub enum Func {
    Local {
        r#type: FuncType,
        locals: Vec<ValType>,
        body: Expr,
    },
    Imported {
        r#type: FuncType,
    },
}

impl Func {
    pub fn signature(&self) -> &FuncType {
        match self {
            Func::Local { r#type, .. } | Func::Imported { r#type } => r#type,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum Global {
    Local { r#type: GlobalType, init: Expr },
    Imported { r#type: GlobalType },
}

impl Global {
    pub fn global_type(&self) -> &GlobalType {
        match self {
            Global::Local { r#type, .. } | Global::Imported { r#type } => r#type,
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct Elem {
    pub r#type: RefType,
    pub init: Vec<Expr>,
    pub mode: ElemMode,
}

#[derive(Debug, PartialEq)]
pub enum ElemMode {
    Passive,
    Active { table: TableIdx, offset: Expr },
    Declarative,
}

#[derive(Debug, PartialEq)]
pub struct Data {
    pub init: Vec<u8>,
    pub mode: DataMode,
}

#[derive(Debug, PartialEq)]
pub enum DataMode {
    Passive,
    Active { memory: MemIdx, offset: Expr },
}

#[derive(Debug, PartialEq)]
pub struct Export {
    pub name: String,
    pub desc: ExportDesc,
}

#[derive(Debug, PartialEq)]
pub enum ExportDesc {
    Func(FuncIdx),
    Table(TableIdx),
    Mem(MemIdx),
    Global(GlobalIdx),
}
