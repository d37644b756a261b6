pub mod indices;
pub mod instruction;
mod module;
pub mod types;

use instruction::Instruction;
pub use module::{Data, DataMode, Elem, ElemMode, Export, ExportDesc, Func, Global, Module};

/// An instruction sequence, as found in function bodies and initializer expressions.
pub type Expr = Vec<Instruction>;
