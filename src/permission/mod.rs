// Permission Module
// Time-locked per-operation permission table and the role gate that
// evaluates callers against it.

mod gate;
mod table;

pub use gate::*;
pub use table::*;
