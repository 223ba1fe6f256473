//! React exporter: one default-exported function component whose fragment
//! holds the whole forest, with inline style objects.

mod compiler;
mod context;

pub use compiler::compile_to_react;
pub use context::{CompileOptions, CompilerContext, DEFAULT_COMPONENT_NAME};
