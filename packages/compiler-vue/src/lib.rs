//! Vue exporter: a single-file component with the forest in `<template>`
//! and stub script and style sections.

mod compiler;

pub use compiler::{compile_to_vue, CompileOptions};

#[cfg(test)]
mod tests;
