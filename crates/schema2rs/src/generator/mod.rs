pub mod assembler;
pub mod ast;
pub mod codegen;
pub mod definitions;
pub mod errors;
pub mod hooks;
pub mod metrics;
pub(crate) mod naming;
pub mod orchestrator;
pub mod property;
pub mod reference;
pub mod request;
pub mod writer;

#[cfg(test)]
mod tests;
