pub mod context_builder;
pub mod filter;
pub mod prompter;
pub mod scanner;
