pub mod expand;
pub mod parser;
pub mod range;
