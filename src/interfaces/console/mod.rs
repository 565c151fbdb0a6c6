//! Line-oriented console input and output.

pub mod prompt_reader;
