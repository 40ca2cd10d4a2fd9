pub mod prompt;
pub mod tools;
