pub mod domain;
pub mod patterns;
