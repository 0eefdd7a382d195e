pub mod issue;
pub mod result;
