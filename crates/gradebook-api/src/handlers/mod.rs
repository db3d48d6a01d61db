pub mod export;
pub mod students;
