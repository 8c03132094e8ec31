pub mod sql_student_store;

pub use sql_student_store::*;
