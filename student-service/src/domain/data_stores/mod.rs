pub mod student_store;
pub mod student_store_err;

pub use student_store::StudentStore;
pub use student_store_err::StudentStoreError;
