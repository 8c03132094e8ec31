pub mod data_stores;
pub mod hashmap_student_store;
pub mod rate_limiter;
pub mod stub_credential_verifier;
pub mod token_service;

pub use data_stores::*;
pub use hashmap_student_store::*;
pub use rate_limiter::*;
pub use stub_credential_verifier::*;
pub use token_service::*;
