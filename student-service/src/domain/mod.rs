pub mod access_claims;
pub mod credential_verifier;
pub mod data_stores;
pub mod identity;
pub mod issued_tokens;
pub mod login_request;
pub mod login_response;
pub mod message_response;
pub mod models;
pub mod student;
pub mod student_request;
pub mod update_student_response;

pub use access_claims::*;
pub use credential_verifier::*;
pub use data_stores::*;
pub use identity::*;
pub use issued_tokens::*;
pub use login_request::*;
pub use login_response::*;
pub use message_response::*;
pub use models::*;
pub use student::*;
pub use student_request::*;
pub use update_student_response::*;
