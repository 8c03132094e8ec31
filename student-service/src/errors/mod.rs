mod auth;
mod login;
mod rate_limit;
mod student;

pub use auth::*;
pub use login::*;
pub use rate_limit::*;
pub use student::*;
