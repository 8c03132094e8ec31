pub(crate) mod create_student;
pub(crate) mod delete_student;
pub(crate) mod list_students;
pub(crate) mod login;
pub(crate) mod update_student;

pub use create_student::*;
pub use delete_student::*;
pub use list_students::*;
pub use login::*;
pub use update_student::*;
