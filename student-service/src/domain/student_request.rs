use serde::{Deserialize, Serialize};

use super::NewStudent;

#[derive(Deserialize, Serialize, Debug, Default, Clone)]
pub struct StudentRequestBody {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl From<StudentRequestBody> for NewStudent {
    fn from(body: StudentRequestBody) -> Self {
        NewStudent {
            name: body.name,
            email: body.email,
        }
    }
}
