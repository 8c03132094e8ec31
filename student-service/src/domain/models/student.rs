use welds::prelude::*;

use crate::domain::StudentRecord;

#[derive(Debug, Default, WeldsModel)]
#[welds(table = "student")]
pub struct StudentModel {
    #[welds(primary_key)]
    #[welds(rename = "ID")]
    pub id: i32,
    #[welds(rename = "Name")]
    pub name: String,
    #[welds(rename = "Email")]
    pub email: String,
}

impl From<StudentModel> for StudentRecord {
    fn from(model: StudentModel) -> Self {
        StudentRecord {
            id: model.id,
            name: model.name,
            email: model.email,
        }
    }
}
