//! Teacher entity model and DTOs.

use campus_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// A teacher row from the `teachers` table.
///
/// Also the body of `PATCH /api/teacher`.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    pub id: DbId,
    #[validate(custom(function = "campus_core::validation::validate_not_blank"))]
    #[schema(example = "Alice")]
    pub name: String,
    #[schema(example = 30)]
    pub age: i32,
    #[validate(email)]
    #[schema(example = "a@x.com")]
    pub email: String,
    #[validate(custom(function = "campus_core::validation::validate_not_blank"))]
    #[schema(example = "555-0100")]
    pub phone_number: String,
}

/// DTO for creating a new teacher. Every field is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeacher {
    #[validate(custom(function = "campus_core::validation::validate_not_blank"))]
    #[schema(example = "Alice")]
    pub name: String,
    #[schema(example = 30)]
    pub age: i32,
    #[validate(email)]
    #[schema(example = "a@x.com")]
    pub email: String,
    #[validate(custom(function = "campus_core::validation::validate_not_blank"))]
    #[schema(example = "555-0100")]
    pub phone_number: String,
}

impl CreateTeacher {
    /// Build the full entity once the store has assigned an id.
    pub fn into_entity(self, id: DbId) -> Teacher {
        Teacher {
            id,
            name: self.name,
            age: self.age,
            email: self.email,
            phone_number: self.phone_number,
        }
    }
}

impl From<Teacher> for CreateTeacher {
    fn from(teacher: Teacher) -> Self {
        Self {
            name: teacher.name,
            age: teacher.age,
            email: teacher.email,
            phone_number: teacher.phone_number,
        }
    }
}
