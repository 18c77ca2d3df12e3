//! Department entity model and DTOs.

use campus_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// A department row from the `departments` table.
///
/// Also the body of `PATCH /api/department`, which replaces every mutable
/// field of the row identified by `id`.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize, Validate, ToSchema)]
pub struct Department {
    pub id: DbId,
    #[validate(custom(function = "campus_core::validation::validate_not_blank"))]
    #[schema(example = "Mathematics")]
    pub name: String,
}

/// DTO for creating a new department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateDepartment {
    #[validate(custom(function = "campus_core::validation::validate_not_blank"))]
    #[schema(example = "Mathematics")]
    pub name: String,
}

impl CreateDepartment {
    /// Build the full entity once the store has assigned an id.
    pub fn into_entity(self, id: DbId) -> Department {
        Department {
            id,
            name: self.name,
        }
    }
}

impl From<Department> for CreateDepartment {
    fn from(department: Department) -> Self {
        Self {
            name: department.name,
        }
    }
}
