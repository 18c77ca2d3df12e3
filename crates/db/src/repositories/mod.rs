//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod department_repo;
pub mod teacher_repo;

pub use department_repo::{DepartmentRepo, WriteOutcome};
pub use teacher_repo::TeacherRepo;
