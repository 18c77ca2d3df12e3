//! Row models, create DTOs, and the conversions between them.

pub mod department;
pub mod teacher;
