//! `SeaORM` entity definitions.

pub mod communities;
pub mod expenses;
pub mod incomes;
pub mod members;
