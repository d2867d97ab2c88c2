//! Repository abstractions for data access.

pub mod community;
pub mod expense;
pub mod income;
pub mod member;
pub mod transaction;

pub use community::CommunityRepository;
pub use expense::ExpenseRepository;
pub use income::IncomeRepository;
pub use member::MemberRepository;
pub use transaction::TransactionRepository;
