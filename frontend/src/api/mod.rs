mod auth;
mod balances;
pub mod client;
mod employees;
mod leaves;
mod payroll;
pub mod types;

pub use client::*;
pub use leaves::LeaveDecision;
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod test_support;
