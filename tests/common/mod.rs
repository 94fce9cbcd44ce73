// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use outlay::application::ExpenseService;
use outlay::domain::ExpenseId;

/// The three canonical household expenses, in insertion order
pub const SAMPLE_EXPENSES: [(&str, f64); 3] = [
    ("Groceries", 500000.00),
    ("cosmetics", 260000.00),
    ("toiletries", 20000.0),
];

/// Helper to create a service pre-loaded with the sample expenses.
/// Returns the generated ids in insertion order.
pub fn sample_service() -> (ExpenseService, Vec<ExpenseId>) {
    let mut service = ExpenseService::new();
    let ids = SAMPLE_EXPENSES
        .iter()
        .map(|(title, amount)| service.add_expense((*title).into(), *amount).id)
        .collect();
    (service, ids)
}
