use crate::domain::{Expense, ExpenseId, ExpenseRecord};
use crate::storage::ExpenseDatabase;

use super::AppError;

/// Application service providing high-level operations over the ledger.
/// This is the primary interface for any client (CLI, tests, etc.).
///
/// The underlying database never fails on its own (removal of an absent id
/// is a no-op, lookups return `Option`); this layer maps id misses to
/// [`AppError::ExpenseNotFound`] so callers can report them.
pub struct ExpenseService {
    db: ExpenseDatabase,
}

impl ExpenseService {
    /// Create a service backed by an empty in-memory database.
    pub fn new() -> Self {
        Self {
            db: ExpenseDatabase::new(),
        }
    }

    /// Create a service over an existing database.
    pub fn with_database(db: ExpenseDatabase) -> Self {
        Self { db }
    }

    /// Record a new expense and return a copy of the stored record.
    pub fn add_expense(&mut self, title: String, amount: f64) -> Expense {
        let expense = Expense::new(title, amount);
        self.db.add_expense(expense.clone());
        expense
    }

    /// Get an expense by id.
    pub fn get_expense(&self, id: ExpenseId) -> Result<Expense, AppError> {
        self.db
            .get_expense_by_id(id)
            .cloned()
            .ok_or(AppError::ExpenseNotFound(id))
    }

    /// Update an expense's title and/or amount and return its new state.
    /// `None` leaves a field untouched; `Some(0.0)` sets the amount to zero.
    pub fn update_expense(
        &mut self,
        id: ExpenseId,
        title: Option<String>,
        amount: Option<f64>,
    ) -> Result<Expense, AppError> {
        let expense = self
            .db
            .get_expense_by_id_mut(id)
            .ok_or(AppError::ExpenseNotFound(id))?;

        expense.update(title, amount);
        Ok(expense.clone())
    }

    /// Remove an expense and return its last state.
    pub fn remove_expense(&mut self, id: ExpenseId) -> Result<Expense, AppError> {
        let removed = self.get_expense(id)?;
        self.db.remove_expense(id);
        Ok(removed)
    }

    /// All expenses whose title matches case-insensitively.
    /// No matches yields an empty vec, never an error.
    pub fn find_by_title(&self, title: &str) -> Vec<Expense> {
        self.db
            .get_expenses_by_title(title)
            .into_iter()
            .cloned()
            .collect()
    }

    /// All expenses in insertion order.
    pub fn list_expenses(&self) -> &[Expense] {
        self.db.expenses()
    }

    /// Snapshot of the whole ledger in insertion order.
    pub fn to_records(&self) -> Vec<ExpenseRecord> {
        self.db.to_records()
    }

    /// Direct access to the underlying database.
    pub fn database(&self) -> &ExpenseDatabase {
        &self.db
    }
}

impl Default for ExpenseService {
    fn default() -> Self {
        Self::new()
    }
}
