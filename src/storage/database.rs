use crate::domain::{Expense, ExpenseId, ExpenseRecord};

/// In-memory store of expenses, kept in insertion order.
/// Lookups are linear scans, which is adequate at the scale this tool
/// targets; iteration order is always insertion order.
#[derive(Debug, Default)]
pub struct ExpenseDatabase {
    expenses: Vec<Expense>,
}

impl ExpenseDatabase {
    /// Create an empty database.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an expense to the end of the sequence. No duplicate-id check:
    /// ids come from a random generator, so collisions are negligible.
    pub fn add_expense(&mut self, expense: Expense) {
        self.expenses.push(expense);
    }

    /// Remove every expense with the given id, preserving the relative
    /// order of the rest. Removing an absent id is a silent no-op.
    pub fn remove_expense(&mut self, id: ExpenseId) {
        self.expenses.retain(|expense| expense.id != id);
    }

    /// Find an expense by id. Returns the first match in insertion order,
    /// or `None` when absent.
    pub fn get_expense_by_id(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|expense| expense.id == id)
    }

    /// Mutable variant of [`ExpenseDatabase::get_expense_by_id`], used to
    /// update an expense in place.
    pub fn get_expense_by_id_mut(&mut self, id: ExpenseId) -> Option<&mut Expense> {
        self.expenses.iter_mut().find(|expense| expense.id == id)
    }

    /// Find all expenses whose title matches case-insensitively, in
    /// insertion order. No matches yields an empty vec, never an error.
    pub fn get_expenses_by_title(&self, title: &str) -> Vec<&Expense> {
        let needle = title.to_lowercase();
        self.expenses
            .iter()
            .filter(|expense| expense.title.to_lowercase() == needle)
            .collect()
    }

    /// All expenses in insertion order.
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Snapshot every expense, in sequence order.
    pub fn to_records(&self) -> Vec<ExpenseRecord> {
        self.expenses.iter().map(Expense::to_record).collect()
    }
}
