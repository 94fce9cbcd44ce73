use anyhow::Result;
use outlay::application::AppError;
use outlay::domain::ExpenseId;
use uuid::Uuid;

mod common;

use common::{SAMPLE_EXPENSES, sample_service};

#[test]
fn test_add_and_list_preserves_insertion_order() {
    let (service, ids) = sample_service();

    let listed: Vec<ExpenseId> = service.list_expenses().iter().map(|e| e.id).collect();
    assert_eq!(listed, ids);

    let titles: Vec<&str> = service
        .list_expenses()
        .iter()
        .map(|e| e.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Groceries", "cosmetics", "toiletries"]);
}

#[test]
fn test_get_expense_returns_exact_match() -> Result<()> {
    let (service, ids) = sample_service();

    let expense = service.get_expense(ids[1])?;
    assert_eq!(expense.id, ids[1]);
    assert_eq!(expense.title, "cosmetics");
    assert_eq!(expense.amount, 260000.00);

    Ok(())
}

#[test]
fn test_get_expense_absent_id_is_not_found() {
    let (service, _ids) = sample_service();

    let missing = Uuid::new_v4();
    let result = service.get_expense(missing);
    assert!(matches!(result, Err(AppError::ExpenseNotFound(id)) if id == missing));
}

#[test]
fn test_update_through_service() -> Result<()> {
    let (mut service, ids) = sample_service();
    let before = service.get_expense(ids[0])?;

    let updated = service.update_expense(
        ids[0],
        Some("Weekly groceries".into()),
        Some(450000.00),
    )?;

    assert_eq!(updated.title, "Weekly groceries");
    assert_eq!(updated.amount, 450000.00);
    assert_eq!(updated.created_at, before.created_at);
    assert!(updated.updated_at >= before.updated_at);

    // The stored record reflects the change
    let stored = service.get_expense(ids[0])?;
    assert_eq!(stored.title, "Weekly groceries");

    Ok(())
}

#[test]
fn test_update_amount_zero_is_applied() -> Result<()> {
    let (mut service, ids) = sample_service();

    let updated = service.update_expense(ids[2], None, Some(0.0))?;
    assert_eq!(updated.amount, 0.0);
    assert_eq!(updated.title, "toiletries");

    Ok(())
}

#[test]
fn test_update_absent_id_is_not_found() {
    let (mut service, _ids) = sample_service();

    let result = service.update_expense(Uuid::new_v4(), Some("Rent".into()), None);
    assert!(matches!(result, Err(AppError::ExpenseNotFound(_))));
}

#[test]
fn test_find_by_title_is_case_insensitive() {
    let (service, ids) = sample_service();

    let matches = service.find_by_title("groceries");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].id, ids[0]);
    assert_eq!(matches[0].title, "Groceries");
}

#[test]
fn test_find_by_title_no_match_is_empty() {
    let (service, _ids) = sample_service();

    assert!(service.find_by_title("rent").is_empty());
}

#[test]
fn test_remove_expense_returns_last_state() -> Result<()> {
    let (mut service, ids) = sample_service();

    let removed = service.remove_expense(ids[0])?;
    assert_eq!(removed.title, "Groceries");

    let result = service.get_expense(ids[0]);
    assert!(matches!(result, Err(AppError::ExpenseNotFound(_))));

    Ok(())
}

#[test]
fn test_remove_absent_id_leaves_ledger_unchanged() {
    let (mut service, ids) = sample_service();

    let result = service.remove_expense(Uuid::new_v4());
    assert!(matches!(result, Err(AppError::ExpenseNotFound(_))));

    let listed: Vec<ExpenseId> = service.list_expenses().iter().map(|e| e.id).collect();
    assert_eq!(listed, ids);
}

#[test]
fn test_snapshot_follows_insertion_order() {
    let (service, ids) = sample_service();

    let records = service.to_records();
    assert_eq!(records.len(), SAMPLE_EXPENSES.len());

    for (record, id) in records.iter().zip(&ids) {
        assert_eq!(record.id, id.to_string());
    }
}

#[test]
fn test_end_to_end_household_ledger() -> Result<()> {
    let (mut service, ids) = sample_service();
    assert_eq!(service.list_expenses().len(), 3);

    // Remove the first expense by id; the other two keep their order
    service.remove_expense(ids[0])?;

    assert_eq!(service.list_expenses().len(), 2);
    let titles: Vec<&str> = service
        .list_expenses()
        .iter()
        .map(|e| e.title.as_str())
        .collect();
    assert_eq!(titles, vec!["cosmetics", "toiletries"]);

    Ok(())
}
