use super::{ColumnIndices, SchemaError};
use anyhow::Result;
use csv::StringRecord;

fn header(columns: &[&str]) -> StringRecord {
    StringRecord::from(columns.to_vec())
}

#[test]
fn test_resolves_columns_from_default_fixture_header() -> Result<()> {
    let columns = ColumnIndices::resolve(&header(&["customer_id", "transaction_id", "amount", "transaction_type", "timestamp"]))?;

    assert_eq!(columns, ColumnIndices { customer_id: 0, amount: 2, transaction_type: 3 });
    assert_eq!(columns.required_width(), 4);

    Ok(())
}

#[test]
fn test_resolves_columns_in_any_order() -> Result<()> {
    let columns = ColumnIndices::resolve(&header(&["transaction_type", "note", "amount", "customer_id"]))?;

    assert_eq!(columns, ColumnIndices { customer_id: 3, amount: 2, transaction_type: 0 });
    assert_eq!(columns.required_width(), 4);

    Ok(())
}

#[test]
fn test_duplicate_column_resolves_to_first_occurrence() -> Result<()> {
    let columns = ColumnIndices::resolve(&header(&["amount", "customer_id", "amount", "transaction_type"]))?;

    assert_eq!(columns.amount, 0);

    Ok(())
}

#[test]
fn test_missing_amount_column_is_reported() {
    let result = ColumnIndices::resolve(&header(&["customer_id", "transaction_id", "transaction_type"]));

    assert_eq!(result, Err(SchemaError::MissingColumns { missing: vec!["amount".to_string()] }));
}

#[test]
fn test_every_missing_column_is_reported() {
    let result = ColumnIndices::resolve(&header(&["Customer_ID", "AMOUNT"]));

    let Err(error) = result else {
        panic!("Header with no exact matches should not resolve");
    };

    assert_eq!(error.to_string(), "Header is missing required columns: customer_id, amount, transaction_type");
}

#[test]
fn test_empty_header_is_rejected() {
    assert!(ColumnIndices::resolve(&StringRecord::new()).is_err());
}
