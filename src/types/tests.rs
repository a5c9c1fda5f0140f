use super::{format_balance, parse_amount, AmountError, CurrencySymbols};
use anyhow::Result;
use rust_decimal::Decimal;
use std::str::FromStr;

#[test]
fn test_amount_successfully_parses_valid_strings() -> Result<()> {
    let symbols = CurrencySymbols::default();
    let test_cases = vec![
        ("100.00", "100.00"),
        ("25.50", "25.50"),
        ("-1.5", "-1.5"),
        ("+7.25", "7.25"),
        ("42", "42"),
        ("0.0001", "0.0001"),
    ];

    for (input_string, expected_output) in test_cases {
        assert_eq!(parse_amount(input_string, &symbols)?, Decimal::from_str(expected_output)?);
    }

    Ok(())
}

#[test]
fn test_amount_with_pound_prefix_parses_like_plain_number() -> Result<()> {
    let symbols = CurrencySymbols::default();

    assert_eq!(parse_amount("£100.00", &symbols)?, parse_amount("100.00", &symbols)?);
    assert_eq!(parse_amount("£1£000.50", &symbols)?, Decimal::from_str("1000.50")?);

    Ok(())
}

#[test]
fn test_amount_only_strips_symbol_when_it_is_a_prefix() {
    let symbols = CurrencySymbols::default();

    assert!(parse_amount("100£", &symbols).is_err());
    assert!(parse_amount("1£00", &symbols).is_err());
}

#[test]
fn test_amount_fails_to_parse_invalid_strings() {
    let symbols = CurrencySymbols::default();

    assert!(matches!(parse_amount("", &symbols), Err(AmountError::Empty)));
    assert!(matches!(parse_amount("£", &symbols), Err(AmountError::Empty)));
    assert!(matches!(parse_amount("abc", &symbols), Err(AmountError::UnexpectedCharacter { character: 'a', .. })));
    assert!(matches!(parse_amount("1.2.3", &symbols), Err(AmountError::InvalidFormat { .. })));
    assert!(parse_amount("-", &symbols).is_err());
    assert!(parse_amount("+-5", &symbols).is_err());
    assert!(parse_amount(" 5.00", &symbols).is_err());
    assert!(parse_amount("$10.00", &symbols).is_err());
}

#[test]
fn test_amount_honours_configured_symbols() -> Result<()> {
    let symbols = CurrencySymbols::new(["$", "€"]);

    assert_eq!(parse_amount("$10.00", &symbols)?, Decimal::from_str("10.00")?);
    assert_eq!(parse_amount("€3", &symbols)?, Decimal::from(3));
    assert!(parse_amount("£3", &symbols).is_err());

    Ok(())
}

#[test]
fn test_currency_symbols_ignore_empty_entries() {
    let symbols = CurrencySymbols::new(["", "£"]);

    assert_eq!(symbols.strip("£5"), "5");
    assert_eq!(symbols.strip("5"), "5");
}

#[test]
fn test_balance_is_always_formatted_with_two_decimal_places() -> Result<()> {
    let test_cases = vec![
        ("60", "60.00"),
        ("69.5", "69.50"),
        ("200.00", "200.00"),
        ("-25.5", "-25.50"),
        ("0.001", "0.00"),
        ("1.23456", "1.23"),
    ];

    for (input_string, expected_output) in test_cases {
        assert_eq!(format_balance(Decimal::from_str(input_string)?), expected_output);
    }

    Ok(())
}

#[test]
fn test_balance_midpoints_round_to_nearest_even() -> Result<()> {
    assert_eq!(format_balance(Decimal::from_str("0.125")?), "0.12");
    assert_eq!(format_balance(Decimal::from_str("0.135")?), "0.14");
    assert_eq!(format_balance(Decimal::from_str("-2.345")?), "-2.34");

    Ok(())
}

#[test]
fn test_balance_never_renders_negative_zero() -> Result<()> {
    assert_eq!(format_balance(Decimal::from_str("-0.001")?), "0.00");
    assert_eq!(format_balance(Decimal::from_str("-0")?), "0.00");

    Ok(())
}

#[test]
fn test_amount_rejects_digit_separators() {
    let symbols = CurrencySymbols::default();

    assert!(matches!(parse_amount("1_000.00", &symbols), Err(AmountError::UnexpectedCharacter { character: '_', .. })));
    assert!(matches!(parse_amount("1_0", &symbols), Err(AmountError::UnexpectedCharacter { character: '_', .. })));
    assert!(parse_amount("£1_000", &symbols).is_err());
}

#[test]
fn test_amount_rejects_exponent_notation() {
    let symbols = CurrencySymbols::default();

    assert!(matches!(parse_amount("1e3", &symbols), Err(AmountError::UnexpectedCharacter { character: 'e', .. })));
    assert!(matches!(parse_amount("2.5E-1", &symbols), Err(AmountError::UnexpectedCharacter { character: 'E', .. })));
}
