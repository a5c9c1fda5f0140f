use crate::types::errors::AmountError;
use rust_decimal::{Decimal, RoundingStrategy};
use std::borrow::Cow;
use std::str::FromStr;

const BALANCE_DECIMAL_PLACES: u32 = 2;
const DEFAULT_CURRENCY_SYMBOL: &str = "£";

/// Currency glyphs that may prefix an amount field.
///
/// When an amount starts with one of these glyphs, every occurrence of that
/// glyph is removed before the number is parsed. Only the first matching glyph
/// is stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencySymbols(Vec<String>);

impl CurrencySymbols {
    pub fn new<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>
    {
        Self(
            symbols
                .into_iter()
                .map(Into::into)
                .filter(|symbol: &String| !symbol.is_empty())
                .collect()
        )
    }

    pub fn strip<'a>(&self, raw: &'a str) -> Cow<'a, str> {
        match self.0.iter().find(|symbol| raw.starts_with(symbol.as_str())) {
            Some(symbol) => Cow::Owned(raw.replace(symbol.as_str(), "")),
            None => Cow::Borrowed(raw)
        }
    }
}

impl Default for CurrencySymbols {
    fn default() -> Self {
        Self::new([DEFAULT_CURRENCY_SYMBOL])
    }
}

/// Parses a raw amount field into an exact decimal.
///
/// Accepts an optional leading sign, digits and an optional fractional part
/// after any configured currency glyph has been stripped. Whitespace, digit
/// separators and exponents are rejected.
pub fn parse_amount(raw: &str, symbols: &CurrencySymbols) -> Result<Decimal, AmountError> {
    let value = symbols.strip(raw);

    if value.is_empty() {
        return Err(AmountError::Empty);
    }

    let unsigned = value.strip_prefix(['+', '-']).unwrap_or(&*value);

    if let Some(character) = unsigned.chars().find(|c| !c.is_ascii_digit() && *c != '.') {
        return Err(AmountError::UnexpectedCharacter {
            value: value.into_owned(),
            character
        });
    }

    Decimal::from_str(&value).map_err(|source| AmountError::InvalidFormat {
        value: value.into_owned(),
        source
    })
}

/// Formats a balance with exactly two fractional digits.
///
/// Midpoints round to the nearest even digit. Zero is always rendered unsigned.
pub fn format_balance(balance: Decimal) -> String {
    let mut rounded = balance.round_dp_with_strategy(BALANCE_DECIMAL_PLACES, RoundingStrategy::MidpointNearestEven);
    rounded.rescale(BALANCE_DECIMAL_PLACES);

    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }

    rounded.to_string()
}
