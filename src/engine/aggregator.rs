use crate::engine::errors::EngineError;
use crate::ledger::{BalanceLedger, LedgerError};
use crate::schema::ColumnIndices;
use crate::source::{RowSource, SourceError};
use crate::types::{CurrencySymbols, RowNumber};
use crate::validation::{RecordValidator, RowError};
use csv::StringRecord;
use tracing::{debug, info, warn};

/// Outcome of one aggregation run.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub ledger: BalanceLedger,
    /// Rows that were applied to the ledger.
    pub applied: usize,
    /// Rows that were rejected and left the ledger unchanged.
    pub skipped: usize
}

/// Single-pass pipeline from a [`RowSource`] to a [`BalanceLedger`].
///
/// The header is resolved before any data row is read; missing required
/// columns end the run. Every data row is then validated and applied in input
/// order. A bad row is logged and counted, never fatal.
pub struct Aggregator {
    currency_symbols: CurrencySymbols
}

impl Aggregator {
    pub fn new(currency_symbols: CurrencySymbols) -> Self {
        Self {
            currency_symbols
        }
    }

    pub fn run<S: RowSource>(&self, mut source: S) -> Result<RunSummary, EngineError> {
        let header = source.header()?;
        let columns = ColumnIndices::resolve(&header)?;

        debug!("Resolved columns {columns:?}, rows need at least {} fields", columns.required_width());

        let validator = RecordValidator::new(columns, self.currency_symbols.clone());
        let mut summary = RunSummary::default();
        let mut row: RowNumber = 0;

        while let Some(result) = source.next_row() {
            row += 1;

            match Self::process_row(&validator, &mut summary.ledger, row, result) {
                Ok(()) => summary.applied += 1,
                Err(RowOutcome::Skipped(error)) => {
                    warn!(row = error.row(), "{error}, skipping");
                    summary.skipped += 1;
                }
                Err(RowOutcome::Fatal(error)) => return Err(error.into())
            }
        }

        info!(
            "Processed {row} rows: {} applied, {} skipped, {} customers",
            summary.applied,
            summary.skipped,
            summary.ledger.len()
        );

        Ok(summary)
    }

    fn process_row(
        validator: &RecordValidator,
        ledger: &mut BalanceLedger,
        row: RowNumber,
        result: Result<StringRecord, SourceError>
    ) -> Result<(), RowOutcome> {
        let record = match result {
            Ok(record) => record,
            Err(error) if error.is_fatal() => return Err(RowOutcome::Fatal(error)),
            Err(error) => {
                return Err(RowOutcome::Skipped(RowError::Malformed {
                    row,
                    message: error.to_string()
                }));
            }
        };

        let transaction = validator.validate(row, &record).map_err(RowOutcome::Skipped)?;

        ledger.apply(&transaction).map_err(|error| match error {
            LedgerError::Overflow { customer_id } => RowOutcome::Skipped(RowError::Overflow { row, customer_id })
        })?;

        debug!(
            "Row [{row}]: {} of {} applied to customer [{}]",
            transaction.kind, transaction.amount, transaction.customer_id
        );

        Ok(())
    }
}

enum RowOutcome {
    Skipped(RowError),
    Fatal(SourceError)
}
