use std::io::Write;

use csv::{Terminator, WriterBuilder};
use serde::Serialize;

use crate::ledger::BalanceLedger;
use crate::report::errors::ReportError;
use crate::types::{format_balance, CustomerId};

pub const EMPTY_REPORT_MESSAGE: &str = "No valid balances found";

/// One output row: a customer and its balance rendered with two decimals.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct BalanceLine {
    pub customer_id: CustomerId,
    pub balance: String
}

/// Final balances ordered by customer id.
///
/// Ordering is by the raw bytes of the id, so the same ledger always produces the
/// same report.
#[derive(Debug, Default)]
pub struct Report {
    lines: Vec<BalanceLine>
}

impl Report {
    pub fn from_ledger(ledger: BalanceLedger) -> Self {
        let mut entries: Vec<_> = ledger.into_iter().collect();
        entries.sort_unstable_by(|(left, _), (right, _)| left.as_bytes().cmp(right.as_bytes()));

        let lines = entries
            .into_iter()
            .map(|(customer_id, balance)| BalanceLine {
                customer_id,
                balance: format_balance(balance)
            })
            .collect();

        Self { lines }
    }

    #[cfg(test)]
    pub fn lines(&self) -> &[BalanceLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Writes one `customer_id,balance` line per customer without a header row,
    /// or [`EMPTY_REPORT_MESSAGE`] when there is nothing to report.
    pub fn write_to<W: Write>(&self, mut output: W) -> Result<(), ReportError> {
        if self.is_empty() {
            writeln!(output, "{EMPTY_REPORT_MESSAGE}")?;
            output.flush()?;
            return Ok(());
        }

        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(output);

        for line in &self.lines {
            writer.serialize(line)?;
        }

        writer.flush()?;

        Ok(())
    }
}
