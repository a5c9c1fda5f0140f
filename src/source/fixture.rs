use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

use tracing::{info, warn};

use crate::source::errors::FixtureError;

pub const DEFAULT_FIXTURE_PATH: &str = "transactions.csv";
pub const DEFAULT_FIXTURE_ATTEMPTS: usize = 3;

pub const DEFAULT_FIXTURE: &str = "customer_id,transaction_id,amount,transaction_type,timestamp
acc_123,tx_1,100.00,CREDIT,2024-10-27T10:00:00Z
acc_456,tx_2,50.00,CREDIT,2024-10-27T10:01:00Z
acc_123,tx_3,25.50,DEBIT,2024-10-27T10:02:00Z
acc_456,tx_4,10.00,CREDIT,2024-10-27T10:03:00Z
acc_789,tx_5,200.00,CREDIT,2024-10-27T10:04:00Z
acc_123,tx_6,5.00,DEBIT,2024-10-27T10:05:00Z";

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum FixtureStatus {
    Existing,
    Created
}

/// Makes sure a readable transaction file exists at `path`.
///
/// An existing file is left as it is. A missing file is created with
/// [`DEFAULT_FIXTURE`], trying at most `attempts` times before giving up.
pub fn ensure_default_fixture(path: &Path, attempts: usize) -> Result<FixtureStatus, FixtureError> {
    let mut remaining = attempts;
    let mut status = FixtureStatus::Existing;

    loop {
        match File::open(path) {
            Ok(_) => return Ok(status),
            Err(error) if error.kind() == ErrorKind::NotFound => {
                if remaining == 0 {
                    return Err(FixtureError::Exhausted {
                        path: path.to_path_buf(),
                        attempts
                    });
                }

                remaining -= 1;

                match write_fixture(path) {
                    Ok(()) => {
                        info!("Created default transaction file at {}", path.display());
                        status = FixtureStatus::Created;
                    }
                    Err(error) if error.kind() == ErrorKind::AlreadyExists => {}
                    Err(error) => warn!("Unable to write default transaction file at {}: {error}", path.display())
                }
            }
            Err(error) => {
                return Err(FixtureError::Io {
                    path: path.to_path_buf(),
                    source: error
                });
            }
        }
    }
}

fn write_fixture(path: &Path) -> std::io::Result<()> {
    let mut file = OpenOptions::new().write(true).create_new(true).open(path)?;
    file.write_all(DEFAULT_FIXTURE.as_bytes())?;
    file.flush()
}
