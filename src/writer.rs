use atml::{AccountReport, Result};

use csv::Writer;

/// Serializes the report rows as CSV, header first
pub fn write_report(report: &[AccountReport]) -> Result<String> {
    let mut wtr = Writer::from_writer(vec![]);

    log::debug!("Serializing reports...");
    for account_report in report {
        log::debug!("Serializing report: {account_report:?}");
        wtr.serialize(account_report)?;
    }

    let utf8 = wtr.into_inner()?;
    let output = String::from_utf8(utf8)?;

    return Ok(output);
}
