use crate::error::Result;
use crate::interfaces::csv::outcome_writer::WithdrawalOutcome;
use std::io::Write;

/// Writes all outcomes as a pretty-printed JSON array followed by a newline.
pub fn write_outcomes<W: Write>(mut sink: W, outcomes: &[WithdrawalOutcome]) -> Result<()> {
    serde_json::to_writer_pretty(&mut sink, outcomes)?;
    writeln!(sink)?;
    Ok(())
}
