//! CSV input and output for the host application.
//!
//! All readers trim whitespace around fields and accept records with missing
//! trailing columns, so hand-edited files load without fuss.

pub mod account_reader;
pub mod outcome_writer;
pub mod request_reader;
pub mod stock_reader;

use std::io::Read;

fn reader_from<R: Read>(source: R) -> ::csv::Reader<R> {
    ::csv::ReaderBuilder::new()
        .trim(::csv::Trim::All)
        .flexible(true)
        .from_reader(source)
}
