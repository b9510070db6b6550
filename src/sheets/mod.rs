//! Everything that talks to the spreadsheet: the raw REST client, the named
//! column layout, and the order row operations built on both.

pub mod client;
pub mod orders;
pub mod schema;

pub use client::{CellWrite, SheetsClient, SheetsError};
pub use schema::{Schema, FIRST_DATA_ROW};
