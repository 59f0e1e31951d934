//! Table text handling
//!
//! This module converts the delimited text a host stores for a table into the
//! two shapes the rest of the crate works with:
//! - a [`Matrix`] of string cells, for the editable grid round trip
//! - a [`RecordArray`] of header-keyed rows, for charting
//!
//! Nothing here fails: empty, single-line or ragged input degrades to empty
//! or missing values instead of an error.

mod codec;
mod record;

pub use codec::*;
pub use record::*;
