//! Domain types.
//!
//! Records as stored in the box and the row-oriented views handed to
//! renderers.

mod record;
mod table;

pub use record::{Draft, Record};
pub use table::{Row, Table, HEADER};
