//! sea-orm entities backing the relational catalog tables.

/// `games` table.
pub mod games;
/// Entity re-exports.
pub mod prelude;
