use rusqlite::Row;

/// A model that can be read back from a `SELECT` of its own columns.
pub trait FromSqliteRow: Sized {
    /// Column list, in the order `from_row` expects, for building `SELECT`s.
    const COLUMNS: &'static str;

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self>;
}
