/// Project identifiers are UUIDv7, generated by the application at insert time.
pub type DbId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Generate a fresh, time-ordered identifier for a new row.
pub fn new_db_id() -> DbId {
    uuid::Uuid::now_v7()
}

/// Parse a client-supplied identifier. Returns `None` when the string is not
/// a well-formed UUID, which callers report as an invalid id rather than a
/// missing record.
pub fn parse_db_id(raw: &str) -> Option<DbId> {
    uuid::Uuid::parse_str(raw.trim()).ok()
}
