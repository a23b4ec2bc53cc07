/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Parse a raw path segment into a [`DbId`].
///
/// Returns `None` for anything that is not a positive integer in range, so
/// callers can treat malformed ids exactly like unknown ones.
pub fn parse_db_id(raw: &str) -> Option<DbId> {
    raw.parse::<DbId>().ok().filter(|id| *id > 0)
}
