/// All entity ids are process-unique positive integers, assigned by a
/// per-entity monotonically increasing counter and never reused.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
