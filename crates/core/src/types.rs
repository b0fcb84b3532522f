/// School primary keys are random UUIDs assigned by the store on append.
pub type SchoolId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
