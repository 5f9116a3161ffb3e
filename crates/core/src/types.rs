/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Calendar dates (birth dates, release dates) carry no time or zone.
pub type Date = chrono::NaiveDate;
