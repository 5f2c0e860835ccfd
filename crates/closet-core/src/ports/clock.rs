//! Time source for record timestamps.

/// Provides `created_at` values for new records.
///
/// Implementations must return strictly increasing epoch milliseconds
/// within a process, since the timestamp is the record's identity.
pub trait Clock: Send + Sync {
    fn now_millis(&self) -> i64;
}
