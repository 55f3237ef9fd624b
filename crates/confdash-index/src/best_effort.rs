use tracing::warn;

use crate::Result;

/// Unwrap a query result for a display-only read path.
///
/// On failure the error is logged and an empty value (`Vec::new()`, `None`)
/// is returned, so a broken query renders as "no data" instead of aborting
/// the view.
pub fn best_effort<T: Default>(operation: &str, result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            warn!(operation, error = %err, "query failed, showing no data");
            T::default()
        }
    }
}
