//! Optional timeout helper.

use std::future::Future;
use std::time::Duration;

use crate::error::NarratorError;

/// Wrap a future with a timeout, if one is configured.
pub async fn maybe_timeout<T>(
    duration: Option<Duration>,
    future: impl Future<Output = Result<T, NarratorError>>,
) -> Result<T, NarratorError> {
    match duration {
        Some(duration) => match tokio::time::timeout(duration, future).await {
            Ok(result) => result,
            Err(_) => Err(NarratorError::Timeout(duration.as_millis() as u64)),
        },
        None => future.await,
    }
}
