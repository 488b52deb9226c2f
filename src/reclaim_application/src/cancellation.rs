use std::future::Future;

use tokio_util::sync::CancellationToken;

/// Drives `future` to completion unless `cancel` fires first.
///
/// An already cancelled token wins over a future that is ready immediately.
pub(crate) async fn until_cancelled<F>(cancel: &CancellationToken, future: F) -> Option<F::Output>
where
    F: Future,
{
    tokio::select! {
        biased;
        _ = cancel.cancelled() => None,
        output = future => Some(output),
    }
}
