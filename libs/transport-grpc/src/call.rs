//! Unary call execution with cancellation and deadline handling.

use std::future::Future;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tonic::{Response, Status};

/// Execute a unary call, racing it against the caller's cancellation signal
/// and a per-call deadline.
///
/// The caller of a whole workflow holds the token; dropping the workflow or
/// triggering the token turns every in-flight call into
/// `Status::cancelled`, which the decoder keeps distinguishable from
/// domain and infrastructure failures.
pub async fn unary<T, F>(
    cancel: &CancellationToken,
    deadline: Duration,
    call: F,
) -> Result<Response<T>, Status>
where
    F: Future<Output = Result<Response<T>, Status>>,
{
    if cancel.is_cancelled() {
        return Err(Status::cancelled("call cancelled by caller"));
    }

    tokio::select! {
        () = cancel.cancelled() => Err(Status::cancelled("call cancelled by caller")),
        outcome = tokio::time::timeout(deadline, call) => match outcome {
            Ok(result) => result,
            Err(_) => Err(Status::deadline_exceeded("call exceeded its deadline")),
        },
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tonic::Code;

    async fn ok_call() -> Result<Response<u32>, Status> {
        Ok(Response::new(7))
    }

    #[tokio::test]
    async fn completed_call_passes_through() {
        let cancel = CancellationToken::new();
        let response = unary(&cancel, Duration::from_secs(1), ok_call()).await.unwrap();
        assert_eq!(response.into_inner(), 7);
    }

    #[tokio::test]
    async fn pre_cancelled_token_short_circuits() {
        let cancel = CancellationToken::new();
        cancel.cancel();

        let status = unary(&cancel, Duration::from_secs(1), ok_call()).await.unwrap_err();
        assert_eq!(status.code(), Code::Cancelled);
    }

    #[tokio::test]
    async fn cancellation_interrupts_an_in_flight_call() {
        let cancel = CancellationToken::new();
        let child = cancel.clone();

        let pending = async {
            tokio::time::sleep(Duration::from_secs(30)).await;
            ok_call().await
        };

        let handle = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            child.cancel();
        });

        let status = unary(&cancel, Duration::from_secs(60), pending).await.unwrap_err();
        assert_eq!(status.code(), Code::Cancelled);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn deadline_expiry_maps_to_deadline_exceeded() {
        let cancel = CancellationToken::new();
        let slow = async {
            tokio::time::sleep(Duration::from_secs(30)).await;
            ok_call().await
        };

        let status = unary(&cancel, Duration::from_millis(20), slow).await.unwrap_err();
        assert_eq!(status.code(), Code::DeadlineExceeded);
    }
}
