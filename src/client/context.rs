//! Per-call cancellation and deadline carrier

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::error::ApiError;

/// Cancellation token plus optional deadline, passed as the first argument of
/// every API operation and honored while the request is in flight.
///
/// Cloning shares the token: cancelling any clone cancels them all.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    token: CancellationToken,
    deadline: Option<Instant>,
}

impl RequestContext {
    /// Context that is never cancelled and has no deadline.
    pub fn background() -> Self {
        Self::default()
    }

    /// Context cancelled through an externally owned token.
    pub fn with_token(token: CancellationToken) -> Self {
        Self {
            token,
            deadline: None,
        }
    }

    /// Set a deadline `timeout` from now. An earlier existing deadline wins.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Set an absolute deadline. An earlier existing deadline wins.
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(match self.deadline {
            Some(current) if current < deadline => current,
            _ => deadline,
        });
        self
    }

    /// Derived context: cancelled when `self` is, but cancelling it leaves
    /// `self` untouched.
    pub fn child(&self) -> Self {
        Self {
            token: self.token.child_token(),
            deadline: self.deadline,
        }
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Fail fast if the context is already done.
    pub fn check(&self) -> Result<(), ApiError> {
        if self.token.is_cancelled() {
            return Err(ApiError::Cancelled);
        }
        match self.deadline {
            Some(deadline) if deadline <= Instant::now() => Err(ApiError::DeadlineExceeded),
            _ => Ok(()),
        }
    }

    /// Drive `fut` to completion unless the context is cancelled or its
    /// deadline passes first. Dropping `fut` aborts the underlying I/O.
    pub async fn run<F: Future>(&self, fut: F) -> Result<F::Output, ApiError> {
        self.check()?;

        let deadline = async {
            match self.deadline {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            biased;
            _ = self.token.cancelled() => Err(ApiError::Cancelled),
            _ = deadline => Err(ApiError::DeadlineExceeded),
            out = fut => Ok(out),
        }
    }
}
