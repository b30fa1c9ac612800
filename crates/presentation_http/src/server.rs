//! Server lifecycle
//!
//! Serves the router until a shutdown signal arrives, then gives open
//! connections a bounded time to finish.

use std::future::{Future, IntoFuture};
use std::io;
use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tracing::{info, warn};

/// How the server stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownOutcome {
    /// Every connection closed before the deadline
    Drained,
    /// Connections were still open when the timeout expired
    TimedOut,
}

/// Serve `app` until `signal` resolves, then drain for at most `timeout`
///
/// # Errors
///
/// Returns the I/O error that stopped the accept loop.
pub async fn serve<S>(
    listener: TcpListener,
    app: Router,
    signal: S,
    timeout: Duration,
) -> io::Result<ShutdownOutcome>
where
    S: Future<Output = ()> + Send + 'static,
{
    let (signalled_tx, signalled_rx) = oneshot::channel();

    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            signal.await;
            let _ = signalled_tx.send(());
        })
        .into_future();

    tokio::select! {
        result = server => result.map(|()| ShutdownOutcome::Drained),
        () = drain_deadline(signalled_rx, timeout) => {
            warn!(
                timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
                "Connections still open after shutdown timeout, closing them"
            );
            Ok(ShutdownOutcome::TimedOut)
        }
    }
}

/// Resolves `timeout` after the shutdown signal, never if it does not fire
async fn drain_deadline(signalled: oneshot::Receiver<()>, timeout: Duration) {
    if signalled.await.is_err() {
        std::future::pending::<()>().await;
    }
    info!("Waiting up to {:?} for connections to close...", timeout);
    tokio::time::sleep(timeout).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::routing::get;
    use tokio::io::AsyncWriteExt;
    use tokio::net::TcpStream;

    async fn local_listener() -> TcpListener {
        TcpListener::bind("127.0.0.1:0").await.unwrap()
    }

    #[tokio::test]
    async fn idle_server_drains_immediately() {
        let (stop_tx, stop_rx) = oneshot::channel::<()>();
        let server = tokio::spawn(serve(
            local_listener().await,
            Router::new(),
            async {
                stop_rx.await.ok();
            },
            Duration::from_secs(30),
        ));

        stop_tx.send(()).unwrap();

        let outcome = tokio::time::timeout(Duration::from_secs(5), server)
            .await
            .unwrap()
            .unwrap()
            .unwrap();
        assert_eq!(outcome, ShutdownOutcome::Drained);
    }

    #[tokio::test]
    async fn stuck_request_is_abandoned_after_timeout() {
        let listener = local_listener().await;
        let addr = listener.local_addr().unwrap();
        let app = Router::new().route("/stuck", get(std::future::pending::<&'static str>));

        let (stop_tx, stop_rx) = oneshot::channel::<()>();
        let server = tokio::spawn(serve(
            listener,
            app,
            async {
                stop_rx.await.ok();
            },
            Duration::from_millis(200),
        ));

        let mut stream = TcpStream::connect(addr).await.unwrap();
        stream
            .write_all(b"GET /stuck HTTP/1.1\r\nHost: localhost\r\n\r\n")
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(100)).await;
        stop_tx.send(()).unwrap();

        let outcome = tokio::time::timeout(Duration::from_secs(5), server)
            .await
            .expect("shutdown is bounded")
            .unwrap()
            .unwrap();
        assert_eq!(outcome, ShutdownOutcome::TimedOut);
    }
}
