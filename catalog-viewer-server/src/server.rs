use crate::http::{HttpResponse, read_http_request, write_response};
use crate::routes::{ServerState, handle_request};
use catalog_viewer_core::ViewerError;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

const READ_TIMEOUT: Duration = Duration::from_secs(15);

/// A server running on its own task
pub struct ServerHandle {
    handle: JoinHandle<Result<(), ViewerError>>,
    cancel_token: CancellationToken,
    local_addr: SocketAddr,
}

impl ServerHandle {
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Base URL, e.g. `http://127.0.0.1:8080`
    pub fn url(&self) -> String {
        format!("http://{}", self.local_addr)
    }

    /// Stop accepting connections; in-flight requests still finish
    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }

    pub async fn wait_for_shutdown(self) -> Result<(), ViewerError> {
        self.handle
            .await
            .map_err(|e| ViewerError::Io(std::io::Error::other(e)))?
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

/// Spawn [`serve`] on an already bound listener
pub fn start_server(listener: TcpListener, state: ServerState) -> Result<ServerHandle, ViewerError> {
    let local_addr = listener.local_addr()?;
    let cancel_token = CancellationToken::new();
    let cancel_clone = cancel_token.clone();
    let state = Arc::new(state);

    let handle = tokio::spawn(async move { serve(listener, state, cancel_clone).await });

    Ok(ServerHandle {
        handle,
        cancel_token,
        local_addr,
    })
}

/// Accept connections until `cancel_token` fires; each connection gets its own task
pub async fn serve(
    listener: TcpListener,
    state: Arc<ServerState>,
    cancel_token: CancellationToken,
) -> Result<(), ViewerError> {
    info!(addr = %listener.local_addr()?, "Serving catalog");

    loop {
        let (stream, peer) = tokio::select! {
            _ = cancel_token.cancelled() => {
                info!("Shutting down");
                return Ok(());
            }
            accepted = listener.accept() => match accepted {
                Ok(accepted) => accepted,
                Err(e) => {
                    warn!(error = %e, "Accept failed");
                    continue;
                }
            },
        };

        let state = state.clone();
        tokio::spawn(async move {
            if let Err(e) = handle_connection(stream, &state).await {
                debug!(peer = %peer, error = %e, "Connection error");
            }
        });
    }
}

async fn handle_connection(mut stream: TcpStream, state: &ServerState) -> std::io::Result<()> {
    let request = match tokio::time::timeout(READ_TIMEOUT, read_http_request(&mut stream)).await {
        Ok(Ok(request)) => request,
        Ok(Err(e)) => {
            let response = HttpResponse {
                status: "400 Bad Request",
                content_type: "text/plain; charset=utf-8",
                body: e.to_string().into_bytes(),
            };
            write_response(&mut stream, &response).await?;
            return Err(e);
        }
        Err(_) => {
            return Err(std::io::Error::new(
                std::io::ErrorKind::TimedOut,
                "timed out reading request",
            ));
        }
    };

    let response = handle_request(state, &request).await;
    debug!(
        method = %request.method,
        path = %request.path,
        status = response.status_code(),
        "Request served"
    );
    write_response(&mut stream, &response).await
}
