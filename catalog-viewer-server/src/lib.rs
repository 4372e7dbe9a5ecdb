pub mod http;
pub mod routes;
pub mod server;

pub use http::{HttpRequest, HttpResponse, read_http_request, write_response};
pub use routes::{ServerState, handle_request};
pub use server::{ServerHandle, serve, start_server};
