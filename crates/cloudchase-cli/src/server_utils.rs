use axum::{body::Body, extract::Request, http::Uri, middleware::Next, response::Response};
use colored::{ColoredString, Colorize};
use local_ip_address::local_ip;
use std::{
    io,
    net::{IpAddr, SocketAddr},
    time::Duration,
};
use tokio::{net::TcpSocket, signal};
use tower_http::trace::OnResponse;
use tracing::{Span, debug, info};

use crate::logging::{FormatElapsedTimeOptions, format_elapsed_time};

pub fn log_server_start(start_time: quanta::Instant, host: bool, addr: SocketAddr) {
    info!(name: "SKIP_FORMAT", "");
    let elapsed_time = format_elapsed_time(
        start_time.elapsed(),
        &FormatElapsedTimeOptions::default_dev(),
    );
    info!(name: "SKIP_FORMAT", "{} {}", "Chase the Cloud ☁".bold().bright_blue(), format!("dashboard started in {}", elapsed_time));
    info!(name: "SKIP_FORMAT", "");

    let port = addr.port();
    let url = format!("\x1b]8;;http://localhost:{port}\x1b\\http://localhost:{port}\x1b]8;;\x1b\\")
        .bold()
        .underline()
        .bright_blue();
    let network_url = match (host, local_ip()) {
        (true, Ok(local_ip)) => format!(
            "\x1b]8;;http://{local_ip}:{port}\x1b\\http://{local_ip}:{port}\x1b]8;;\x1b\\"
        )
        .bold()
        .underline()
        .bright_magenta(),
        (true, Err(_)) => "Could not determine the local network address".dimmed(),
        (false, _) => "Use --host to expose the dashboard to your network".dimmed(),
    };
    info!(name: "SKIP_FORMAT", "🮔  {}    {}", "Local".bold(), url);
    info!(name: "SKIP_FORMAT", "🮔  {}  {}", "Network".bold(), network_url);
    info!(name: "SKIP_FORMAT", "");

    info!(name: "server", "{}", "waiting for requests...".dimmed());
}

/// Copies the request URI into the response extensions, where [`CustomOnResponse`] can read it.
pub async fn record_uri(req: Request, next: Next) -> Response {
    let uri = req.uri().clone();
    let mut res = next.run(req).await;
    res.extensions_mut().insert(uri);
    res
}

#[derive(Clone, Debug)]
pub struct CustomOnResponse;

impl OnResponse<Body> for CustomOnResponse {
    fn on_response(self, response: &Response<Body>, latency: Duration, _span: &Span) {
        let status = response.status();

        // Skip informational responses
        if status.is_informational() {
            return;
        }

        let status = if status.is_server_error() {
            status.to_string().red()
        } else if status.is_client_error() {
            status.to_string().yellow()
        } else {
            status.to_string().green()
        };

        let uri = response
            .extensions()
            .get::<Uri>()
            .map(|uri| uri.to_string())
            .unwrap_or_default()
            .bold();

        // Streamed bodies are still being sent at this point, so this is the time to first byte.
        let latency = format_elapsed_time(latency, &latency_format_options());

        info!(name: "", "{} {} {}", status, uri, latency);
    }
}

/// Latency in parentheses after the URI, e.g. `(12ms)`. Uncoloured values are dimmed.
pub fn latency_format_options() -> FormatElapsedTimeOptions<'static> {
    FormatElapsedTimeOptions {
        additional_fn: Some(&parenthesize),
        ..Default::default()
    }
}

fn parenthesize(msg: ColoredString) -> ColoredString {
    let formatted_msg = format!("({})", msg);
    if msg.fgcolor.is_none() {
        formatted_msg.dimmed()
    } else {
        formatted_msg.into()
    }
}

pub async fn find_open_port(address: &IpAddr, starting_port: u16) -> io::Result<u16> {
    let mut port = starting_port;

    loop {
        let socket = TcpSocket::new_v4()?;
        match socket.bind(SocketAddr::new(*address, port)) {
            Ok(_) => {
                debug!("Found open port: {}", port);
                return Ok(port);
            }
            Err(_) => {
                debug!(
                    "Port {} is already in use or failed to bind, trying next one",
                    port
                );
                port = port.checked_add(1).ok_or_else(|| {
                    io::Error::new(
                        io::ErrorKind::AddrInUse,
                        format!("no free port at or above {starting_port}"),
                    )
                })?;
            }
        }
    }
}

pub async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!(name: "server", "shutting down");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latency_is_parenthesized() {
        colored::control::set_override(false);

        let latency = format_elapsed_time(Duration::from_millis(12), &latency_format_options());

        assert_eq!(latency.to_string(), "(12ms)");
    }

    #[tokio::test]
    async fn test_find_open_port_skips_taken_port() {
        let taken = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let taken_port = taken.local_addr().unwrap().port();

        let port = find_open_port(&IpAddr::from([127, 0, 0, 1]), taken_port)
            .await
            .unwrap();

        assert!(port > taken_port);
    }
}
