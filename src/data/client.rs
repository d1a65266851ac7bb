//! HTTP client for the racers API.
//!
//! Every failure mode (transport, non-2xx status, unparseable body) is
//! reported as a single [`FetchError`].

use std::time::Duration;

use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use super::models::Racer;

/// Path of the leaderboard resource, relative to the base URL
pub const TOP_RACERS_PATH: &str = "/api/top-racers";

/// The only error the data layer reports
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("network error: {reason}")]
pub struct FetchError {
    pub reason: String,
}

impl FetchError {
    pub fn new(reason: impl Into<String>) -> Self {
        FetchError {
            reason: reason.into(),
        }
    }
}

/// Anything that can produce the leaderboard
pub trait RacerSource: Send + 'static {
    fn fetch(&self) -> Result<Vec<Racer>, FetchError>;
}

/// Blocking client for `GET /api/top-racers`
#[derive(Debug, Clone)]
pub struct RacerClient {
    base_url: String,
    agent: ureq::Agent,
}

impl RacerClient {
    /// Create a client. Without a timeout the transport default applies.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let agent = match timeout {
            Some(timeout) => ureq::AgentBuilder::new().timeout(timeout).build(),
            None => ureq::agent(),
        };
        RacerClient { base_url, agent }
    }

    #[allow(dead_code)] // Used in tests
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the leaderboard resource
    pub fn endpoint(&self) -> String {
        format!("{}{TOP_RACERS_PATH}", self.base_url)
    }

    #[instrument(skip(self), fields(url = %self.endpoint()))]
    pub fn fetch_top_racers(&self) -> Result<Vec<Racer>, FetchError> {
        let url = self.endpoint();
        debug!("Requesting leaderboard");

        let response = self.agent.get(&url).call().map_err(|e| {
            let err = match e {
                ureq::Error::Status(code, _) => FetchError::new(format!("HTTP status {code}")),
                ureq::Error::Transport(transport) => FetchError::new(transport.to_string()),
            };
            warn!(error = %err, "Leaderboard request failed");
            err
        })?;

        let body = response
            .into_string()
            .map_err(|e| FetchError::new(format!("failed to read body: {e}")))?;
        let racers: Vec<Racer> = serde_json::from_str(&body).map_err(|e| {
            warn!(error = %e, "Leaderboard body did not parse");
            FetchError::new(format!("invalid response body: {e}"))
        })?;

        info!(count = racers.len(), "Fetched leaderboard");
        Ok(racers)
    }
}

impl RacerSource for RacerClient {
    fn fetch(&self) -> Result<Vec<Racer>, FetchError> {
        self.fetch_top_racers()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufRead, BufReader, Write};
    use std::net::TcpListener;
    use std::thread::{self, JoinHandle};

    /// Serve exactly one HTTP response and hand back the request line
    fn serve_once(status: &str, body: &str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut request_line = String::new();
            reader.read_line(&mut request_line).unwrap();
            // Drain headers
            loop {
                let mut line = String::new();
                reader.read_line(&mut line).unwrap();
                if line == "\r\n" || line.is_empty() {
                    break;
                }
            }
            stream.write_all(response.as_bytes()).unwrap();
            stream.flush().unwrap();
            request_line
        });

        (base_url, handle)
    }

    #[test]
    fn test_fetch_parses_leaderboard() {
        let (base_url, server) = serve_once(
            "200 OK",
            r#"[{"id":"1","name":"Ana","country":"ES","points":120}]"#,
        );

        let client = RacerClient::new(base_url, Some(Duration::from_secs(5)));
        let racers = client.fetch_top_racers().unwrap();

        assert_eq!(racers, vec![Racer::new("1", "Ana", "ES", 120)]);
        let request_line = server.join().unwrap();
        assert!(
            request_line.starts_with("GET /api/top-racers "),
            "unexpected request line: {request_line:?}"
        );
    }

    #[test]
    fn test_server_error_is_fetch_error() {
        let (base_url, server) = serve_once("500 Internal Server Error", "oops");

        let client = RacerClient::new(base_url, Some(Duration::from_secs(5)));
        let err = client.fetch_top_racers().unwrap_err();

        assert!(err.reason.contains("500"), "reason was {:?}", err.reason);
        server.join().unwrap();
    }

    #[test]
    fn test_not_found_is_fetch_error() {
        let (base_url, server) = serve_once("404 Not Found", "");

        let client = RacerClient::new(base_url, Some(Duration::from_secs(5)));
        assert!(client.fetch_top_racers().is_err());
        server.join().unwrap();
    }

    #[test]
    fn test_malformed_body_is_fetch_error() {
        let (base_url, server) = serve_once("200 OK", r#"{"racers": []}"#);

        let client = RacerClient::new(base_url, Some(Duration::from_secs(5)));
        let err = client.fetch_top_racers().unwrap_err();

        assert!(err.reason.starts_with("invalid response body"));
        server.join().unwrap();
    }

    #[test]
    fn test_connection_refused_is_fetch_error() {
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };

        let client = RacerClient::new(
            format!("http://127.0.0.1:{port}"),
            Some(Duration::from_secs(5)),
        );
        assert!(client.fetch_top_racers().is_err());
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let client = RacerClient::new("http://example.test/", None);
        assert_eq!(client.base_url(), "http://example.test");
        assert_eq!(client.endpoint(), "http://example.test/api/top-racers");
    }

    #[test]
    fn test_fetch_error_display() {
        let err = FetchError::new("HTTP status 503");
        assert_eq!(err.to_string(), "network error: HTTP status 503");
    }
}
