//! HTTP retrieval of report sources.
//!
//! A deliberately small HTTP/1.0 client over [`TcpStream`]: one GET per
//! source, `Connection: close`, read to end, split headers from body. The
//! report files are plain text served over plain HTTP, so this avoids
//! pulling a full client stack into the engine.

use std::io::{Read, Write};
use std::net::TcpStream;
use std::time::Duration;

use crate::config::ReportSource;
use crate::error::{EngineError, EngineResult};

use super::ReportFetcher;

/// Default read/write timeout per request.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Fetches report text with a plain HTTP/1.0 GET.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    timeout: Duration,
}

impl HttpFetcher {
    /// Creates a fetcher with the default 15 second timeout.
    pub fn new() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Creates a fetcher with a custom per-request timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }

    fn get(&self, url: &str) -> Result<String, String> {
        let (host, port, path) = parse_url(url)?;

        let mut stream =
            TcpStream::connect((host.as_str(), port)).map_err(|e| e.to_string())?;
        stream
            .set_read_timeout(Some(self.timeout))
            .map_err(|e| e.to_string())?;
        stream
            .set_write_timeout(Some(self.timeout))
            .map_err(|e| e.to_string())?;

        let request = format!(
            "GET {} HTTP/1.0\r\nHost: {}\r\nUser-Agent: leave-engine/0.1\r\nConnection: close\r\n\r\n",
            path, host
        );
        stream.write_all(request.as_bytes()).map_err(|e| e.to_string())?;
        stream.flush().map_err(|e| e.to_string())?;

        let mut buf = Vec::new();
        stream.read_to_end(&mut buf).map_err(|e| e.to_string())?;
        let response = String::from_utf8_lossy(&buf);

        let status_line = response.split("\r\n").next().unwrap_or("");
        let status_code = status_line.split_whitespace().nth(1).unwrap_or("");
        if status_code != "200" {
            return Err(format!("HTTP error: {}", status_line));
        }

        let body_start = response
            .find("\r\n\r\n")
            .ok_or_else(|| "malformed HTTP response".to_string())?
            + 4;
        Ok(response[body_start..].to_string())
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFetcher for HttpFetcher {
    fn fetch(&self, source: &ReportSource) -> EngineResult<String> {
        self.get(&source.url).map_err(|message| EngineError::SourceFetch {
            source_id: source.id.clone(),
            message,
        })
    }
}

/// Splits an `http://host[:port]/path` URL into its connection parts.
///
/// Only plain `http` is supported; the path defaults to `/`.
fn parse_url(url: &str) -> Result<(String, u16, String), String> {
    let rest = url
        .strip_prefix("http://")
        .ok_or_else(|| format!("unsupported URL scheme: {}", url))?;

    let (authority, path) = match rest.find('/') {
        Some(idx) => (&rest[..idx], rest[idx..].to_string()),
        None => (rest, "/".to_string()),
    };

    if authority.is_empty() {
        return Err(format!("missing host in URL: {}", url));
    }

    let (host, port) = match authority.rsplit_once(':') {
        Some((host, port)) => {
            let port: u16 = port
                .parse()
                .map_err(|_| format!("invalid port in URL: {}", url))?;
            (host.to_string(), port)
        }
        None => (authority.to_string(), 80),
    };

    Ok((host, port, path))
}
