//! Blocking HTTP client for the generation endpoint

use std::time::Duration;

use tracing::debug;

use offer_types::{Error, Result};

use crate::payload::GenerateRequest;

/// Client for `POST {backend_url}/generate`.
///
/// Success is decided solely by the HTTP status; the response body is the
/// generated document and is returned as raw bytes. No retries.
pub struct RemoteClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl RemoteClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Http(e.to_string()))?;
        Ok(Self {
            base_url: base_url.into(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Request document generation and return the response body bytes
    pub fn generate(&self, request: &GenerateRequest) -> Result<Vec<u8>> {
        let url = format!("{}/generate", self.base_url.trim_end_matches('/'));
        debug!(url = %url, format = %request.format, codes = request.all_codes.len(), "requesting document generation");

        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .map_err(|e| Error::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Backend {
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().map_err(|e| Error::Http(e.to_string()))?;
        debug!(len = bytes.len(), "received generated document");
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    fn request() -> GenerateRequest {
        GenerateRequest {
            date: "2026-03-01".to_string(),
            model: "G05".to_string(),
            color: "A96".to_string(),
            interior: "MAH1".to_string(),
            priced_lines: vec![],
            all_codes: vec!["G05".to_string()],
            format: "excel".to_string(),
        }
    }

    /// Serve exactly one canned HTTP response on an OS-assigned port
    fn one_shot_server(status_line: &'static str, body: &'static [u8]) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                // Drain the request headers before responding
                let mut buf = [0u8; 4096];
                let _ = stream.read(&mut buf);
                let response = format!(
                    "{}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                    status_line,
                    body.len()
                );
                let _ = stream.write_all(response.as_bytes());
                let _ = stream.write_all(body);
            }
        });
        format!("http://{}", addr)
    }

    #[test]
    fn connection_failure_surfaces_http_error() {
        // Bind then drop to get a port with nothing listening
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client =
            RemoteClient::new(format!("http://{}", addr), Duration::from_secs(2)).unwrap();
        let err = client.generate(&request()).unwrap_err();
        assert!(matches!(err, Error::Http(_)));
    }

    #[test]
    fn non_success_status_surfaces_backend_error() {
        let base = one_shot_server("HTTP/1.1 400 Bad Request", b"unknown format");
        let client = RemoteClient::new(base, Duration::from_secs(5)).unwrap();
        let err = client.generate(&request()).unwrap_err();
        assert!(matches!(err, Error::Backend { status: 400 }));
    }

    #[test]
    fn success_returns_body_bytes() {
        let base = one_shot_server("HTTP/1.1 200 OK", b"PK\x03\x04fake-xlsx");
        let client = RemoteClient::new(base, Duration::from_secs(5)).unwrap();
        let bytes = client.generate(&request()).unwrap();
        assert_eq!(bytes, b"PK\x03\x04fake-xlsx");
    }

    #[test]
    fn trailing_slash_in_base_url_is_tolerated() {
        let base = one_shot_server("HTTP/1.1 200 OK", b"ok");
        let client = RemoteClient::new(format!("{}/", base), Duration::from_secs(5)).unwrap();
        assert!(client.generate(&request()).is_ok());
    }
}
