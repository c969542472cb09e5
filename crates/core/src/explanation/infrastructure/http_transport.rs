/// Status and raw body of an HTTP response.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

/// Minimal HTTP seam for JSON POST requests.
pub trait HttpTransport: Send {
    fn post_json(&self, url: &str, body: Vec<u8>) -> Result<HttpReply, TransportError>;
}

/// Blocking `reqwest` transport with the client's default timeouts.
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::with_client(reqwest::blocking::Client::new())
    }

    pub fn with_client(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport for ReqwestTransport {
    fn post_json(&self, url: &str, body: Vec<u8>) -> Result<HttpReply, TransportError> {
        // Request URLs carry the API key; keep them out of error messages.
        let response = self
            .client
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .map_err(|e| e.without_url())?;
        let status = response.status().as_u16();
        let body = response.text().map_err(|e| e.without_url())?;
        Ok(HttpReply { status, body })
    }
}


#[cfg(test)]
mod tests {
    use super::local_server::serve_once;
    use super::*;

    fn direct_transport() -> ReqwestTransport {
        let client = reqwest::blocking::Client::builder()
            .no_proxy()
            .build()
            .unwrap();
        ReqwestTransport::with_client(client)
    }

    #[test]
    fn test_posts_json_with_content_type() {
        let (base, server) = serve_once(200, "{}");
        let payload = br#"{"contents":[{"parts":[{"text":"hi"}]}]}"#.to_vec();

        direct_transport()
            .post_json(&format!("{base}/v1/generate?key=k"), payload.clone())
            .unwrap();

        let request = server.join().unwrap();
        assert_eq!(request.request_line, "POST /v1/generate?key=k HTTP/1.1");
        assert_eq!(request.header("content-type"), Some("application/json"));
        assert_eq!(request.body, payload);
    }

    #[test]
    fn test_error_status_and_body_are_returned_verbatim() {
        let (base, server) = serve_once(503, "backend overloaded");

        let reply = direct_transport()
            .post_json(&format!("{base}/v1/generate"), b"{}".to_vec())
            .unwrap();
        server.join().unwrap();

        assert_eq!(
            reply,
            HttpReply {
                status: 503,
                body: "backend overloaded".into()
            }
        );
    }

    #[test]
    fn test_unreachable_host_is_transport_error_without_url() {
        let transport = ReqwestTransport::new();
        let err = transport
            .post_json(
                "http://invalid.nonexistent.example.com/v1?key=secret",
                b"{}".to_vec(),
            )
            .unwrap_err();
        assert!(!err.to_string().contains("secret"));
    }
}
