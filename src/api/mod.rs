pub mod error;

pub use error::SubmissionError;

use crate::config::Environment;
use crate::types::ContactForm;

/// Endpoint groups exposed by the portfolio API
#[derive(Debug, Clone)]
pub struct Api {
    pub contact: ContactClient,
}

impl Api {
    pub fn new(env: &Environment) -> Self {
        Self {
            contact: ContactClient::new(env),
        }
    }
}

/// Posts contact form payloads to `{api_url}/contact`
#[derive(Debug, Clone)]
pub struct ContactClient {
    http: reqwest::Client,
    endpoint: String,
}

impl ContactClient {
    pub fn new(env: &Environment) -> Self {
        Self::with_base_url(&env.api_url)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: format!("{}/contact", base_url.trim_end_matches('/')),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Single best-effort POST. No retry; failures are logged and returned.
    pub async fn submit(&self, form: &ContactForm) -> Result<bool, SubmissionError> {
        match self.send(form).await {
            Ok(()) => {
                tracing::debug!("Contact form delivered to {}", self.endpoint);
                Ok(true)
            }
            Err(e) => {
                tracing::error!("API error: {} (endpoint: {})", e, self.endpoint);
                Err(e)
            }
        }
    }

    async fn send(&self, form: &ContactForm) -> Result<(), SubmissionError> {
        let response = self.http.post(&self.endpoint).json(form).send().await?;

        let status = response.status();
        if status.is_success() || status.is_redirection() {
            Ok(())
        } else {
            Err(SubmissionError::rejected(status))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// Collects formatted log output for the current thread
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLogs {
        /// Route events on this thread here until the guard drops.
        /// `#[tokio::test]` runs on a current-thread runtime, so the awaited request stays covered.
        fn install(&self) -> tracing::subscriber::DefaultGuard {
            let writer = self.clone();
            let subscriber = tracing_subscriber::fmt()
                .with_writer(move || writer.clone())
                .with_ansi(false)
                .with_max_level(tracing::Level::ERROR)
                .finish();
            tracing::subscriber::set_default(subscriber)
        }

        fn error_lines(&self) -> Vec<String> {
            let bytes = self.0.lock().unwrap().clone();
            String::from_utf8_lossy(&bytes)
                .lines()
                .filter(|line| line.contains("ERROR"))
                .map(str::to_string)
                .collect()
        }
    }

    fn form() -> ContactForm {
        ContactForm {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            details: "Need an app".to_string(),
        }
    }

    #[test]
    fn test_endpoint_join() {
        assert_eq!(
            ContactClient::with_base_url("https://api.example/portfolio/").endpoint(),
            "https://api.example/portfolio/contact"
        );

        let env = Environment {
            production: false,
            api_url: "https://api.example".to_string(),
            recaptcha_key: String::new(),
        };
        assert_eq!(Api::new(&env).contact.endpoint(), "https://api.example/contact");
    }

    #[tokio::test]
    async fn test_submit_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/contact"))
            .and(header("content-type", "application/json"))
            .and(body_json(serde_json::json!({
                "name": "Ada Lovelace",
                "email": "ada@example.com",
                "details": "Need an app"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .expect(1)
            .mount(&server)
            .await;

        let client = ContactClient::with_base_url(&server.uri());
        assert!(client.submit(&form()).await.unwrap());
    }

    #[tokio::test]
    async fn test_submit_rejected_is_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/contact"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let logs = CapturedLogs::default();
        let _guard = logs.install();

        let client = ContactClient::with_base_url(&server.uri());
        let err = client.submit(&form()).await.unwrap_err();
        assert_eq!(err.status, Some(reqwest::StatusCode::INTERNAL_SERVER_ERROR));
        assert!(err.source.is_none());

        let errors = logs.error_lines();
        assert_eq!(errors.len(), 1, "expected one error event, got {errors:?}");
        assert!(errors[0].contains(client.endpoint()));
        assert!(errors[0].contains("500"));
    }

    #[tokio::test]
    async fn test_submit_redirect_status_is_success() {
        let server = MockServer::start().await;
        // No Location header, so the client can't follow it
        Mock::given(method("POST"))
            .and(path("/contact"))
            .respond_with(ResponseTemplate::new(302))
            .expect(1)
            .mount(&server)
            .await;

        let client = ContactClient::with_base_url(&server.uri());
        assert!(client.submit(&form()).await.unwrap());
    }

    #[tokio::test]
    async fn test_submit_no_content_is_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/contact"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = ContactClient::with_base_url(&server.uri());
        assert!(client.submit(&form()).await.unwrap());
    }

    #[tokio::test]
    async fn test_submit_client_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&server)
            .await;

        let client = ContactClient::with_base_url(&server.uri());
        assert!(client.submit(&form()).await.is_err());
    }

    #[tokio::test]
    async fn test_submit_unreachable() {
        // Grab a free port, then close it so nothing is listening
        let addr = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap()
        };

        let logs = CapturedLogs::default();
        let _guard = logs.install();

        let client = ContactClient::with_base_url(&format!("http://{addr}"));
        let err = client.submit(&form()).await.unwrap_err();
        assert!(err.status.is_none());
        assert!(err.source.is_some());

        let errors = logs.error_lines();
        assert_eq!(errors.len(), 1, "expected one error event, got {errors:?}");
        assert!(errors[0].contains(client.endpoint()));
    }
}
