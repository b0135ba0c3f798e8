use gloo_net::http::{Request, Response};
use gloo_net::Error as GlooError;
use serde::Serialize;

/// Thin wrapper over `gloo_net` for the JSON calls the page makes.
pub struct Api;

pub struct RequestWrapper {
    request: Request,
    url: String,
}

impl RequestWrapper {
    fn new(url: &str, method: &str) -> Self {
        let request = match method {
            "POST" => Request::post(url),
            _ => Request::get(url),
        };
        Self {
            request,
            url: url.to_string(),
        }
    }

    /// Set the request body as JSON
    pub fn json<T: Serialize>(mut self, data: &T) -> Result<Self, serde_json::Error> {
        let body = serde_json::to_string(data)?;
        self.request = self
            .request
            .header("Content-Type", "application/json")
            .body(body);
        Ok(self)
    }

    /// Sends once. No retry, no timeout beyond the browser's own.
    pub async fn send(self) -> Result<Response, GlooError> {
        log::debug!("Sending request to {}", self.url);
        self.request.send().await
    }
}

impl Api {
    pub fn post(url: &str) -> RequestWrapper {
        RequestWrapper::new(url, "POST")
    }
}
