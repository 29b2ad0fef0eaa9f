use std::time::Duration;

/// Sends one url-encoded form to the gateway and returns the raw response body.
pub trait Transport {
    fn post(&self, url: &str, api_key: &str, form: &[(String, String)]) -> Result<String, String>;
}

/// Blocking reqwest transport. One client, and so one connection pool, is
/// reused for every call made through it.
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    /// Must not be called from an async worker; the blocking client owns a runtime.
    pub fn new() -> Result<Self, String> {
        let client = reqwest::blocking::Client::builder()
            .timeout(None::<Duration>)
            .build()
            .map_err(|e| format!("HTTP client error: {}", e))?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn post(&self, url: &str, api_key: &str, form: &[(String, String)]) -> Result<String, String> {
        let resp = self
            .client
            .post(url)
            .header("SentWith", "IceHrm")
            .header("X-Api-Key", api_key)
            .form(form)
            .send()
            .map_err(|e| format!("sms77 request failed: {}", e))?;

        let status = resp.status();
        let text = resp.text().map_err(|e| format!("sms77 response unreadable: {}", e))?;
        if !status.is_success() {
            log::warn!("[sms77] Gateway returned {}: {}", status, text);
        }
        Ok(text)
    }
}
