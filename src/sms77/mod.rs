pub mod gateway;
pub mod recipients;

use std::collections::BTreeMap;

use rocket::http::Method;
use serde_json::Value;

use crate::models::settings::{API_KEY_DESCRIPTION, API_KEY_SETTING};
use crate::render;
use crate::store::Store;

use gateway::Transport;

pub const UNKNOWN_ERROR: &str = "Unknown error. Please try again!";
pub const MISSING_API_KEY: &str = "API Key is missing!";
pub const NO_RECIPIENTS: &str = "No recipient(s) found!";

/// Maximum text length the gateway accepts per endpoint.
pub const SMS_MAX_LENGTH: u32 = 1520;
pub const VOICE_MAX_LENGTH: u32 = 10000;

// ── Endpoint ──────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Sms,
    Voice,
}

impl Endpoint {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sms => "sms",
            Self::Voice => "voice",
        }
    }

    /// SMS accepts a comma-separated recipient list in a single call; voice
    /// dials one number per call.
    pub fn multiple_recipients(&self) -> bool {
        matches!(self, Self::Sms)
    }

    pub fn max_length(&self) -> u32 {
        match self {
            Self::Sms => SMS_MAX_LENGTH,
            Self::Voice => VOICE_MAX_LENGTH,
        }
    }

    pub fn url(&self, gateway_url: &str) -> String {
        format!("{}/api/{}", gateway_url.trim_end_matches('/'), self.name())
    }
}

// ── Request context ───────────────────────────────────

/// The parts of an inbound form submission the dispatcher looks at.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub method: Method,
    pub fields: BTreeMap<String, String>,
}

impl RequestContext {
    pub fn new(method: Method, fields: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            method,
            fields: fields.into_iter().collect(),
        }
    }

    pub fn is_post(&self) -> bool {
        self.method == Method::Post
    }
}

// ── Settings ──────────────────────────────────────────

pub fn add_setting(store: &dyn Store, name: &str, description: &str, value: &str) -> bool {
    store.setting_add(name, description, value)
}

/// Registers the extension's settings. Existing values are left alone.
pub fn install(store: &dyn Store) -> Result<(), String> {
    let registered = store.setting_list();
    if registered.iter().any(|s| s.name == API_KEY_SETTING) {
        return Ok(());
    }
    if !add_setting(store, API_KEY_SETTING, API_KEY_DESCRIPTION, "") {
        return Err(format!("Failed to register setting {}", API_KEY_SETTING));
    }
    log::info!("[sms77] Registered setting {}", API_KEY_SETTING);
    Ok(())
}

pub fn api_key(store: &dyn Store) -> String {
    store.setting_get(API_KEY_SETTING)
}

// ── Dispatch ──────────────────────────────────────────

/// Send through the page's endpoint: SMS or voice.
pub fn dispatch(
    endpoint: Endpoint,
    ctx: &RequestContext,
    store: Option<&dyn Store>,
    transport: &dyn Transport,
    gateway_url: &str,
) -> Option<String> {
    match endpoint {
        Endpoint::Sms => sms(ctx, store, transport, gateway_url),
        Endpoint::Voice => voice(ctx, store, transport, gateway_url),
    }
}

/// Send the submitted text as SMS. Returns the alert to show, `None` if the
/// request was not a form submission.
pub fn sms(
    ctx: &RequestContext,
    store: Option<&dyn Store>,
    transport: &dyn Transport,
    gateway_url: &str,
) -> Option<String> {
    let endpoint = Endpoint::Sms;
    request(endpoint, endpoint.multiple_recipients(), ctx, store, transport, gateway_url)
        .map(|m| render::alert(&m))
}

/// Send the submitted text as voice calls, one per recipient.
pub fn voice(
    ctx: &RequestContext,
    store: Option<&dyn Store>,
    transport: &dyn Transport,
    gateway_url: &str,
) -> Option<String> {
    let endpoint = Endpoint::Voice;
    request(endpoint, endpoint.multiple_recipients(), ctx, store, transport, gateway_url)
        .map(|m| render::alert(&m))
}

/// Resolve recipients and call the gateway once per recipient group.
/// Returns the alert message: a precondition failure, or the pretty-printed
/// body of the last gateway response.
pub fn request(
    endpoint: Endpoint,
    multiple_recipients: bool,
    ctx: &RequestContext,
    store: Option<&dyn Store>,
    transport: &dyn Transport,
    gateway_url: &str,
) -> Option<String> {
    if !ctx.is_post() {
        return None;
    }

    let store = match store {
        Some(s) => s,
        None => {
            log::error!("[sms77] No store available for {} request", endpoint.name());
            return Some(UNKNOWN_ERROR.to_string());
        }
    };

    let api_key = api_key(store);
    if api_key.is_empty() {
        return Some(MISSING_API_KEY.to_string());
    }

    let recipients = recipients::resolve(&ctx.fields, store);
    if recipients.is_empty() {
        return Some(NO_RECIPIENTS.to_string());
    }
    let recipients = if multiple_recipients {
        vec![recipients.join(",")]
    } else {
        recipients
    };

    let base = outgoing_fields(&ctx.fields);
    let url = endpoint.url(gateway_url);

    let mut body = String::new();
    for to in &recipients {
        let mut form = base.clone();
        form.push(("json".to_string(), "1".to_string()));
        form.push(("to".to_string(), to.clone()));

        body = match transport.post(&url, &api_key, &form) {
            Ok(text) => text,
            Err(e) => {
                log::warn!("[sms77] {} to {} failed: {}", endpoint.name(), to, e);
                String::new()
            }
        };
        log::debug!("[sms77] {} to {} -> {}", endpoint.name(), to, body);
    }

    log::info!(
        "[sms77] Sent {} via {} call(s)",
        endpoint.name(),
        recipients.len()
    );

    Some(pretty_json(&body))
}

/// Submitted fields minus the filters and `to`, which are replaced per call.
fn outgoing_fields(fields: &BTreeMap<String, String>) -> Vec<(String, String)> {
    fields
        .iter()
        .filter(|(k, _)| {
            k.as_str() != "to" && !recipients::filter_fields().any(|f| f == k.as_str())
        })
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

/// Re-indent a JSON body for display. Anything that is not JSON is shown as-is.
fn pretty_json(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(v) => serde_json::to_string_pretty(&v).unwrap_or_else(|_| body.to_string()),
        Err(_) => body.to_string(),
    }
}
