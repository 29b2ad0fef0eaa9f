use rocket::form::Form;
use rocket::http::Method;
use rocket::State;
use rocket_dyn_templates::Template;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::render;
use crate::sms77::gateway::HttpTransport;
use crate::sms77::{self, Endpoint, RequestContext, UNKNOWN_ERROR};
use crate::store::Store;

// ── SMS ────────────────────────────────────────────────

#[get("/sms")]
pub fn sms_page(store: Option<&State<Arc<dyn Store>>>) -> Template {
    page(Endpoint::Sms, store.map(|s| &***s), None)
}

#[post("/sms", data = "<form>")]
pub async fn sms_send(
    store: Option<&State<Arc<dyn Store>>>,
    config: &State<AppConfig>,
    form: Form<HashMap<String, String>>,
) -> Template {
    send(Endpoint::Sms, store, config, form.into_inner()).await
}

// ── Voice ──────────────────────────────────────────────

#[get("/voice")]
pub fn voice_page(store: Option<&State<Arc<dyn Store>>>) -> Template {
    page(Endpoint::Voice, store.map(|s| &***s), None)
}

#[post("/voice", data = "<form>")]
pub async fn voice_send(
    store: Option<&State<Arc<dyn Store>>>,
    config: &State<AppConfig>,
    form: Form<HashMap<String, String>>,
) -> Template {
    send(Endpoint::Voice, store, config, form.into_inner()).await
}

// ── Shared ─────────────────────────────────────────────

async fn send(
    endpoint: Endpoint,
    store: Option<&State<Arc<dyn Store>>>,
    config: &State<AppConfig>,
    fields: HashMap<String, String>,
) -> Template {
    let ctx = RequestContext::new(Method::Post, fields);
    let owned: Option<Arc<dyn Store>> = store.map(|s| Arc::clone(s.inner()));
    let gateway_url = config.gateway_url.clone();

    // The gateway client blocks, so it lives and dies on the blocking pool.
    let alert = rocket::tokio::task::spawn_blocking(move || {
        let transport = match HttpTransport::new() {
            Ok(t) => t,
            Err(e) => {
                log::error!("[sms77] {}", e);
                return Some(render::alert(UNKNOWN_ERROR));
            }
        };
        sms77::dispatch(endpoint, &ctx, owned.as_deref(), &transport, &gateway_url)
    })
    .await
    .unwrap_or_else(|e| {
        log::error!("[sms77] Dispatch task failed: {}", e);
        Some(render::alert(UNKNOWN_ERROR))
    });

    page(endpoint, store.map(|s| &***s), alert)
}

fn page(endpoint: Endpoint, store: Option<&dyn Store>, alert: Option<String>) -> Template {
    let title = match endpoint {
        Endpoint::Sms => "SMS",
        Endpoint::Voice => "Voice",
    };

    let context = json!({
        "page_title": title,
        "action": format!("/{}", endpoint.name()),
        "alert": alert.unwrap_or_default(),
        "filters": store.map(render::filters).unwrap_or_default(),
        "to": render::to_input(),
        "text": render::textarea(endpoint.max_length()),
        "submit": render::submit(),
    });

    Template::render("messaging", &context)
}
