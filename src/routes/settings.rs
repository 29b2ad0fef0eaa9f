use rocket::form::Form;
use rocket::request::FlashMessage;
use rocket::response::{Flash, Redirect};
use rocket::State;
use rocket_dyn_templates::Template;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;

use crate::store::Store;

// ── Settings ───────────────────────────────────────────

#[get("/settings")]
pub fn settings_page(
    store: &State<Arc<dyn Store>>,
    flash: Option<FlashMessage<'_>>,
) -> Template {
    let mut context = json!({
        "page_title": "Settings",
        "settings": store.setting_list(),
    });

    if let Some(ref f) = flash {
        context["flash_kind"] = json!(f.kind());
        context["flash_msg"] = json!(f.message());
    }

    Template::render("settings", &context)
}

// ── POST: Settings Save ────────────────────────────────

/// Only settings already registered by the extension are written; unknown
/// form keys are ignored.
#[post("/settings", data = "<form>")]
pub fn settings_save(
    store: &State<Arc<dyn Store>>,
    form: Form<HashMap<String, String>>,
) -> Flash<Redirect> {
    let data = form.into_inner();

    let mut errors: Vec<String> = Vec::new();
    for setting in store.setting_list() {
        if let Some(value) = data.get(&setting.name) {
            if let Err(e) = store.setting_set(&setting.name, value.trim()) {
                log::error!("Failed to save setting {}: {}", setting.name, e);
                errors.push(setting.name.clone());
            }
        }
    }

    if errors.is_empty() {
        Flash::success(Redirect::to("/settings"), "Settings saved")
    } else {
        Flash::error(
            Redirect::to("/settings"),
            format!("Could not save: {}", errors.join(", ")),
        )
    }
}
