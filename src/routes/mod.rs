pub mod messaging;
pub mod settings;

pub fn routes() -> Vec<rocket::Route> {
    routes![
        messaging::sms_page,
        messaging::sms_send,
        messaging::voice_page,
        messaging::voice_send,
        settings::settings_page,
        settings::settings_save,
    ]
}
