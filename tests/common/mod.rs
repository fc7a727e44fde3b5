#![allow(dead_code)]

use std::collections::HashMap;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use wiremock::Request;

pub const TEST_TOKEN: &str = "TEST";
pub const TEST_CHAT_ID: &str = "42";

pub fn send_message_path() -> String {
    format!("/bot{}/sendMessage", TEST_TOKEN)
}

pub fn send_document_path() -> String {
    format!("/bot{}/sendDocument", TEST_TOKEN)
}

/// Environment lookup pointing the client at the mock server
pub fn lookup_for(base: &str) -> impl Fn(&str) -> Option<String> + use<> {
    let mut vars = HashMap::new();
    vars.insert("BOT_TOKEN".to_string(), TEST_TOKEN.to_string());
    vars.insert("CHAT_ID".to_string(), TEST_CHAT_ID.to_string());
    vars.insert("TELEGRAM_API_BASE_URL".to_string(), base.to_string());
    move |key| vars.get(key).cloned()
}

pub async fn mount_send_message(server: &MockServer, status: u16, body: &str) {
    Mock::given(method("POST"))
        .and(path(send_message_path()))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server)
        .await;
}

pub async fn mount_send_document(server: &MockServer, status: u16, body: &str) {
    Mock::given(method("POST"))
        .and(path(send_document_path()))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server)
        .await;
}

pub async fn requests_to(server: &MockServer, method_path: &str) -> Vec<Request> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .into_iter()
        .filter(|req| req.url.path() == method_path)
        .collect()
}

/// Decodes an `application/x-www-form-urlencoded` body into a map
pub fn form_fields(body: &[u8]) -> HashMap<String, String> {
    url::form_urlencoded::parse(body).into_owned().collect()
}

/// Header value as text, empty when absent
pub fn header_value(req: &Request, name: &str) -> String {
    req.headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}
