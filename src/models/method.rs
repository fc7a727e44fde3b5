use strum::{AsRefStr, EnumString, IntoStaticStr};

/// Bot API methods this tool calls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, IntoStaticStr, AsRefStr)]
#[strum(serialize_all = "camelCase")]
pub enum ApiMethod {
    /// Plain text message (form-encoded)
    SendMessage,
    /// File upload (multipart, field `document`)
    SendDocument,
}

impl ApiMethod {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    /// Full method URL: `<base>/bot<token>/<method>`.
    pub fn url(&self, base_url: &str, token: &str) -> String {
        format!("{}/bot{}/{}", base_url.trim_end_matches('/'), token, self.as_str())
    }

    /// Same path with the token masked, for logs.
    pub fn redacted_url(&self, base_url: &str) -> String {
        self.url(base_url, "***")
    }
}

impl std::fmt::Display for ApiMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
