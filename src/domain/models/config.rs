/// Default upstream for the Gemini `generateContent` REST API.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
/// Default model, matching the one the site shipped with.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Secret token authorizing calls to the hosted model.
///
/// Opaque on purpose: `Debug` redacts the value so the key never lands in
/// logs or error messages.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(****)")
    }
}

/// Configuration for the upstream exchange, resolved once at construction
/// time and passed in explicitly — never read lazily from global state.
///
/// A missing credential is an explicit `None`, so the "unconfigured" branch
/// is visible in the type rather than hidden behind an empty-string check.
#[derive(Debug, Clone)]
pub struct ChatConfig {
    api_key: Option<ApiKey>,
    model: String,
    base_url: String,
}

impl ChatConfig {
    pub fn new(api_key: Option<ApiKey>) -> Self {
        Self {
            api_key,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Read configuration from the environment:
    ///
    /// | Variable          | Default                                        |
    /// |-------------------|------------------------------------------------|
    /// | `GEMINI_API_KEY`  | unset → unconfigured (`API_KEY` also accepted) |
    /// | `GEMINI_MODEL`    | `gemini-2.5-flash`                             |
    /// | `GEMINI_BASE_URL` | `https://generativelanguage.googleapis.com`    |
    pub fn from_env() -> Self {
        let key = std::env::var("GEMINI_API_KEY")
            .or_else(|_| std::env::var("API_KEY"))
            .ok()
            .filter(|k| !k.is_empty())
            .map(ApiKey::new);

        let mut config = Self::new(key);
        if let Ok(model) = std::env::var("GEMINI_MODEL") {
            config.model = model;
        }
        if let Ok(base) = std::env::var("GEMINI_BASE_URL") {
            config.base_url = base;
        }
        config
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn api_key(&self) -> Option<&ApiKey> {
        self.api_key.as_ref()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}
