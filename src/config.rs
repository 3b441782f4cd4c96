use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,

    pub openai_model: String,

    /// Chat-completion endpoint. Overridable so tests and proxies can point
    /// the client somewhere else; defaults to the real OpenAI API.
    pub openai_api_url: String,

    /// Project used to address Secret Manager when no env key is present.
    pub google_cloud_project: String,

    /// True when running under the local functions emulator. In that mode the
    /// API key only ever comes from the local environment, never Secret Manager.
    pub functions_emulator: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".into())
                .parse()
                .expect("PORT must be a number"),

            openai_model: env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-3.5-turbo".into()),

            openai_api_url: env::var("OPENAI_API_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1/chat/completions".into()),

            google_cloud_project: env::var("GOOGLE_CLOUD_PROJECT")
                .unwrap_or_else(|_| "diary-darling".into()),

            functions_emulator: env::var("FUNCTIONS_EMULATOR")
                .map(|v| v == "true")
                .unwrap_or(false),
        }
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
