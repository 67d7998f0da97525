use std::fmt::{Debug, Display, Formatter};

/// Represents the gateway deployments the console can point at.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// Local gateway instance used during development.
    #[default]
    Local,
    /// A custom gateway, addressed by URL.
    Custom { gateway_url: String },
}

impl Environment {
    /// Returns the payments gateway base URL associated with the environment.
    pub fn gateway_url(&self) -> String {
        match self {
            Environment::Local => "http://localhost:4000".to_string(),
            Environment::Custom { gateway_url } => gateway_url.clone(),
        }
    }

    /// Builds an environment from an optional `--gateway-url` override.
    pub fn from_url_override(gateway_url: Option<String>) -> Self {
        match gateway_url {
            Some(gateway_url) => Environment::Custom { gateway_url },
            None => Environment::Local,
        }
    }
}

/// Checks that a user-supplied gateway URL is plausibly an HTTP endpoint.
pub fn is_valid_gateway_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Local => write!(f, "Local"),
            Environment::Custom { .. } => write!(f, "Custom"),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.gateway_url())
    }
}
