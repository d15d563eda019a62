//! Service configuration loaded from environment variables.

/// Settings the checkout flow needs from the environment.
///
/// All fields have defaults suitable for local development; override
/// via environment variables (a `.env` file is honored if present).
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Currency recorded on new payments (default: `USD`).
    pub default_currency: String,
}

impl ServiceConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var             | Default |
    /// |---------------------|---------|
    /// | `CHECKOUT_CURRENCY` | `USD`   |
    pub fn from_env() -> Self {
        // Load .env if present; missing files are fine.
        dotenvy::dotenv().ok();

        let default_currency =
            std::env::var("CHECKOUT_CURRENCY").unwrap_or_else(|_| "USD".into());

        Self { default_currency }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            default_currency: "USD".into(),
        }
    }
}
