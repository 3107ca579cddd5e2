//! CLI configuration.

use anyhow::{bail, Context, Result};
use pdp_commerce::catalog::Product;
use pdp_commerce::checkout::{ShippingPolicy, STANDARD_RATE_CENTS};
use pdp_commerce::money::{Currency, Money};
use product_page::data::default_product;
use product_page::PageSettings;
use serde::{Deserialize, Serialize};

/// Names searched for when no `--config` is given.
pub const CONFIG_NAMES: [&str; 3] = ["pdp.toml", ".pdp.toml", "pdp.json"];

const NEGATIVE_RATE: &str = "shipping.standard_rate_cents must not be negative";

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Page settings.
    #[serde(default)]
    pub page: PageConfig,

    /// Shipping configuration.
    #[serde(default)]
    pub shipping: ShippingConfig,

    /// Product to show; the built-in catalog is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<Product>,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        Self::parse(path, &content)
    }

    /// Parse config text; `.json` paths are read as JSON, anything else as TOML.
    pub fn parse(path: &str, content: &str) -> Result<Self> {
        if path.ends_with(".json") {
            serde_json::from_str(content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Product the page is mounted with.
    pub fn product(&self) -> Product {
        self.product.clone().unwrap_or_else(default_product)
    }

    /// Page settings, with an optional premium override from the command line.
    pub fn page_settings(&self, premium: Option<bool>) -> Result<PageSettings> {
        Ok(PageSettings {
            premium: premium.unwrap_or(self.page.premium),
            shipping: self.shipping.policy()?,
        })
    }

    /// Every problem with the configuration, empty when valid.
    pub fn problems(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if let Err(e) = Currency::from_code(&self.shipping.currency) {
            problems.push(format!("shipping: {}", e));
        }
        if self.shipping.standard_rate_cents < 0 {
            problems.push(NEGATIVE_RATE.to_string());
        }
        if let Some(product) = &self.product {
            if let Err(e) = product.validate() {
                problems.push(format!("product: {}", e));
            }
        }

        problems
    }
}

/// Page-level settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    /// Whether the customer has a premium membership.
    #[serde(default = "default_true")]
    pub premium: bool,
}

fn default_true() -> bool {
    true
}

impl Default for PageConfig {
    fn default() -> Self {
        Self { premium: true }
    }
}

/// Shipping configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShippingConfig {
    /// Flat rate for non-premium customers, in the currency's smallest unit.
    #[serde(default = "default_rate")]
    pub standard_rate_cents: i64,

    /// Currency code (default: USD).
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_rate() -> i64 {
    STANDARD_RATE_CENTS
}

fn default_currency() -> String {
    "USD".to_string()
}

impl Default for ShippingConfig {
    fn default() -> Self {
        Self {
            standard_rate_cents: default_rate(),
            currency: default_currency(),
        }
    }
}

impl ShippingConfig {
    /// Build the shipping policy.
    pub fn policy(&self) -> Result<ShippingPolicy> {
        if self.standard_rate_cents < 0 {
            bail!(NEGATIVE_RATE);
        }
        let currency = Currency::from_code(&self.currency)?;
        Ok(ShippingPolicy::new(Money::new(self.standard_rate_cents, currency)))
    }
}

/// Generate a default pdp.toml config file.
pub fn generate_default_config() -> String {
    r#"# Product display page configuration

[page]
premium = true

[shipping]
standard_rate_cents = 299
currency = "USD"

[product]
brand = "Vue Mastery"
name = "Boots"
details = ["80% Cotton", "20% Polyester", "Gender-neutral"]
sizes = ["XS", "SM", "MD", "LG", "XL"]

[[product.variants]]
id = 2234
color = "green"
image = "assets/images/green-socks.png"
quantity = 5
on_sale = true

[[product.variants]]
id = 2235
color = "blue"
image = "assets/images/blue-socks.png"
quantity = 10
on_sale = false
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_config_matches_builtin_product() {
        let config = CliConfig::parse("pdp.toml", &generate_default_config()).unwrap();
        assert!(config.page.premium);
        assert_eq!(config.product(), default_product());
        assert!(config.problems().is_empty());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = CliConfig::parse("pdp.toml", "").unwrap();
        let settings = config.page_settings(None).unwrap();
        assert!(settings.premium);
        assert_eq!(settings.shipping.quote(false).to_string(), "$2.99");
        assert_eq!(config.product(), default_product());
    }

    #[test]
    fn test_premium_override() {
        let config = CliConfig::parse("pdp.toml", "[page]\npremium = true\n").unwrap();
        assert!(!config.page_settings(Some(false)).unwrap().premium);
    }

    #[test]
    fn test_json_config() {
        let json = r#"{"shipping": {"standard_rate_cents": 450, "currency": "gbp"}}"#;
        let config = CliConfig::parse("pdp.json", json).unwrap();
        let settings = config.page_settings(Some(false)).unwrap();
        assert_eq!(settings.shipping.quote(false).to_string(), "\u{00a3}4.50");
    }

    #[test]
    fn test_negative_rate_is_rejected() {
        let config =
            CliConfig::parse("pdp.toml", "[shipping]\nstandard_rate_cents = -299\n").unwrap();

        assert_eq!(config.problems(), vec![NEGATIVE_RATE.to_string()]);
        let err = config.page_settings(Some(false)).unwrap_err();
        assert!(err.to_string().contains("must not be negative"));
    }

    #[test]
    fn test_zero_rate_is_accepted() {
        let config = CliConfig::parse("pdp.toml", "[shipping]\nstandard_rate_cents = 0\n").unwrap();
        assert!(config.problems().is_empty());
        let settings = config.page_settings(Some(false)).unwrap();
        assert_eq!(settings.shipping.quote(false).to_string(), "Free");
    }

    #[test]
    fn test_problems_are_reported() {
        let toml = r#"
[shipping]
standard_rate_cents = -5
currency = "XYZ"

[product]
brand = "Vue Mastery"
name = "Socks"
variants = []
"#;
        let config = CliConfig::parse("pdp.toml", toml).unwrap();
        let problems = config.problems();
        assert_eq!(problems.len(), 3);
        assert!(problems[0].contains("Unknown currency: XYZ"));
        assert!(config.page_settings(None).is_err());
    }
}
