use crate::error::{PricingError, Result};
use crate::pricing::calculator::DEFAULT_URGENCY_SURCHARGE;
use crate::pricing::{DiscountTable, PriceTable};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable naming a TOML pricing file.
pub const CONFIG_ENV_VAR: &str = "TUTOR_PRICING_CONFIG";

/// Who the quote documents and booking messages point students to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    pub tutor_name: String,
    pub headline: String,
    pub whatsapp: String,
    pub email: String,
    pub website: String,
}

impl Default for ContactInfo {
    fn default() -> Self {
        Self {
            tutor_name: "Jordy Retana".to_string(),
            headline: "Tutor de Programacion".to_string(),
            whatsapp: "8713-8971".to_string(),
            email: "jretanemendez@gmail.com".to_string(),
            website: "tutoriasjr.com".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    pub urgency_surcharge: f64,
    pub prices: PriceTable,
    pub discounts: DiscountTable,
    pub contact: ContactInfo,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            urgency_surcharge: DEFAULT_URGENCY_SURCHARGE,
            prices: PriceTable::builtin(),
            discounts: DiscountTable::builtin(),
            contact: ContactInfo::default(),
        }
    }
}

impl PricingConfig {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: PricingConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        info!(
            path = %path.display(),
            languages = config.prices.len(),
            tiers = config.discounts.tiers().count(),
            "Loaded pricing config"
        );
        Ok(config)
    }

    /// Explicit path, then `TUTOR_PRICING_CONFIG`, then the built-in rate card.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }

        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(value) if !value.is_empty() => Self::from_file(&PathBuf::from(value)),
            _ => {
                debug!("No pricing config given, using built-in rate card");
                Ok(Self::default())
            }
        }
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| PricingError::InvalidConfig(format!("cannot serialize config: {}", e)))
    }

    pub fn validate(&self) -> Result<()> {
        if self.prices.is_empty() {
            return Err(invalid("price table has no languages"));
        }

        let fallback = self.prices.fallback();
        if self.prices.get(&fallback.language).is_none() {
            return Err(invalid(format!(
                "fallback language '{}' is not in the price table",
                fallback.language
            )));
        }

        for tier in self.discounts.tiers() {
            if tier.hours < 1 {
                return Err(invalid("package tiers must cover at least one hour"));
            }
            check_fraction(&format!("package discount for {} hours", tier.hours), tier.rate)?;
        }

        let flat = self.discounts.flat();
        check_fraction("student discount", flat.students)?;
        check_fraction("referral discount", flat.referrals)?;
        check_fraction("group discount", flat.group)?;

        if !self.urgency_surcharge.is_finite() || self.urgency_surcharge < 0.0 {
            return Err(invalid(format!(
                "urgency surcharge must be a non-negative number, got {}",
                self.urgency_surcharge
            )));
        }

        Ok(())
    }
}

fn check_fraction(what: &str, value: f64) -> Result<()> {
    if !(0.0..1.0).contains(&value) {
        return Err(invalid(format!("{} must be in [0, 1), got {}", what, value)));
    }
    Ok(())
}

fn invalid(msg: impl Into<String>) -> PricingError {
    PricingError::InvalidConfig(msg.into())
}
