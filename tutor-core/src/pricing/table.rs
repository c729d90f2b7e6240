use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;
use std::str::FromStr;

/// Skill level a student books at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Advanced];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Beginner => "beginner",
            Level::Intermediate => "intermediate",
            Level::Advanced => "advanced",
        }
    }
}

impl FromStr for Level {
    type Err = ();

    /// Keys are matched exactly; callers normalise case themselves.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "beginner" => Ok(Level::Beginner),
            "intermediate" => Ok(Level::Intermediate),
            "advanced" => Ok(Level::Advanced),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hourly rates (in colones) for one language, plus the blurb shown on quotes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageRates {
    pub beginner: u32,
    pub intermediate: u32,
    pub advanced: u32,
    pub description: String,
}

impl LanguageRates {
    pub fn new(beginner: u32, intermediate: u32, advanced: u32, description: impl Into<String>) -> Self {
        Self {
            beginner,
            intermediate,
            advanced,
            description: description.into(),
        }
    }

    pub fn rate(&self, level: Level) -> u32 {
        match level {
            Level::Beginner => self.beginner,
            Level::Intermediate => self.intermediate,
            Level::Advanced => self.advanced,
        }
    }
}

/// Which entry is charged when a lookup misses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FallbackRate {
    pub language: String,
    pub level: Level,
}

impl Default for FallbackRate {
    fn default() -> Self {
        Self {
            language: "python".to_string(),
            level: Level::Beginner,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceTable {
    languages: HashMap<String, LanguageRates>,
    #[serde(default)]
    fallback: FallbackRate,
}

impl PriceTable {
    pub fn new(languages: HashMap<String, LanguageRates>, fallback: FallbackRate) -> Self {
        Self { languages, fallback }
    }

    /// The rate card published on the site.
    pub fn builtin() -> Self {
        let mut languages = HashMap::new();

        languages.insert(
            "python".to_string(),
            LanguageRates::new(6000, 7500, 9000, "Lógica, POO, APIs, Django/Flask, Data Science"),
        );
        languages.insert(
            "javascript".to_string(),
            LanguageRates::new(6500, 8000, 9500, "Frontend, Node.js, React, APIs, FullStack"),
        );
        languages.insert(
            "java".to_string(),
            LanguageRates::new(7000, 8500, 10000, "POO, Spring Boot, Android, Enterprise"),
        );
        languages.insert(
            "csharp".to_string(),
            LanguageRates::new(7000, 8500, 10000, ".NET, ASP.NET, Unity, Windows Apps"),
        );
        languages.insert(
            "web".to_string(),
            LanguageRates::new(6000, 7500, 9000, "HTML/CSS, JavaScript, Responsive, UX/UI"),
        );
        languages.insert(
            "sql".to_string(),
            LanguageRates::new(6000, 7500, 9000, "Consultas, JOINS, Procedures, Optimization"),
        );
        languages.insert(
            "logica".to_string(),
            LanguageRates::new(5500, 7000, 8500, "Algoritmos, Estructuras, Resolución Problemas"),
        );
        languages.insert(
            "cpp".to_string(),
            LanguageRates::new(6500, 8000, 9500, "Programación Sistemas, Juegos, Performance"),
        );
        languages.insert(
            "php".to_string(),
            LanguageRates::new(6000, 7500, 9000, "WordPress, Laravel, Backend Web"),
        );
        languages.insert(
            "swift".to_string(),
            LanguageRates::new(7000, 8500, 10000, "iOS, macOS, Apple Ecosystem"),
        );

        Self {
            languages,
            fallback: FallbackRate::default(),
        }
    }

    pub fn get(&self, language: &str) -> Option<&LanguageRates> {
        self.languages.get(language)
    }

    /// Two-step lookup: language first, then level. `None` when either misses.
    pub fn rate(&self, language: &str, level: &str) -> Option<u32> {
        let rates = self.languages.get(language)?;
        let level = level.parse::<Level>().ok()?;
        Some(rates.rate(level))
    }

    pub fn fallback(&self) -> &FallbackRate {
        &self.fallback
    }

    /// Rate charged when `rate` misses. Zero only for a table that failed validation.
    pub fn fallback_rate(&self) -> u32 {
        self.languages
            .get(&self.fallback.language)
            .map(|rates| rates.rate(self.fallback.level))
            .unwrap_or(0)
    }

    /// Description of the requested language, or of the fallback language.
    pub fn description(&self, language: &str) -> &str {
        self.languages
            .get(language)
            .or_else(|| self.languages.get(&self.fallback.language))
            .map(|rates| rates.description.as_str())
            .unwrap_or("")
    }

    /// Language keys in stable (sorted) order.
    pub fn languages(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.languages.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

impl Default for PriceTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Flat promotional discounts. Listed on the site but never applied by the calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatDiscounts {
    pub students: f64,
    pub referrals: f64,
    pub group: f64,
}

impl Default for FlatDiscounts {
    fn default() -> Self {
        Self {
            students: 0.15,
            referrals: 0.10,
            group: 0.25,
        }
    }
}

/// One package tier as written in config files.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PackageTier {
    pub hours: u32,
    pub rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DiscountTableRepr", into = "DiscountTableRepr")]
pub struct DiscountTable {
    packages: BTreeMap<u32, f64>,
    flat: FlatDiscounts,
}

impl DiscountTable {
    pub fn new(tiers: impl IntoIterator<Item = PackageTier>, flat: FlatDiscounts) -> Self {
        Self {
            packages: tiers.into_iter().map(|t| (t.hours, t.rate)).collect(),
            flat,
        }
    }

    pub fn builtin() -> Self {
        let tiers = [(4, 0.05), (6, 0.10), (8, 0.15), (10, 0.20), (12, 0.25)]
            .into_iter()
            .map(|(hours, rate)| PackageTier { hours, rate });
        Self::new(tiers, FlatDiscounts::default())
    }

    /// Package discount for exactly `hours`. Fractional or unlisted counts get nothing.
    pub fn package_rate(&self, hours: f64) -> Option<f64> {
        if hours.fract() != 0.0 || hours < 0.0 || hours > f64::from(u32::MAX) {
            return None;
        }
        self.packages.get(&(hours as u32)).copied()
    }

    pub fn tiers(&self) -> impl Iterator<Item = PackageTier> + '_ {
        self.packages
            .iter()
            .map(|(&hours, &rate)| PackageTier { hours, rate })
    }

    pub fn flat(&self) -> &FlatDiscounts {
        &self.flat
    }
}

impl Default for DiscountTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[derive(Serialize, Deserialize)]
struct DiscountTableRepr {
    #[serde(default)]
    packages: Vec<PackageTier>,
    #[serde(default)]
    flat: FlatDiscounts,
}

impl TryFrom<DiscountTableRepr> for DiscountTable {
    type Error = String;

    fn try_from(repr: DiscountTableRepr) -> Result<Self, Self::Error> {
        let mut seen = BTreeSet::new();
        for tier in &repr.packages {
            if !seen.insert(tier.hours) {
                return Err(format!("duplicate package tier for {} hours", tier.hours));
            }
        }
        Ok(DiscountTable::new(repr.packages, repr.flat))
    }
}

impl From<DiscountTable> for DiscountTableRepr {
    fn from(table: DiscountTable) -> Self {
        let packages = table.tiers().collect();
        DiscountTableRepr {
            packages,
            flat: table.flat,
        }
    }
}
