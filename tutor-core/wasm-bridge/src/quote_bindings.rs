use chrono::NaiveDate;
use tutor_core::present::{
    format_colones, format_colones_document, BudgetOptions, FormFields, QuoteBreakdown, RequestSummary,
};
use tutor_core::{ContactInfo, Hours, PricingConfig, PricingEngine, PricingError, Quote, Urgency};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct QuoteEngine {
    inner: PricingEngine,
    contact: ContactInfo,
}

#[wasm_bindgen]
impl QuoteEngine {
    /// Engine over the built-in rate card.
    #[wasm_bindgen(constructor)]
    pub fn new() -> QuoteEngine {
        Self::from_config(&PricingConfig::default())
    }

    /// Engine over a TOML rate card, e.g. one fetched alongside the page.
    #[wasm_bindgen(js_name = fromToml)]
    pub fn from_toml(source: &str) -> Result<QuoteEngine, JsValue> {
        Self::try_from_toml(source).map_err(to_js_error)
    }

    /// Same object shape as the site's original `calculatePrice`.
    #[wasm_bindgen(js_name = calculatePrice)]
    pub fn calculate_price(&self, language: &str, level: &str, hours: JsValue) -> Result<JsValue, JsValue> {
        let quote = self.quote(language, level, HoursArg::from_js(&hours).hours());
        serde_wasm_bindgen::to_value(&quote).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Quote total with the urgency surcharge when `urgency` is `"urgent"`.
    #[wasm_bindgen(js_name = finalPrice)]
    pub fn final_price(&self, language: &str, level: &str, hours: JsValue, urgency: &str) -> f64 {
        self.final_price_for(language, level, HoursArg::from_js(&hours).hours(), urgency)
    }

    /// Plain-text quotation document; `iso_date` is `YYYY-MM-DD` from the caller's clock.
    #[wasm_bindgen(js_name = breakdownText)]
    pub fn breakdown_text(
        &self,
        language: &str,
        level: &str,
        hours: JsValue,
        iso_date: &str,
    ) -> Result<String, JsValue> {
        self.breakdown(language, level, HoursArg::from_js(&hours).hours(), iso_date)
            .map_err(to_js_error)
    }
}

impl QuoteEngine {
    fn from_config(config: &PricingConfig) -> Self {
        Self {
            inner: PricingEngine::from_config(config),
            contact: config.contact.clone(),
        }
    }

    fn try_from_toml(source: &str) -> tutor_core::Result<Self> {
        let config = PricingConfig::from_toml_str(source)?;
        Ok(Self::from_config(&config))
    }

    fn quote(&self, language: &str, level: &str, hours: Hours) -> Quote {
        let quote = self.inner.calculate_price(language, level, hours);
        tracing::debug!(target: "quote", language, level, total = quote.total, "Quote requested from page");
        quote
    }

    fn final_price_for(&self, language: &str, level: &str, hours: Hours, urgency: &str) -> f64 {
        let quote = self.quote(language, level, hours);
        self.inner.final_price(&quote, Urgency::from_form_value(urgency)) as f64
    }

    fn breakdown(&self, language: &str, level: &str, hours: Hours, iso_date: &str) -> tutor_core::Result<String> {
        let date = parse_date(iso_date)?;
        let quote = self.quote(language, level, hours);
        Ok(QuoteBreakdown::from_quote(&quote, &self.contact, date).render_text())
    }
}

impl Default for QuoteEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// `₡43 200` on screen, `CRC 43 200` for documents.
#[wasm_bindgen(js_name = formatMoney)]
pub fn format_money(amount: f64, for_document: bool) -> String {
    if for_document {
        format_colones_document(amount)
    } else {
        format_colones(amount)
    }
}

/// Plain-text tutoring request document from a `{ field: value }` form object.
#[wasm_bindgen(js_name = requestSummaryText)]
pub fn request_summary_text(form: JsValue, iso_date: &str) -> Result<String, JsValue> {
    let form = form_from_js(form)?;
    request_summary(&form, iso_date).map_err(to_js_error)
}

/// Plain-text budget options document from a `{ field: value }` form object.
#[wasm_bindgen(js_name = budgetOptionsText)]
pub fn budget_options_text(form: JsValue, iso_date: &str) -> Result<String, JsValue> {
    let form = form_from_js(form)?;
    budget_options(&form, iso_date).map_err(to_js_error)
}

fn request_summary(form: &FormFields, iso_date: &str) -> tutor_core::Result<String> {
    Ok(RequestSummary::from_form(form, parse_date(iso_date)?).render_text())
}

fn budget_options(form: &FormFields, iso_date: &str) -> tutor_core::Result<String> {
    Ok(BudgetOptions::from_form(form, parse_date(iso_date)?).render_text())
}

fn form_from_js(form: JsValue) -> Result<FormFields, JsValue> {
    serde_wasm_bindgen::from_value(form).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn parse_date(iso_date: &str) -> tutor_core::Result<NaiveDate> {
    NaiveDate::parse_from_str(iso_date, "%Y-%m-%d")
        .map_err(|e| PricingError::InvalidInput(format!("invalid date '{}': {}", iso_date, e)))
}

fn to_js_error(err: PricingError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// The kinds of value a page may pass as hours.
#[derive(Debug, Clone, PartialEq)]
enum HoursArg {
    Number(f64),
    Text(String),
    Other,
}

impl HoursArg {
    fn from_js(value: &JsValue) -> Self {
        if let Some(number) = value.as_f64() {
            HoursArg::Number(number)
        } else if let Some(text) = value.as_string() {
            HoursArg::Text(text)
        } else {
            HoursArg::Other
        }
    }

    /// Numbers pass through, strings are parsed, everything else is one hour.
    fn hours(&self) -> Hours {
        match self {
            HoursArg::Number(number) => Hours::from(*number),
            HoursArg::Text(text) => Hours::from(text.as_str()),
            HoursArg::Other => Hours::ONE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakdown_text() {
        let engine = QuoteEngine::new();
        let text = engine
            .breakdown("javascript", "intermediate", Hours::from(6u32), "2026-10-18")
            .unwrap();
        assert!(text.contains("Fecha: 18 de octubre de 2026"));
        assert!(text.contains("CRC 43 200"));
    }

    #[test]
    fn test_breakdown_rejects_bad_date() {
        let engine = QuoteEngine::new();
        let err = engine
            .breakdown("python", "beginner", Hours::ONE, "18/10/2026")
            .unwrap_err();
        assert!(matches!(err, PricingError::InvalidInput(_)));
        assert!(err.to_string().contains("18/10/2026"));
    }

    #[test]
    fn test_hours_arg_conversion() {
        assert_eq!(HoursArg::Number(6.0).hours().get(), 6.0);
        assert_eq!(HoursArg::Number(f64::NAN).hours(), Hours::ONE);
        assert_eq!(HoursArg::Text("8".to_string()).hours().get(), 8.0);
        assert_eq!(HoursArg::Text("ocho".to_string()).hours(), Hours::ONE);
        assert_eq!(HoursArg::Other.hours(), Hours::ONE);
    }

    #[test]
    fn test_final_price_urgent_and_standard() {
        let engine = QuoteEngine::new();
        let hours = HoursArg::Text("4".to_string()).hours();
        assert_eq!(engine.final_price_for("python", "beginner", hours, "normal"), 22800.0);
        assert_eq!(engine.final_price_for("python", "beginner", hours, "urgent"), 27360.0);
    }

    #[test]
    fn test_from_toml_rejects_invalid_card() {
        let err = QuoteEngine::try_from_toml("[prices.languages]").err().unwrap();
        assert!(matches!(err, PricingError::InvalidConfig(_)));
        assert!(matches!(
            QuoteEngine::try_from_toml("not = [valid"),
            Err(PricingError::Toml(_))
        ));
    }

    #[test]
    fn test_from_toml_custom_card() {
        let engine = QuoteEngine::try_from_toml(
            r#"
[prices.fallback]
language = "rust"
level = "beginner"

[prices.languages.rust]
beginner = 9000
intermediate = 10000
advanced = 12000
description = "Ownership y async"
"#,
        )
        .unwrap();
        let quote = engine.quote("rust", "advanced", Hours::from(3u32));
        assert_eq!(quote.base_price, 12000);
        assert_eq!(quote.total, 36000);
        assert_eq!(engine.quote("go", "advanced", Hours::ONE).base_price, 9000);
    }

    #[test]
    fn test_request_documents() {
        let form: FormFields = [("name", "Ana"), ("message", "Aprender Rust")]
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let request = request_summary(&form, "2026-10-18").unwrap();
        assert!(request.contains("Recibida el: 18/10/2026"));
        assert!(request.contains("OBJETIVOS\nAprender Rust"));

        let budget = budget_options(&form, "2026-10-18").unwrap();
        assert!(budget.starts_with("OPCIONES DE PRESUPUESTO\n"));
        assert!(matches!(
            budget_options(&form, "ayer"),
            Err(PricingError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(43200.0, false), "₡43\u{a0}200");
        assert_eq!(format_money(43200.0, true), "CRC 43 200");
    }
}
