use super::money::format_colones_document;
use super::names::{language_name, level_name, month_name};
use super::text::safe_text;
use crate::config::ContactInfo;
use crate::pricing::{DiscountKind, Quote};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

const TEXT_WIDTH: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    BasePrice,
    Subtotal,
    Discount,
    NoDiscount,
    Total,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceLine {
    pub kind: LineKind,
    pub label: String,
    pub amount: String,
}

impl PriceLine {
    fn new(kind: LineKind, label: impl AsRef<str>, amount: impl AsRef<str>) -> Self {
        Self {
            kind,
            label: safe_text(label.as_ref()),
            amount: safe_text(amount.as_ref()),
        }
    }
}

/// Content of a quotation document, in reading order. Layout is left to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteBreakdown {
    pub title: String,
    pub date: String,
    pub details: Vec<String>,
    pub lines: Vec<PriceLine>,
    pub total: PriceLine,
    pub per_hour: String,
    pub contact: Vec<String>,
    pub notes: Vec<String>,
}

impl QuoteBreakdown {
    pub fn from_quote(quote: &Quote, contact: &ContactInfo, date: NaiveDate) -> Self {
        let details = vec![
            format!("Lenguaje: {}", language_name(&quote.language)),
            format!("Nivel: {}", level_name(&quote.level)),
            format!("Horas de tutoria: {}", quote.hours),
            format!("Descripcion: {}", quote.description),
        ];

        let mut lines = vec![
            PriceLine::new(
                LineKind::BasePrice,
                "Precio base por hora:",
                format_colones_document(f64::from(quote.base_price)),
            ),
            PriceLine::new(
                LineKind::Subtotal,
                format!("Subtotal ({} horas):", quote.hours),
                format_colones_document(quote.subtotal),
            ),
        ];

        if quote.discounts.is_empty() {
            lines.push(PriceLine::new(
                LineKind::NoDiscount,
                "Descuentos: Ninguno",
                format_colones_document(0.0),
            ));
        }
        for discount in &quote.discounts {
            let label = match discount.kind {
                DiscountKind::Package => format!("- Paquete {}%:", discount.percentage.round()),
            };
            lines.push(PriceLine::new(
                LineKind::Discount,
                label,
                format!("-{}", format_colones_document(discount.amount.round())),
            ));
        }

        let contact_lines = vec![
            format!("{} - {}", contact.tutor_name, contact.headline),
            format!("WhatsApp: {}", contact.whatsapp),
            format!("Email: {}", contact.email),
            format!("Sitio web: {}", contact.website),
        ];

        Self {
            title: "COTIZACION - TUTORIAS JR".to_string(),
            date: safe_text(&format!("Fecha: {}", long_date(date))),
            details: details.iter().map(|d| safe_text(d)).collect(),
            lines,
            total: PriceLine::new(
                LineKind::Total,
                "TOTAL A PAGAR:",
                format_colones_document(quote.total as f64),
            ),
            per_hour: safe_text(&format!(
                "({} por hora)",
                format_colones_document(quote.price_per_hour as f64)
            )),
            contact: contact_lines.iter().map(|c| safe_text(c)).collect(),
            notes: [
                "Esta cotizacion es valida por 7 dias naturales.",
                "El horario se reserva con el 50% del pago.",
                "Cancelacion gratuita con 24 horas de anticipacion.",
                "Descuentos no son acumulables con otras promociones.",
            ]
            .iter()
            .map(|n| n.to_string())
            .collect(),
        }
    }

    /// Plain-text rendering with right-aligned amounts.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.title);
        out.push('\n');
        out.push_str(&self.date);
        out.push_str("\n\n");

        for detail in &self.details {
            out.push_str(detail);
            out.push('\n');
        }
        out.push('\n');

        let mut discount_header = false;
        for line in &self.lines {
            if line.kind == LineKind::Discount && !discount_header {
                out.push_str("Descuentos aplicados:\n");
                discount_header = true;
            }
            out.push_str(&aligned(&line.label, &line.amount));
        }
        out.push_str(&"-".repeat(TEXT_WIDTH));
        out.push('\n');
        out.push_str(&aligned(&self.total.label, &self.total.amount));
        out.push_str(&format!("{:>width$}\n\n", self.per_hour, width = TEXT_WIDTH));

        out.push_str("INFORMACION DE CONTACTO\n");
        for line in &self.contact {
            out.push_str(line);
            out.push('\n');
        }
        out.push('\n');
        for note in &self.notes {
            out.push_str("- ");
            out.push_str(note);
            out.push('\n');
        }
        out
    }
}

fn aligned(label: &str, amount: &str) -> String {
    let used = label.chars().count() + amount.chars().count();
    let pad = TEXT_WIDTH.saturating_sub(used).max(1);
    format!("{}{}{}\n", label, " ".repeat(pad), amount)
}

/// `18 de octubre de 2026`
fn long_date(date: NaiveDate) -> String {
    format!("{} de {} de {}", date.day(), month_name(date.month()), date.year())
}
