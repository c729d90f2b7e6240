use super::money::format_colones;
use crate::config::ContactInfo;
use crate::pricing::quote::radix_value;
use crate::pricing::{Hours, PricingEngine, Quote};
use serde::{Deserialize, Serialize};

/// A booking submitted from the site's reservation form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingRequest {
    pub name: String,
    pub contact: String,
    pub language: String,
    pub level: String,
    pub schedule: String,
    pub hours: Option<String>,
    pub goal: Option<String>,
}

impl BookingRequest {
    /// Form fields are free text: keys are lowercased and hours read as a leading integer.
    pub fn quote(&self, engine: &PricingEngine) -> Quote {
        let hours = self
            .hours
            .as_deref()
            .and_then(leading_integer);
        engine.calculate_price(
            &self.language.to_lowercase(),
            &self.level.to_lowercase(),
            Hours::from(hours),
        )
    }

    fn hours_label(&self) -> &str {
        match self.hours.as_deref().map(str::trim) {
            Some(h) if !h.is_empty() => h,
            _ => "1",
        }
    }

    pub fn student_confirmation(&self, quote: &Quote, contact: &ContactInfo) -> String {
        format!(
            "✅ Reserva Confirmada - Tutorías {tutor}\n\
             \n\
             Hola {name},\n\
             \n\
             Confirmo tu solicitud para tutoría de {language} ({level}).\n\
             \n\
             📅 Horario: {schedule}\n\
             ⏰ Duración: {hours} hora(s)\n\
             💲 Inversión: {price}\n\
             \n\
             Te contactaré pronto para coordinar los detalles.\n\
             \n\
             ¡Nos vemos pronto! 👨‍💻\n\
             \n\
             {tutor}\n\
             WhatsApp: {whatsapp}",
            tutor = contact.tutor_name,
            name = self.name,
            language = self.language,
            level = self.level,
            schedule = self.schedule,
            hours = self.hours_label(),
            price = format_colones(quote.total as f64),
            whatsapp = contact.whatsapp,
        )
    }

    pub fn tutor_notification(&self, quote: &Quote) -> String {
        format!(
            "📅 NUEVA RESERVA:\n\
             \n\
             Estudiante: {name}\n\
             Contacto: {contact}\n\
             Lenguaje: {language}\n\
             Nivel: {level}\n\
             Horario: {schedule}\n\
             Horas: {hours}\n\
             Precio: {price}\n\
             Objetivo: {goal}",
            name = self.name,
            contact = self.contact,
            language = self.language,
            level = self.level,
            schedule = self.schedule,
            hours = self.hours_label(),
            price = format_colones(quote.total as f64),
            goal = self
                .goal
                .as_deref()
                .filter(|g| !g.trim().is_empty())
                .unwrap_or("No especificado"),
        )
    }
}

/// Leading integer of a form value, read the way the booking form's `parseInt` did:
/// `"6 horas"` is 6, `"4.5"` is 4, `"0x10"` is 16, `"abc"` is `None`. Digit runs
/// too long for any integer type still yield a (large) number.
fn leading_integer(raw: &str) -> Option<f64> {
    let trimmed = raw.trim_start();
    let (sign, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let (radix, rest) = match rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X")) {
        Some(hex) => (16, hex),
        None => (10, rest),
    };
    let end = rest
        .char_indices()
        .find(|(_, c)| !c.is_digit(radix))
        .map_or(rest.len(), |(i, _)| i);
    radix_value(&rest[..end], radix).map(|n| sign * n)
}
