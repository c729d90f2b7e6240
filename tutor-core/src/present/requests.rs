use super::text::safe_text;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;

const NOT_SPECIFIED: &str = "No especificado";

/// Raw form submission: field name to submitted value.
pub type FormFields = BTreeMap<String, String>;

/// One labelled value of a request document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    pub label: String,
    pub value: String,
}

impl Field {
    /// Empty or missing form values read as "No especificado".
    fn from_form(form: &FormFields, key: &str, label: &str) -> Self {
        let value = form
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
            .unwrap_or(NOT_SPECIFIED);
        Self {
            label: safe_text(label),
            value: safe_text(value),
        }
    }
}

/// Content of the tutoring request document ("SOLICITUD DE TUTORIA").
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestSummary {
    pub title: String,
    pub received: String,
    pub section: String,
    pub fields: Vec<Field>,
    /// The client's free-text goals, when they wrote any.
    pub objectives: Option<String>,
}

impl RequestSummary {
    const FIELDS: [(&'static str, &'static str); 6] = [
        ("name", "Nombre:"),
        ("email", "Correo:"),
        ("phone", "Telefono:"),
        ("level", "Nivel:"),
        ("hours", "Horas por semana:"),
        ("budget", "Presupuesto:"),
    ];

    pub fn from_form(form: &FormFields, date: NaiveDate) -> Self {
        Self {
            title: "SOLICITUD DE TUTORIA".to_string(),
            received: format!("Recibida el: {}", short_date(date)),
            section: "INFORMACION DEL CLIENTE".to_string(),
            fields: Self::FIELDS
                .iter()
                .map(|(key, label)| Field::from_form(form, key, label))
                .collect(),
            objectives: form
                .get("message")
                .filter(|m| !m.is_empty())
                .map(|m| safe_text(m)),
        }
    }

    pub fn render_text(&self) -> String {
        let mut out = render_header(&self.title, &self.received);
        render_fields(&mut out, &self.section, &self.fields);
        if let Some(objectives) = &self.objectives {
            out.push_str("\nOBJETIVOS\n");
            out.push_str(objectives);
            out.push('\n');
        }
        out
    }
}

/// Content of the budget options document ("OPCIONES DE PRESUPUESTO").
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetOptions {
    pub title: String,
    pub requested: String,
    pub section: String,
    pub fields: Vec<Field>,
    pub options: Vec<String>,
}

impl BudgetOptions {
    const FIELDS: [(&'static str, &'static str); 5] = [
        ("name", "Nombre:"),
        ("email", "Correo:"),
        ("phone", "Telefono:"),
        ("budget_amount", "Presupuesto mensual:"),
        ("budget_option", "Opcion:"),
    ];

    /// Alternatives offered to every applicant, whatever they submitted.
    pub const OPTIONS: [&'static str; 5] = [
        "Sesiones en grupo (2-4 personas): hasta 40% menos",
        "Plan estudiantil: 15% con comprobante",
        "Frecuencia reducida: sesiones cada 2 semanas",
        "Paquetes extendidos: mas descuento por mas horas",
        "Pago en cuotas: opciones disponibles",
    ];

    pub fn from_form(form: &FormFields, date: NaiveDate) -> Self {
        Self {
            title: "OPCIONES DE PRESUPUESTO".to_string(),
            requested: format!("Solicitud: {}", short_date(date)),
            section: "DATOS DEL SOLICITANTE".to_string(),
            fields: Self::FIELDS
                .iter()
                .map(|(key, label)| Field::from_form(form, key, label))
                .collect(),
            options: Self::OPTIONS.iter().map(|o| safe_text(o)).collect(),
        }
    }

    pub fn render_text(&self) -> String {
        let mut out = render_header(&self.title, &self.requested);
        render_fields(&mut out, &self.section, &self.fields);
        out.push_str("\nOPCIONES DISPONIBLES\n");
        for option in &self.options {
            out.push_str("• ");
            out.push_str(option);
            out.push('\n');
        }
        out
    }
}

fn render_header(title: &str, date_line: &str) -> String {
    format!("{}\n{}\n\n", title, date_line)
}

fn render_fields(out: &mut String, section: &str, fields: &[Field]) {
    out.push_str(section);
    out.push('\n');
    for field in fields {
        out.push_str(&format!("{} {}\n", field.label, field.value));
    }
}

/// `18/10/2026`
fn short_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.day(), date.month(), date.year())
}
