// src/models/vacancies.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use validator::Validate;

// Alta de vacante con sus condiciones generales. Los montos llegan desde el
// wizard a veces como número y a veces como string (incluso vacío): se
// normalizan a Option<Decimal> en la deserialización.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVacancyPayload {
    #[validate(length(min = 1, message = "El nombre y client_id son obligatorios"))]
    pub nombre: String,
    pub client_id: i32,

    #[serde(default, deserialize_with = "decimal_or_empty")]
    pub sueldo: Option<Decimal>,
    #[serde(default, deserialize_with = "decimal_or_empty")]
    pub bono: Option<Decimal>,

    pub horarios: Option<String>,
    pub beneficios: Option<String>,
    pub requisitos: Option<String>,
    pub documentacion: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VacancyCreated {
    pub vacante_id: i32,
}

// Reemplazo completo del FAQ de una vacante: siempre el set entero,
// nunca un diff parcial.
#[derive(Debug, Deserialize)]
pub struct FaqUpdatePayload {
    pub faqs: Vec<FaqEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FaqEntry {
    pub pregunta: String,
    pub respuesta: String,
    pub palabras_clave: Option<String>,
}

// Vacante + condiciones en una sola fila (LEFT JOIN).
#[derive(Debug, FromRow)]
pub struct VacancyDetailRow {
    pub id: i32,
    pub nombre: String,
    pub client_id: Option<i32>,
    pub fecha_creacion: DateTime<Utc>,
    pub estado: Option<String>,
    pub sueldo: Option<Decimal>,
    pub bono: Option<Decimal>,
    pub horarios: Option<String>,
    pub beneficios: Option<String>,
    pub requisitos: Option<String>,
    pub documentacion: Option<String>,
}

// La vista completa que consume el agente conversacional: la vacante,
// sus condiciones y el FAQ anidado.
#[derive(Debug, Serialize)]
pub struct VacancyFull {
    pub id: i32,
    pub nombre: String,
    pub fecha_creacion: DateTime<Utc>,
    pub estado: Option<String>,
    pub sueldo: Option<Decimal>,
    pub bono: Option<Decimal>,
    pub horarios: Option<String>,
    pub beneficios: Option<String>,
    pub requisitos: Option<String>,
    pub documentacion: Option<String>,
    pub faqs: Vec<FaqEntry>,
}

impl VacancyFull {
    pub fn from_parts(row: VacancyDetailRow, faqs: Vec<FaqEntry>) -> Self {
        Self {
            id: row.id,
            nombre: row.nombre,
            fecha_creacion: row.fecha_creacion,
            estado: row.estado,
            sueldo: row.sueldo,
            bono: row.bono,
            horarios: row.horarios,
            beneficios: row.beneficios,
            requisitos: row.requisitos,
            documentacion: row.documentacion,
            faqs,
        }
    }
}

// Acepta número, string numérico, string vacío o null.
fn decimal_or_empty<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(Decimal),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Num(d)) => Ok(Some(d)),
        Some(Raw::Text(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Ok(None)
            } else {
                trimmed.parse::<Decimal>().map(Some).map_err(serde::de::Error::custom)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_accept_numbers_strings_and_empty() {
        let p: CreateVacancyPayload = serde_json::from_str(
            r#"{"nombre":"Dev","client_id":5,"sueldo":15000.50,"bono":"","horarios":"L-V"}"#,
        )
        .unwrap();
        assert_eq!(p.sueldo, Some("15000.50".parse().unwrap()));
        assert_eq!(p.bono, None);

        let p: CreateVacancyPayload =
            serde_json::from_str(r#"{"nombre":"Dev","client_id":5,"sueldo":"12000"}"#).unwrap();
        assert_eq!(p.sueldo, Some("12000".parse().unwrap()));
        assert_eq!(p.bono, None);
    }

    #[test]
    fn non_numeric_amount_is_rejected() {
        let result =
            serde_json::from_str::<CreateVacancyPayload>(r#"{"nombre":"Dev","client_id":5,"sueldo":"mucho"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn faq_payload_requires_an_array() {
        assert!(serde_json::from_str::<FaqUpdatePayload>(r#"{"faqs":"no-array"}"#).is_err());
        assert!(serde_json::from_str::<FaqUpdatePayload>(r#"{"faqs":[]}"#).is_ok());
    }
}
