// src/models/leads.rs

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

// Ventana dentro de la cual todavía se puede contestar un chat: se cuenta
// desde el último mensaje ENVIADO POR EL REMITENTE (last_incoming).
pub const OUTBOUND_WINDOW_HOURS: i64 = 23;

// Conteos simples de los cards del dashboard.
#[derive(Debug, Serialize, ToSchema)]
pub struct LeadCount {
    pub count: i64,
}

// Tiempo promedio de respuesta, ya formateado ("12m").
#[derive(Debug, Serialize, ToSchema)]
pub struct AvgResponseTime {
    pub value: String,
}

// Un bucket del gráfico semanal: día abreviado + leads únicos.
#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct WeeklyBucket {
    pub name: String,
    pub leads: i64,
}

// Proyección de actividad reciente (últimos 10 mensajes).
#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct RecentMessage {
    pub remitente_wa_id: String,
    pub message: Option<String>,
    pub time: Option<String>,
}

// Una fila del historial unificado de una conversación: los mensajes
// entrantes no tienen id ni bandera manual; los salientes sí.
#[derive(Debug, Serialize, FromRow)]
pub struct ConversationMessage {
    pub id: Option<i32>,
    pub mensaje_texto: Option<String>,
    pub fecha_mensaje: DateTime<Utc>,
    pub sentido: String,
    pub manual: Option<bool>,
}

// Fila cruda del roster de chats (top 50 por última interacción).
#[derive(Debug, FromRow)]
pub struct ChatRosterRow {
    pub remitente_wa_id: String,
    pub last_interaction: DateTime<Utc>,
    pub last_incoming: Option<DateTime<Utc>>,
}

// Lo que ve el navegador de chats: el roster más la elegibilidad derivada.
#[derive(Debug, Serialize, ToSchema)]
pub struct ChatSummary {
    pub remitente_wa_id: String,
    pub last_interaction: DateTime<Utc>,
    pub last_incoming: Option<DateTime<Utc>>,
    pub puede_responder: bool,
}

impl ChatSummary {
    pub fn from_row(row: ChatRosterRow, now: DateTime<Utc>) -> Self {
        let reference = row.last_incoming.unwrap_or(row.last_interaction);
        Self {
            puede_responder: outbound_eligible(reference, now),
            remitente_wa_id: row.remitente_wa_id,
            last_interaction: row.last_interaction,
            last_incoming: row.last_incoming,
        }
    }
}

// Función pura: elegible exactamente cuando la brecha es <= 23h.
pub fn outbound_eligible(last_incoming: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    now - last_incoming <= Duration::hours(OUTBOUND_WINDOW_HOURS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn eligible_within_window() {
        let last = at(1_000_000);
        assert!(outbound_eligible(last, last + Duration::hours(1)));
        assert!(outbound_eligible(last, last + Duration::hours(22)));
    }

    #[test]
    fn boundary_is_exact_at_23_hours() {
        let last = at(1_000_000);
        // Exactamente 23h0m0s: todavía elegible.
        assert!(outbound_eligible(last, last + Duration::hours(23)));
        // Un milisegundo después: ya no.
        assert!(!outbound_eligible(
            last,
            last + Duration::hours(23) + Duration::milliseconds(1)
        ));
    }

    #[test]
    fn roster_without_incoming_falls_back_to_last_interaction() {
        let now = at(2_000_000);
        let row = ChatRosterRow {
            remitente_wa_id: "5215550001111".into(),
            last_interaction: now - Duration::hours(2),
            last_incoming: None,
        };
        let summary = ChatSummary::from_row(row, now);
        assert!(summary.puede_responder);
    }

    #[test]
    fn stale_incoming_disables_reply() {
        let now = at(2_000_000);
        let row = ChatRosterRow {
            remitente_wa_id: "5215550001111".into(),
            last_interaction: now - Duration::hours(1),
            last_incoming: Some(now - Duration::hours(24)),
        };
        // La referencia es last_incoming, no la última interacción.
        let summary = ChatSummary::from_row(row, now);
        assert!(!summary.puede_responder);
    }
}
