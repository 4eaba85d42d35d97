// src/models/messages.rs

use serde::Deserialize;
use validator::Validate;

// Lo que envía el staff desde el navegador de chats.
#[derive(Debug, Deserialize, Validate)]
pub struct OutboundPayload {
    #[validate(length(min = 1, message = "wa_id y message son obligatorios"))]
    pub wa_id: String,
    #[validate(length(min = 1, message = "wa_id y message son obligatorios"))]
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct ManualPayload {
    pub manual: ManualFlag,
}

// El frontend manda 0/1; aceptamos también booleanos.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ManualFlag {
    Bool(bool),
    Int(u8),
}

impl ManualFlag {
    pub fn as_bool(&self) -> bool {
        match self {
            ManualFlag::Bool(b) => *b,
            ManualFlag::Int(n) => *n != 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_flag_accepts_ints_and_bools() {
        let p: ManualPayload = serde_json::from_str(r#"{"manual": 1}"#).unwrap();
        assert!(p.manual.as_bool());

        let p: ManualPayload = serde_json::from_str(r#"{"manual": 0}"#).unwrap();
        assert!(!p.manual.as_bool());

        let p: ManualPayload = serde_json::from_str(r#"{"manual": true}"#).unwrap();
        assert!(p.manual.as_bool());
    }

    #[test]
    fn manual_flag_rejects_other_shapes() {
        assert!(serde_json::from_str::<ManualPayload>(r#"{"manual": "si"}"#).is_err());
    }
}
