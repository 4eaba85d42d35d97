// src/common/envelope.rs

use serde::Serialize;

// El sobre uniforme que devuelven todos los endpoints:
// { success, data, message }
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: Option<T>,
    pub message: String,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: "OK".to_string(),
        }
    }

    // Variante con mensaje explícito ("Usuario creado exitosamente", etc.)
    pub fn ok_with(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_envelope_shape() {
        let resp = ApiResponse::ok(serde_json::json!({ "count": 42 }));
        let value = serde_json::to_value(&resp).unwrap();

        assert_eq!(value["success"], true);
        assert_eq!(value["data"]["count"], 42);
        assert!(value["message"].is_string());
    }

    #[test]
    fn ok_with_carries_message() {
        let resp = ApiResponse::ok_with(1, "Usuario creado exitosamente");
        let value = serde_json::to_value(&resp).unwrap();

        assert_eq!(value["message"], "Usuario creado exitosamente");
    }
}
