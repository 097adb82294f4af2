//! Envelope de respuesta de la API
//!
//! Todas las respuestas usan el formato `{info, content}` donde `info`
//! es `success`, `error` o `unauthorized`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub info: String,
    pub content: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(content: T) -> Self {
        Self {
            info: "success".to_string(),
            content: Some(content),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_envelope_shape() {
        let response = ApiResponse::success(json!({"uuid": "abc"}));
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["info"], "success");
        assert_eq!(value["content"]["uuid"], "abc");
    }
}
