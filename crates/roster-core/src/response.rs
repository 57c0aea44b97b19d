use serde::Serialize;

/// Uniform `{status, message, data}` wrapper for every endpoint.
///
/// `message` is `None` on success and `data` is `None` on failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse<T> {
    pub status: u16,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            status: 200,
            message: None,
            data: Some(data),
        }
    }

    pub fn error(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: Some(message.into()),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_serializes_null_message() {
        let resp = ApiResponse::ok(serde_json::json!({"id": "1"}));
        let v = serde_json::to_value(&resp).unwrap();
        assert_eq!(
            v,
            serde_json::json!({"status": 200, "message": null, "data": {"id": "1"}})
        );
    }

    #[test]
    fn error_serializes_null_data() {
        let resp: ApiResponse<()> = ApiResponse::error(404, "Student not found");
        let v = serde_json::to_value(&resp).unwrap();
        assert_eq!(
            v,
            serde_json::json!({"status": 404, "message": "Student not found", "data": null})
        );
    }
}
