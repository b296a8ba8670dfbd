use serde::de::DeserializeOwned;

use crate::error::FetchError;

/// What came back from the server, before any interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl RawResponse {
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Performs a single GET with default headers and no body.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn get(&self, url: &str) -> Result<RawResponse, FetchError>;
}

/// Turn a response into a payload: non-2xx is a `Status` failure, a body that
/// does not deserialize into `T` is a `Parse` failure.
pub fn decode_response<T: DeserializeOwned>(response: &RawResponse) -> Result<T, FetchError> {
    if !response.is_success() {
        return Err(FetchError::Status {
            status: response.status,
            reason: response.status_text.clone(),
        });
    }

    serde_json::from_str(&response.body).map_err(|e| FetchError::parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FailureKind;
    use crate::models::LectureMaterial;

    fn response(status: u16, body: &str) -> RawResponse {
        RawResponse {
            status,
            status_text: String::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn test_decodes_success_body() {
        let items: Vec<LectureMaterial> =
            decode_response(&response(200, r#"[{"id":1,"title":"Intro"}]"#)).unwrap();
        assert_eq!(items[0].title, "Intro");
    }

    #[test]
    fn test_status_checked_before_body() {
        // A valid body on an error status is still a failure
        let result: Result<Vec<LectureMaterial>, _> = decode_response(&response(500, "[]"));
        assert_eq!(result.unwrap_err().status(), Some(500));
    }

    #[test]
    fn test_invalid_body_is_parse_error() {
        let result: Result<Vec<LectureMaterial>, _> =
            decode_response(&response(200, "\"not-json\""));
        assert_eq!(result.unwrap_err().kind(), FailureKind::Parse);

        let result: Result<Vec<LectureMaterial>, _> = decode_response(&response(200, "not-json"));
        assert_eq!(result.unwrap_err().kind(), FailureKind::Parse);
    }

    #[test]
    fn test_empty_body_on_no_content_is_parse_error() {
        let result: Result<Vec<LectureMaterial>, _> = decode_response(&response(204, ""));
        assert!(matches!(result, Err(FetchError::Parse { .. })));
    }
}
