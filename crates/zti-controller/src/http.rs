//! Shared HTTP response helpers for controller requests.
//!
//! Centralizes status-code checks so the request methods stay focused on
//! request construction and response mapping.

use serde::de::DeserializeOwned;

use crate::error::ControllerError;

/// Check a network descriptor response.
///
/// - **200** → the response, unchanged
/// - **403** → [`ControllerError::Forbidden`]
/// - **404** → [`ControllerError::NotFound`]
/// - anything else → [`ControllerError::Unknown`]
pub fn check_network_response(
    resp: reqwest::Response,
    network_id: &str,
) -> Result<reqwest::Response, ControllerError> {
    match resp.status().as_u16() {
        200 => Ok(resp),
        403 => Err(ControllerError::Forbidden {
            network_id: network_id.to_string(),
        }),
        404 => Err(ControllerError::NotFound {
            network_id: network_id.to_string(),
        }),
        status => Err(ControllerError::Unknown { status }),
    }
}

/// Check a generic response: non-success → [`ControllerError::Api`] with
/// status code and response body.
pub async fn check_response(
    resp: reqwest::Response,
) -> Result<reqwest::Response, ControllerError> {
    if !resp.status().is_success() {
        return Err(ControllerError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

/// Read the body and decode it as JSON, reporting decode failures as
/// [`ControllerError::Parse`].
pub async fn read_json<T: DeserializeOwned>(
    resp: reqwest::Response,
) -> Result<T, ControllerError> {
    let body = resp.text().await?;
    serde_json::from_str(&body).map_err(|e| ControllerError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body)
                .unwrap(),
        )
    }

    #[test]
    fn network_response_success() {
        assert!(check_network_response(mock_response(200, "{}"), "n1").is_ok());
    }

    #[test]
    fn network_response_forbidden() {
        let err = check_network_response(mock_response(403, ""), "n1").unwrap_err();
        assert!(matches!(err, ControllerError::Forbidden { network_id } if network_id == "n1"));
    }

    #[test]
    fn network_response_not_found() {
        let err = check_network_response(mock_response(404, ""), "n1").unwrap_err();
        assert!(matches!(err, ControllerError::NotFound { network_id } if network_id == "n1"));
    }

    #[test]
    fn network_response_other_statuses_are_unknown() {
        for status in [201, 301, 400, 401, 429, 500, 503] {
            let err = check_network_response(mock_response(status, ""), "n1").unwrap_err();
            assert!(
                matches!(err, ControllerError::Unknown { status: s } if s == status),
                "status {status}"
            );
        }
    }

    #[tokio::test]
    async fn check_response_api_error_keeps_body() {
        let err = check_response(mock_response(500, "boom")).await.unwrap_err();
        assert!(matches!(
            err,
            ControllerError::Api { status: 500, ref message } if message == "boom"
        ));
    }

    #[tokio::test]
    async fn check_response_success() {
        assert!(check_response(mock_response(204, "")).await.is_ok());
    }

    #[tokio::test]
    async fn read_json_reports_parse_errors() {
        let err = read_json::<Vec<u32>>(mock_response(200, "not json"))
            .await
            .unwrap_err();
        assert!(matches!(err, ControllerError::Parse(_)));
    }

    #[tokio::test]
    async fn read_json_decodes_body() {
        let values: Vec<u32> = read_json(mock_response(200, "[1, 2, 3]")).await.unwrap();
        assert_eq!(values, vec![1, 2, 3]);
    }
}
