use std::fmt::Display;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EnvelopeError {
    #[error("{0}")]
    Application(String),
    #[error("Response should contain exactly one of `Ok` and `Err`")]
    Malformed,
}

/// Success/failure envelope returned by every index endpoint.
///
/// Exactly one of `ok` and `err` is expected to be populated. Decoding does not
/// check it, use [`ResponseResult::into_result`] for the checked conversion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResponseResult<T> {
    #[serde(rename = "Ok")]
    pub ok: Option<T>,
    #[serde(rename = "Err")]
    pub err: Option<String>,
}

impl<T> ResponseResult<T> {
    pub fn ok(ok: T) -> Self {
        Self { ok: Some(ok), err: None }
    }

    pub fn err(err: impl Into<String>) -> Self {
        Self { ok: None, err: Some(err.into()) }
    }

    pub fn into_result(self) -> Result<T, EnvelopeError> {
        match (self.ok, self.err) {
            (Some(ok), None) => Ok(ok),
            (None, Some(err)) => Err(EnvelopeError::Application(err)),
            _ => Err(EnvelopeError::Malformed),
        }
    }
}

impl<T> From<ResponseResult<T>> for Result<T, EnvelopeError> {
    fn from(value: ResponseResult<T>) -> Self {
        value.into_result()
    }
}

impl<T, E: Display> From<Result<T, E>> for ResponseResult<T> {
    fn from(value: Result<T, E>) -> Self {
        match value {
            Ok(ok) => Self::ok(ok),
            Err(err) => Self::err(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use fake::{Dummy, Fake, Faker};
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[derive(Debug, Serialize, Deserialize, Dummy, PartialEq, Eq)]
    struct TestResponse {
        a: i32,
        b: String,
    }

    #[test]
    fn test_der_response_ok() {
        let test: TestResponse = Faker.fake();
        let der_response: ResponseResult<TestResponse> = serde_json::from_value(json!({
            "Ok": {
                "a": test.a,
                "b": test.b.clone(),
            },
            "Err": null,
        }))
        .unwrap();
        assert_eq!(der_response, ResponseResult::ok(test));
    }

    #[test]
    fn test_der_response_err() {
        let der_response: ResponseResult<TestResponse> =
            serde_json::from_value(json!({ "Ok": null, "Err": "message" })).unwrap();
        assert_eq!(der_response, ResponseResult::err("message"));
    }

    #[test]
    fn test_der_response_serde_result() {
        let result: Result<Vec<u32>, String> = Ok(vec![1, 2, 3]);
        let der_response: ResponseResult<Vec<u32>> =
            serde_json::from_value(serde_json::to_value(&result).unwrap()).unwrap();
        assert_eq!(der_response, ResponseResult::ok(vec![1, 2, 3]));
    }

    #[test]
    fn test_der_response_missing_fields() {
        let der_response: ResponseResult<TestResponse> =
            serde_json::from_value(json!({})).unwrap();
        assert!(der_response.ok.is_none());
        assert!(der_response.err.is_none());
    }

    #[test]
    fn test_ser_response_emits_both_fields() {
        let value = serde_json::to_value(ResponseResult::<u32>::err("message")).unwrap();
        assert_eq!(value, json!({ "Ok": null, "Err": "message" }));
    }

    #[rstest]
    #[case(Some(1), None, Ok(1))]
    #[case(None, Some("message"), Err(EnvelopeError::Application("message".into())))]
    #[case(None, None, Err(EnvelopeError::Malformed))]
    #[case(Some(1), Some("message"), Err(EnvelopeError::Malformed))]
    fn test_into_result(
        #[case] ok: Option<u32>,
        #[case] err: Option<&str>,
        #[case] expected: Result<u32, EnvelopeError>,
    ) {
        let response = ResponseResult { ok, err: err.map(str::to_owned) };
        assert_eq!(response.into_result(), expected);
    }

    #[test]
    fn test_from_result() {
        let result: Result<u32, std::fmt::Error> = Err(std::fmt::Error);
        let response: ResponseResult<u32> = result.into();
        assert_eq!(response.err.as_deref(), Some("an error occurred when formatting an argument"));
    }
}
