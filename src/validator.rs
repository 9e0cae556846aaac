use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::utils::errors::AppError;

/// Flattens field errors into a plain list of messages, one per failed rule.
fn collect_messages(errors: &ValidationErrors) -> Vec<String> {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect()
}

/// JSON extractor that runs `validator` rules on the deserialized body and
/// rejects with a 400 message list on failure.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                let error_msg = rejection.body_text();

                if error_msg.contains("missing field") {
                    let field = error_msg
                        .split("missing field `")
                        .nth(1)
                        .and_then(|s| s.split('`').next())
                        .unwrap_or("unknown");
                    return AppError::validation(format!("{} is required", field));
                }

                if error_msg.contains("invalid type") {
                    return AppError::validation("Invalid field type in request");
                }

                if matches!(rejection, JsonRejection::MissingJsonContentType(_)) {
                    return AppError::validation(
                        "Missing 'Content-Type: application/json' header",
                    );
                }

                AppError::validation("Invalid request body")
            })?;

        value
            .validate()
            .map_err(|errors| AppError::Validation(collect_messages(&errors)))?;

        Ok(ValidatedJson(value))
    }
}
