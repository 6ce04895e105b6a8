//! Reusable OpenAPI response types for boundary validation errors.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Unprocessable Entity - path parameter is not an integer",
    content_type = "application/json",
    example = json!({
        "code": 1002,
        "error": "INVALID_PATH_PARAM",
        "message": "Path parameter must be an integer",
        "details": { "value": "abc" }
    })
)]
pub struct InvalidPathParamResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Unprocessable Entity - request body does not match the expected shape",
    content_type = "application/json",
    example = json!({
        "code": 1003,
        "error": "JSON_EXTRACTION",
        "message": "Failed to parse request body",
        "details": "Failed to deserialize the JSON body into the target type: missing field `name` at line 1 column 2"
    })
)]
pub struct JsonExtractionResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - query string could not be parsed",
    content_type = "application/json",
    example = json!({
        "code": 1012,
        "error": "QUERY_EXTRACTION",
        "message": "Failed to parse query string",
        "details": null
    })
)]
pub struct QueryExtractionResponse(pub ErrorResponse);
