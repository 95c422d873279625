//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::handlers::account_handler::{LoginRequest, SignUpRequest};
use domain::{LoginResponse, SignUpResponse};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::account_handler::sign_up,
        crate::handlers::account_handler::login,
    ),
    components(schemas(SignUpRequest, LoginRequest, SignUpResponse, LoginResponse)),
    tags((name = "Accounts", description = "Account sign-up and login"))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_account_paths() {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key("/api/users/signup"));
        assert!(doc.paths.paths.contains_key("/api/users/login"));
    }

    #[test]
    fn test_document_renders_schema_examples() {
        let json = ApiDoc::openapi().to_json().unwrap();

        for schema in ["SignUpRequest", "LoginRequest", "SignUpResponse", "LoginResponse"] {
            assert!(json.contains(schema), "missing schema {schema}");
        }
        assert!(json.contains("010-1234-5678"));
    }
}
