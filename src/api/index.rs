#![forbid(unsafe_code)]

use poem_openapi::{payload::PlainText, OpenApi};

use crate::greeting::INDEX_GREETING;

// ***************************************************************************
//                          Request/Response Definiions
// ***************************************************************************
// Root endpoint structure.
pub struct IndexApi;

// ***************************************************************************
//                             OpenAPI Endpoint
// ***************************************************************************
// ---------------------------------------------------------------------------
// index endpoint:
// ---------------------------------------------------------------------------
#[OpenApi]
impl IndexApi {
    /// Static responder; the body never varies.
    #[oai(path = "/", method = "get")]
    async fn index(&self) -> PlainText<String> {
        PlainText(INDEX_GREETING.to_string())
    }
}
