#![forbid(unsafe_code)]

use poem_openapi::{param::Query, payload::PlainText, OpenApi};

use crate::greeting::greeting;

// ***************************************************************************
//                          Request/Response Definiions
// ***************************************************************************
// Hello endpoint structure.
pub struct HelloApi;

// ***************************************************************************
//                             OpenAPI Endpoint
// ***************************************************************************
// ---------------------------------------------------------------------------
// hello endpoint:
// ---------------------------------------------------------------------------
#[OpenApi]
impl HelloApi {
    /// Greet the caller.  An absent name parameter yields the default
    /// greeting; a present one, empty string included, is echoed verbatim.
    #[oai(path = "/hello", method = "get")]
    async fn hello(&self, name: Query<Option<String>>) -> PlainText<String> {
        PlainText(greeting(name.0.as_deref()))
    }
}
