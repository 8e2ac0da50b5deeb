#![forbid(unsafe_code)]

use poem_openapi::{payload::Json, Object, OpenApi};

// From cargo.toml.
const GREET_VERSION: Option<&str> = option_env!("CARGO_PKG_VERSION");

// ***************************************************************************
//                          Request/Response Definiions
// ***************************************************************************
pub struct VersionApi;

#[derive(Object)]
struct RespVersion
{
    result_code: String,
    result_msg: String,
    greet_version: String,
    rustc_version: String,
}

// ***************************************************************************
//                             OpenAPI Endpoint
// ***************************************************************************
#[OpenApi]
impl VersionApi {
    #[oai(path = "/version", method = "get")]
    async fn get_version(&self) -> Json<RespVersion> {
        Json(RespVersion::process())
    }
}

// ***************************************************************************
//                          Request/Response Methods
// ***************************************************************************
impl RespVersion {
    fn process() -> RespVersion {
        RespVersion {
            result_code: "0".to_string(),
            result_msg: "success".to_string(),
            greet_version: GREET_VERSION.unwrap_or("unknown").to_string(),
            rustc_version: env!("RUSTC_VERSION").to_string(),
        }
    }
}
