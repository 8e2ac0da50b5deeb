#![forbid(unsafe_code)]

use poem::Route;
use poem_openapi::OpenApiService;

use crate::api::hello::HelloApi;
use crate::api::index::IndexApi;
use crate::api::version::VersionApi;

// Modules
pub mod hello;
pub mod index;
pub mod version;

// ---------------------------------------------------------------------------
// build_routes:
// ---------------------------------------------------------------------------
/** Assemble the complete route table.  The OpenAPI service is nested at the
 * server root so the endpoint paths are exactly "/", "/hello" and "/version";
 * the generated specs remain retrievable from the server.
 */
pub fn build_routes(server_url: String, title: &str) -> Route {
    // Create a tuple with all endpoint structs.
    let endpoints = (IndexApi, HelloApi, VersionApi);
    let api_service =
        OpenApiService::new(endpoints, title.to_string(), env!("CARGO_PKG_VERSION"))
            .server(server_url);

    // Allow the generated openapi specs to be retrieved from the server.
    let spec = api_service.spec_endpoint();
    let spec_yaml = api_service.spec_endpoint_yaml();

    Route::new()
        .nest("/", api_service)
        .at("/spec", spec)
        .at("/spec_yaml", spec_yaml)
}

// ***************************************************************************
//                                  Tests
// ***************************************************************************
// Integration tests exercising the endpoints end to end through poem's
// in-process test client.
#[cfg(test)]
mod tests {
    use poem::test::TestClient;
    use poem::Route;
    use uuid::Uuid;

    use super::build_routes;

    fn client() -> TestClient<Route> {
        TestClient::new(build_routes("http://localhost:8080".to_string(), "Greet Server"))
    }

    #[tokio::test]
    async fn index() {
        let resp = client().get("/").send().await;
        resp.assert_status_is_ok();
        resp.assert_text("Greetings from Spring Boot!").await;
    }

    #[tokio::test]
    async fn hello() {
        let resp = client().get("/hello").send().await;
        resp.assert_status_is_ok();
        resp.assert_text("Hello, World!").await;
    }

    #[tokio::test]
    async fn hello_name() {
        let name = Uuid::new_v4().to_string();
        let resp = client().get(format!("/hello?name={}", name)).send().await;
        resp.assert_status_is_ok();
        resp.assert_text(format!("Hello, {}!", name)).await;
    }

    #[tokio::test]
    async fn hello_empty_name() {
        // A present-but-empty parameter is not the same as an absent one.
        let resp = client().get("/hello?name=").send().await;
        resp.assert_status_is_ok();
        resp.assert_text("Hello, !").await;
    }

    #[tokio::test]
    async fn hello_unicode_name() {
        let resp = client().get("/hello?name=G%C3%BCnter").send().await;
        resp.assert_status_is_ok();
        resp.assert_text("Hello, Günter!").await;
    }

    #[tokio::test]
    async fn hello_is_plain_text() {
        let resp = client().get("/hello").send().await;
        resp.assert_content_type("text/plain; charset=utf-8");
    }

    #[tokio::test]
    async fn hello_repeated_calls() {
        let cli = client();
        let first = cli.get("/hello?name=Bud").send().await;
        first.assert_text("Hello, Bud!").await;
        let second = cli.get("/hello?name=Bud").send().await;
        second.assert_text("Hello, Bud!").await;
    }

    #[tokio::test]
    async fn get_version() {
        let resp = client().get("/version").send().await;
        resp.assert_status_is_ok();
    }
}
