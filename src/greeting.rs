#![forbid(unsafe_code)]

// ***************************************************************************
//                                Constants
// ***************************************************************************
/// Fixed body returned by the root endpoint.
pub const INDEX_GREETING: &str = "Greetings from Spring Boot!";

// ---------------------------------------------------------------------------
// greeting:
// ---------------------------------------------------------------------------
/** Format the greeting for an optional caller-supplied name.  A missing name
 * yields the default greeting; a supplied name is echoed verbatim with no
 * trimming, escaping or validation, the empty string included.
 */
pub fn greeting(name: Option<&str>) -> String {
    match name {
        Some(name) => format!("Hello, {}!", name),
        None => "Hello, World!".to_string(),
    }
}
