#![forbid(unsafe_code)]

use std::ops::Deref;
use std::path::Path;

use path_absolutize::Absolutize;

// ---------------------------------------------------------------------------
// get_absolute_path:
// ---------------------------------------------------------------------------
/** Replace tilde (~) and environment variable values in a path name and
 * then construct the absolute path name.  Unlike std's canonicalize,
 * absolutize does not require that the file exists.
 */
pub fn get_absolute_path(path: &str) -> String {
    // Replace ~ and environment variable values if possible.
    // On error, return the string version of the original path.
    let s = match shellexpand::full(path) {
        Ok(x) => x,
        Err(_) => return path.to_owned(),
    };

    // Convert to absolute path if necessary.
    // Return original input on error.
    let p = Path::new(s.deref());
    let p1 = match p.absolutize() {
        Ok(x) => x,
        Err(_) => return path.to_owned(),
    };
    let p2 = match p1.to_str() {
        Some(x) => x,
        None => return path.to_owned(),
    };
    p2.to_owned()
}

// ***************************************************************************
//                                  Tests
// ***************************************************************************
#[cfg(test)]
mod tests {
    use super::get_absolute_path;

    #[test]
    fn relative_paths_become_absolute() {
        let p = get_absolute_path("some/relative/path");
        assert!(p.starts_with('/'));
        assert!(p.ends_with("some/relative/path"));
    }

    #[test]
    fn tilde_is_expanded() {
        let p = get_absolute_path("~/afile");
        assert!(p.ends_with("afile"));
    }
}
