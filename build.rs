#![forbid(unsafe_code)]

fn main() {
    // Only compiler metadata is captured so that builds from release
    // tarballs (no .git directory) work the same as checkout builds.
    build_data::set_RUSTC_VERSION();
}
