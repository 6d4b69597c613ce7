pub mod package_json;

pub use package_json::{PackageJson, is_placeholder_test_script};
