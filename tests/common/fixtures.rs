//! Test fixtures - reusable content for tests.

#![allow(dead_code)]

/// Landing page of the fixture site
pub const INDEX_HTML: &str = "Hello";

/// A nested stylesheet, so the archive has more than one level
pub const MAIN_CSS: &str = "body { margin: 0; }\n";

/// Marker body written by the packager with default settings
pub const MARKER_CONTENT: &str = "New version deployed!\n";

/// Config template for the local transport. `{root}` is replaced with the
/// project directory.
pub const LOCAL_CONFIG: &str = r#"[pack]
content_dir = "web_static"
versions_dir = "versions"

[remote]
releases_dir = '{root}/srv/releases'
current_link = '{root}/srv/current'
upload_dir = '{root}/upload'

[deploy]
hosts = ["localhost"]
transport = "local"
"#;
