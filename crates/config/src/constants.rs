//! Built-in defaults for classification rules and paths

/// Extensions that mark an entry as a library artifact
pub const LIB64_EXTENSIONS: [&str; 4] = [".a", ".chk", ".la", ".so"];

/// Infix identifying a versioned shared object (`libfoo.so.1.2`)
pub const VERSIONED_MARKER: &str = ".so.";

/// Exact names of architecture-specific directories kept in lib64
pub const LIB64_NAMES: [&str; 2] = ["locale", "perl5"];

pub const LOGS_DIR: &str = "/var/tmp/unsymlink/logs";

pub const ENV_LIB64_NAMES: &str = "UNSYMLINK_LIB64_NAMES";
pub const ENV_LIB64_EXTENSIONS: &str = "UNSYMLINK_LIB64_EXTENSIONS";
