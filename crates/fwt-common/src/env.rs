//! Environment variable names consulted when no explicit source is given.

/// Selects the source mode. The value [`CONFIG_TYPE_LOCAL`] switches to a
/// local file; anything else (or unset) means remote object storage.
pub const CONFIG_TYPE: &str = "config_type";

/// Local file path in local mode, object key in remote mode.
pub const CONFIG_NAME: &str = "config_name";

/// Object storage bucket. Only required in remote mode.
pub const CONFIG_BUCKET: &str = "config_bucket";

/// Value of [`CONFIG_TYPE`] that selects local-file mode.
pub const CONFIG_TYPE_LOCAL: &str = "local";
