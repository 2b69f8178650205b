/// Majordomo web admin endpoint
pub const ADMIN_PATH: &str = "/mj/mj_wwwadm";
pub const WHO_FUNCTION: &str = "who-short";

/// Mutation function codes
pub const SUBSCRIBE_FUNCTION: &str = "subscribe-set-welcome";
pub const UNSUBSCRIBE_FUNCTION: &str = "unsubscribe-farewell";
pub const VICTIM_SEPARATOR: &str = "\r\n";

/// Screen-scraping patterns for the who-short page
pub const SUBSCRIBER_BLOCK_PATTERN: &str = r"list administration<br>\s+</p>\s+<pre>([^<]+)</pre>";
pub const EMPTY_LIST_MARKER: &str = "<!-- Majordomo who_none format file -->";

/// Entities the server escapes inside the subscriber block
pub const HTML_ENTITIES: [(&str, &str); 3] = [("&lt;", "<"), ("&gt;", ">"), ("&quot;", "\"")];

/// Configuration keys
pub const DEFAULT_SECTION: &str = "DEFAULT";
pub const MEMBERS_KEY: &str = "members";
pub const HOST_KEY: &str = "host";
pub const PASSWORD_KEY: &str = "password";

/// Output
pub const MESSAGE_SEPARATOR: &str = " :: ";

/// HTTP constants
pub const DEFAULT_REDIRECT_LIMIT: usize = 10;
pub const USER_AGENT: &str = concat!("check_mj2lists/", env!("CARGO_PKG_VERSION"));
