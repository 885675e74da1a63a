/// Application name used in identifiers and configuration prefixes
pub const APP_NAME: &str = "calmap";

/// Prefix for environment variables read by the configuration loader
pub const ENV_PREFIX: &str = "CALMAP";

/// Default configuration file name (extension resolved by the loader)
pub const CONFIG_FILE_NAME: &str = APP_NAME;

/// Default iCalendar PRODID written on VCALENDAR output
pub const DEFAULT_PROD_ID: &str = const_str::concat!("-//", APP_NAME, "//", APP_NAME, "//EN");

/// iCalendar VERSION written on VCALENDAR output
pub const ICAL_VERSION: &str = "2.0";

/// JSCalendar `@type` discriminators (RFC 8984)
pub const TYPE_EVENT: &str = "Event";
pub const TYPE_TASK: &str = "Task";
pub const TYPE_GROUP: &str = "Group";
pub const TYPE_RECURRENCE_RULE: &str = "RecurrenceRule";
pub const TYPE_NDAY: &str = "NDay";
pub const TYPE_ALERT: &str = "Alert";

/// Documented default literals substituted when a default is explicitly requested
pub const DEFAULT_INTERVAL: u32 = 1;
pub const DEFAULT_RSCALE: &str = "gregorian";
pub const DEFAULT_SKIP: &str = "omit";
pub const DEFAULT_FIRST_DAY_OF_WEEK: &str = "mo";
pub const DEFAULT_RELATIVE_TO: &str = "start";
