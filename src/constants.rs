/// Base URL used when `BOOK_TRACKER_API_URL` is not set
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8083/api/v1";
/// Environment variable selecting the API base URL
pub const API_BASE_URL_ENV: &str = "BOOK_TRACKER_API_URL";
/// Environment variable selecting the persisted key/value store file
pub const TOKEN_FILE_ENV: &str = "BOOK_TRACKER_TOKEN_FILE";
/// Default location of the persisted key/value store
pub const DEFAULT_TOKEN_FILE: &str = ".book-tracker/storage.json";
/// Key under which the bearer token is kept in the persisted store
pub const AUTH_TOKEN_KEY: &str = "authToken";
/// Environment variable controlling the log level
pub const LOG_LEVEL_ENV: &str = "LOGLEVEL";
/// Content type sent with every request unless the caller overrides it
pub const DEFAULT_CONTENT_TYPE: &str = "application/json";
/// User agent string used in HTTP requests to identify this client
pub const USER_AGENT: &str = concat!("book-tracker-client/", env!("CARGO_PKG_VERSION"));
/// Book status: not started yet
pub const STATUS_TO_READ: &str = "to-read";
/// Book status: currently being read
pub const STATUS_READING: &str = "reading";
/// Book status: finished
pub const STATUS_READ: &str = "read";
