/// Default REST API base URL when `RIVER_API_URL` is not set
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";
/// User agent string sent with every HTTP request
pub const USER_AGENT: &str = "river-monitor-client/0.1.0";
/// Storage key holding the access token
pub const ACCESS_TOKEN_KEY: &str = "access_token";
/// Storage key holding the refresh token
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";
/// Number of times a request is retried after a 401 and a token refresh
pub const MAX_UNAUTHORIZED_RETRIES: u32 = 1;
/// Default look-back window, in hours, for sensor readings
pub const DEFAULT_READINGS_HOURS: u32 = 24;
/// Default look-back window, in days, for sensor statistics
pub const DEFAULT_STATISTICS_DAYS: u32 = 7;
/// Login endpoint, relative to the base URL
pub const LOGIN_PATH: &str = "auth/login/";
/// Token refresh endpoint, relative to the base URL
pub const REFRESH_PATH: &str = "auth/refresh/";
