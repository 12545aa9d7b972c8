pub mod header {
    pub const IF_MATCH: &str = "if-match";
    pub const IF_NONE_MATCH: &str = "if-none-match";
    pub const IF_MODIFIED_SINCE: &str = "if-modified-since";
    pub const IF_UNMODIFIED_SINCE: &str = "if-unmodified-since";
    pub const ETAG: &str = "etag";
    pub const LAST_MODIFIED: &str = "last-modified";
}

pub mod method {
    pub const CONNECT: &str = "CONNECT";
    pub const DELETE: &str = "DELETE";
    pub const GET: &str = "GET";
    pub const HEAD: &str = "HEAD";
    pub const OPTIONS: &str = "OPTIONS";
    pub const PATCH: &str = "PATCH";
    pub const POST: &str = "POST";
    pub const PUT: &str = "PUT";
    pub const TRACE: &str = "TRACE";
}

pub mod status {
    pub const NOT_MODIFIED: u16 = 304;
    pub const BAD_REQUEST: u16 = 400;
    pub const PRECONDITION_FAILED: u16 = 412;
    pub const INTERNAL_SERVER_ERROR: u16 = 500;
    /// Responses at or above this code never receive validator headers.
    pub const REDIRECTION: u16 = 300;
}
