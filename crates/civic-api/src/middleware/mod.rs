pub mod cors;
pub mod panic;
pub mod request_id;
pub mod security_headers;
