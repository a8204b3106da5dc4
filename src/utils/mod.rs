pub mod password;
pub mod redact;
