pub mod http_client;
pub mod time;
pub mod urls;
