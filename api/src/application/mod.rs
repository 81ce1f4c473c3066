pub mod http;
pub mod locale;
pub mod logging;
