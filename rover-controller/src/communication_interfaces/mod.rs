pub mod http_control;
pub mod wifi;
