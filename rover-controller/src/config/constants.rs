// WiFi station credentials
pub const WIFI_SSID: &str = "your-ssid";
pub const WIFI_PASS: &str = "your-password";

// Control server config
pub const HTTP_SERVER_PORT: u16 = 80;
