/// Environment variables read by the command line.
pub mod env {
    pub const CONFIG_FILE_PATH: &str = "KOLLECT_CONFIG_FILE_PATH";

    pub const LOG_LEVEL: &str = "KOLLECT_LOG_LEVEL";

    pub const NAMESPACE: &str = "KOLLECT_NAMESPACE";
}
