use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Input table, relative to the working directory.
pub const DATA_FILE: &str = "co2_data_clean.csv";
pub const DEFAULT_PORT: u16 = 7860;

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

/// Fixed runtime settings. There are no flags or environment overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub data_path: PathBuf,
    pub host: IpAddr,
    pub port: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DATA_FILE),
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

impl Settings {
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
