//! Config given as command line arguments

use std::{net::SocketAddr, path::PathBuf};

use clap::{Args, arg};

#[derive(Args, Debug, Clone, Default)]
pub struct ServerModeArgs {
    /// Set data directory. Overrides config file value.
    #[arg(short, long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Use in RAM mode for SQLite. Requires debug mode.
    #[arg(short, long)]
    pub sqlite_in_ram: bool,

    /// Set public API socket address. Overrides config file value.
    #[arg(long, value_name = "ADDR")]
    pub public_api: Option<SocketAddr>,
}
