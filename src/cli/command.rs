use clap::Parser;
use std::net::SocketAddr;

use crate::storage::DEFAULT_JSON_PATH;

#[derive(Parser, Debug)]
#[command(name = "rolodex-web", version, about = "Contact book web service")]
pub struct Cli {
    /// Address the HTTP server listens on
    #[arg(long, env = "ROLODEX_BIND", default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,

    /// Storage choice (mem, json) are available
    #[arg(long, env = "STORAGE_CHOICE", default_value_t = String::from("json"))]
    pub storage_choice: String,

    /// Path of the contacts file when using json storage
    #[arg(long, env = "JSON_STORAGE_PATH", default_value_t = String::from(DEFAULT_JSON_PATH))]
    pub json_path: String,

    /// Fill an empty contact book with a few starter contacts
    #[arg(long, env = "ROLODEX_SEED")]
    pub seed: bool,
}
