#![deny(unsafe_code)]
#![deny(unused_must_use)]
#![deny(unused_features)]
#![warn(unused_crate_dependencies)]

pub mod args;

use std::process::ExitCode;

use config::{args::AppMode, get_config};
use server::{SocialBackendServer, api_doc::ApiDoc};

const BACKEND_SEMVER_VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> ExitCode {
    let args = match args::get_config() {
        Ok(args) => args,
        Err(e) => return e,
    };

    if let Some(AppMode::OpenApi) = args.mode {
        return match ApiDoc::open_api_json_string() {
            Ok(json) => {
                println!("{}", json);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("{:?}", e);
                ExitCode::FAILURE
            }
        };
    }

    let config = match get_config(args, BACKEND_SEMVER_VERSION.to_string()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{:?}", e);
            return ExitCode::FAILURE;
        }
    };

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Tokio runtime creation failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    runtime.block_on(async { SocialBackendServer::new(config).run().await });

    ExitCode::SUCCESS
}
