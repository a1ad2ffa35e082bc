mod config;
mod do_main;
mod error;
mod logger;

use self::config::*;
use self::do_main::*;
use self::error::*;
use self::logger::*;

use std::process::ExitCode;

fn main() -> ExitCode {
    match do_main() {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
