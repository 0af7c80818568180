use std::process::ExitCode;

fn main() -> ExitCode {
    ExitCode::from(configtx_cli::commands::run_from(std::env::args_os()))
}
