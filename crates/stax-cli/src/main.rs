use std::process::ExitCode;

fn main() -> ExitCode {
    match stax_cli::run(std::env::args_os()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("stax: {err:#}");
            ExitCode::FAILURE
        }
    }
}
