use std::process::ExitCode;

fn main() -> ExitCode {
    match busview_lib::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("busview: {err:#}");
            ExitCode::FAILURE
        }
    }
}
