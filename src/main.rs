use std::process::ExitCode;

fn main() -> ExitCode {
    if !fbchart::telemetry::init_default_tracing() {
        tracing::debug!("default tracing subscriber not installed");
    }

    match fbchart::app::run(std::env::args_os()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if err.is_notice() {
                println!("{err}");
            } else {
                eprintln!("error: {err}");
            }
            ExitCode::from(err.exit_code())
        }
    }
}
