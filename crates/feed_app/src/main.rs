mod terminal;

fn main() -> std::process::ExitCode {
    match terminal::run_app() {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("episode feed failed to start: {err}");
            std::process::ExitCode::FAILURE
        }
    }
}
