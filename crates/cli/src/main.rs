use std::process::ExitCode;

fn main() -> ExitCode {
    facecut_cli::run()
}
