use std::process::ExitCode;

fn main() -> ExitCode {
    current_focus_lib::run()
}
