use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();
    let mut stdin = std::io::stdin().lock();
    let mut stdout = std::io::stdout();
    let result = charstrip::run_command(&mut stdin, &mut stdout, std::env::args());
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
