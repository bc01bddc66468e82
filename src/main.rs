use log::debug;
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use varcalc::Evaluator;

fn read_expression() -> io::Result<String> {
    print!("Enter expression: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn report(err: &dyn Error) {
    eprintln!("{}", err);
    let mut cause = err.source();
    while let Some(inner) = cause {
        eprintln!("  caused by: {}", inner);
        cause = inner.source();
    }
}

fn main() -> ExitCode {
    pretty_env_logger::init();

    let expression = match read_expression() {
        Ok(expression) => expression,
        Err(err) => {
            report(&err);
            return ExitCode::FAILURE;
        }
    };
    debug!("Read expression: {:?}", expression);

    let mut evaluator = Evaluator::console();
    match evaluator.evaluate(&expression) {
        Ok(value) => {
            println!("Result: {:?}", value);
            ExitCode::SUCCESS
        }
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}
