use std::{
    env,
    io::{self, Read},
    process::ExitCode,
};

use jmespath_core as jmespath;
use jmespath::{parse, search, Value};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    let expression = match args.get(1) {
        Some(expression) => expression,
        None => {
            eprintln!("usage: jp <expression>");
            eprintln!("The input JSON document is read from standard input.");
            return ExitCode::FAILURE;
        }
    };

    let mut buffer = String::new();
    if let Err(err) = io::stdin().read_to_string(&mut buffer) {
        eprintln!("failed to read from standard input: {}", err);
        return ExitCode::FAILURE;
    }

    let value = match Value::from_json(buffer.trim_end_matches(|c| c == '\r' || c == '\n')) {
        Ok(value) => value,
        Err(err) => {
            eprintln!("invalid JSON input: {}", err);
            return ExitCode::FAILURE;
        }
    };

    match parse(expression) {
        Ok(ast) => {
            if env::var_os("JP_DEBUG").is_some() {
                eprintln!("{}", ast);
            }
        }
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    }

    match search(expression, &value) {
        Ok(result) => {
            println!("{}", result.to_json());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
