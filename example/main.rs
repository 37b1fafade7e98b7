use std::{env, error::Error};
use httpstatus::{HttpStatus, registry};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args = env::args().skip(1).collect::<Vec<_>>();
    if args.is_empty() {
        for status in registry::codes() {
            report(status);
        }
        return Ok(());
    }

    for arg in args {
        let status = HttpStatus::new(arg.parse()?);
        report(status);
    }

    Ok(())
}

fn report(status: HttpStatus) {
    let phrase = match status.code_with_reason_phrase() {
        Ok(line) => line,
        Err(err) => err.to_string(),
    };

    match status.series() {
        Ok(series) if series.is_error() => println!("> {phrase} [{series}, error]"),
        Ok(series) => println!("> {phrase} [{series}]"),
        Err(err) => println!("> {phrase} [{err}]"),
    }
}
