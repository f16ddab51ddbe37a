//! Simple command that prints one or '-n count' UUIDs of a chosen version

use std::{env, io, io::Write, process::ExitCode};

use uuidkit::{generate, GenerationOptions, SupportedVersion};

fn main() -> io::Result<ExitCode> {
    let (version, count) = {
        let mut args = env::args();
        let program = args.next();
        match parse_args(args) {
            Ok(parsed) => parsed,
            Err(message) => {
                eprintln!("Error: {}", message);
                eprintln!(
                    "Usage: {} [-v 1|4|7] [-n count]",
                    program.as_deref().unwrap_or("uuidkit")
                );
                return Ok(ExitCode::FAILURE);
            }
        }
    };

    let options = GenerationOptions::default();
    let mut buf = io::BufWriter::new(io::stdout());
    for _ in 0..count {
        writeln!(buf, "{}", generate(version, &options))?;
    }

    Ok(ExitCode::SUCCESS)
}

fn parse_args(
    mut args: impl Iterator<Item = String>,
) -> Result<(SupportedVersion, usize), String> {
    let mut version = None;
    let mut count = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-n" => {
                if count.is_some() {
                    return Err("option 'n' given more than once".to_owned());
                }
                let Some(n_arg) = args.next() else {
                    return Err("argument to option 'n' missing".to_owned());
                };
                let Ok(c) = n_arg.parse() else {
                    return Err(format!("invalid argument to option 'n': '{}'", n_arg));
                };
                count.replace(c);
            }
            "-v" => {
                if version.is_some() {
                    return Err("option 'v' given more than once".to_owned());
                }
                version.replace(match args.next().as_deref() {
                    Some("1") => SupportedVersion::V1,
                    Some("4") => SupportedVersion::V4,
                    Some("7") => SupportedVersion::V7,
                    Some(other) => {
                        return Err(format!("invalid argument to option 'v': '{}'", other))
                    }
                    None => return Err("argument to option 'v' missing".to_owned()),
                });
            }
            _ => return Err(format!("unrecognized argument '{}'", arg)),
        }
    }
    Ok((
        version.unwrap_or(SupportedVersion::V7),
        count.unwrap_or(1),
    ))
}
