use std::process::ExitCode;

use midi_cc_names::{cc, CCName, ControllerNumber, Error};

fn print_line(nb: ControllerNumber) {
    println!("{:>3}  {}", nb, nb.name());
}

fn lookup(arg: &str) -> Result<ControllerNumber, Error> {
    let nb: i64 = arg.trim().parse().map_err(|_| Error::Parse(arg.to_string()))?;

    ControllerNumber::try_from(nb)
}

fn main() -> ExitCode {
    let mut builder = env_logger::Builder::new();
    builder.filter_module("midi_cc_names", log::LevelFilter::Info);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        log::debug!("Listing all {} controllers", cc::NAMES.len());
        cc::names().for_each(|(nb, _)| print_line(nb));

        return ExitCode::SUCCESS;
    }

    let mut failed = false;
    for arg in args.iter() {
        match lookup(arg) {
            Ok(nb) => {
                log::trace!("{}", CCName(nb));
                print_line(nb);
            }
            Err(err) => {
                log::error!("{err}");
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

#[cfg(test)]
mod tests {
    use super::{lookup, Error};

    #[test]
    fn parse_args() {
        assert_eq!(lookup("64").unwrap().name(), "Sustain Pedal On/Off");
        assert_eq!(lookup(" 0 ").unwrap().as_u8(), 0);
        assert_eq!(lookup("-1").unwrap_err(), Error::ControllerNumberOutOfRange(-1));
        assert_eq!(lookup("volume").unwrap_err(), Error::Parse("volume".to_string()));
    }
}
