//! CLI argument parsing

#[derive(Debug, Clone)]
pub struct CliArgs {
    pub command: Command,
}

#[derive(Debug, Clone)]
pub enum Command {
    Help,
    Version,
    Stamp(StampArgs),
}

#[derive(Debug, Clone, Default)]
pub struct StampArgs {
    pub output: String,
}

/// Parse command line arguments
pub fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    if args.len() < 2 {
        return Err("Missing required argument: OUTPUT_FILE".to_string());
    }

    let command = match args[1].as_str() {
        "--help" | "-h" => Command::Help,
        "--version" | "-v" => Command::Version,
        _ => Command::Stamp(parse_stamp_args(&args[1..])?),
    };

    Ok(CliArgs { command })
}

fn parse_stamp_args(args: &[String]) -> Result<StampArgs, String> {
    let mut stamp_args = StampArgs::default();

    for arg in args {
        match arg.as_str() {
            // A lone "-" is not a usable file name either.
            arg if arg.starts_with('-') => return Err(format!("Unknown option: {arg}")),
            arg => {
                if stamp_args.output.is_empty() {
                    stamp_args.output = arg.to_string();
                } else {
                    return Err(format!("Unexpected argument: {arg}"));
                }
            }
        }
    }

    if stamp_args.output.is_empty() {
        return Err("Missing required argument: OUTPUT_FILE".to_string());
    }

    Ok(stamp_args)
}
