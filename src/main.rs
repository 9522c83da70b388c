use std::env;
use std::process;

use log::LevelFilter;

use wordcalc::config::{parse_separator, Config};
use wordcalc::{evaluate, format_number_with, parse_number, tokenize};

/// The stderr logger for `--verbose`; no logger otherwise.
fn verbose_logger(verbose: bool) -> Option<env_logger::Logger> {
    verbose.then(|| {
        env_logger::Builder::new()
            .filter_level(LevelFilter::Trace)
            .format_timestamp(None)
            .build()
    })
}

fn usage() -> ! {
    eprintln!("wordcalc v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("Usage: wordcalc <expression words...> [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --parse          Read the input as one number phrase");
    eprintln!("  --format <n>     Format an integer and exit");
    eprintln!("  --separator <c>  Group separator for output (default ',')");
    eprintln!("  --raw            Print the result without grouping");
    eprintln!("  -v | --verbose   Log tokens and steps to stderr");
    eprintln!();
    eprintln!("Example: wordcalc three million multiplied by two");
    process::exit(1);
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        usage();
    }

    let mut config = Config::load();
    let mut parse_only = false;
    let mut raw = false;
    let mut format_value: Option<String> = None;
    let mut words: Vec<String> = Vec::new();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--parse" => parse_only = true,
            "--raw" => raw = true,
            "--verbose" | "-v" => config.verbose = true,
            "--help" | "-h" => usage(),
            "--format" => {
                i += 1;
                match args.get(i) {
                    Some(value) => format_value = Some(value.clone()),
                    None => usage(),
                }
            }
            "--separator" => {
                i += 1;
                match args.get(i).and_then(|s| parse_separator(s)) {
                    Some(c) => config.separator = c,
                    None => {
                        eprintln!("--separator takes exactly one character");
                        process::exit(1);
                    }
                }
            }
            word => words.push(word.to_string()),
        }
        i += 1;
    }

    if let Some(logger) = verbose_logger(config.verbose) {
        let level = logger.filter();
        if log::set_boxed_logger(Box::new(logger)).is_ok() {
            log::set_max_level(level);
        }
    }

    let render = |n: i64| {
        if raw {
            n.to_string()
        } else {
            format_number_with(n, config.separator)
        }
    };

    if let Some(value) = format_value {
        match value.trim().parse::<i64>() {
            Ok(n) => println!("{}", render(n)),
            Err(e) => {
                eprintln!("Cannot format '{}': {}", value, e);
                process::exit(1);
            }
        }
        return;
    }

    let input = words.join(" ");
    if input.trim().is_empty() {
        usage();
    }

    if parse_only {
        println!("{}", render(parse_number(&input)));
        return;
    }

    if config.verbose {
        for info in tokenize(&input) {
            eprintln!("  word {:>2}: {:?}", info.word, info.token);
        }
    }

    match evaluate(&input) {
        Ok(evaluation) => {
            if config.verbose {
                for warning in &evaluation.warnings {
                    match &warning.suggestion {
                        Some(s) => eprintln!(
                            "warning: ignored '{}' (did you mean '{}'?)",
                            warning.word, s
                        ),
                        None => eprintln!("warning: ignored '{}'", warning.word),
                    }
                }
            }
            println!("{}", render(evaluation.value));
        }
        Err(e) => {
            eprint!("{}", e.report(&input));
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_logger_traces_everything() {
        let logger = verbose_logger(true).unwrap();
        assert_eq!(logger.filter(), LevelFilter::Trace);
    }

    #[test]
    fn test_quiet_installs_no_logger() {
        assert!(verbose_logger(false).is_none());
    }
}
