use crate::{KeyStyle, Options, transform_to_string, transform_to_string_with_log};
use std::env;
use std::fs;
use std::io::{self, BufWriter, Read, Write};

fn print_help(program: &str) {
    eprintln!(
        "Usage: {prog} [OPTIONS] [INPUT]\n\
         \n\
         INPUT: optional input file. When omitted, reads from stdin.\n\
         \n\
         Options:\n\
           -o, --output FILE    Write output to FILE (default stdout)\n\
               --in-place       Overwrite INPUT file\n\
               --strict-keys    Keep double quotes around keys (strict JSON)\n\
               --no-rename      Reformat only, keep original key names\n\
               --compact        Single-line output instead of pretty-printing\n\
               --indent N       Spaces per nesting level (default 2)\n\
               --verbose        Print the transform log to stderr\n\
           -h, --help           Show this help\n",
        prog = program
    );
}

fn parse_args() -> (Options, CliMode) {
    let mut args: Vec<String> = env::args().collect();
    let program = args
        .first()
        .cloned()
        .unwrap_or_else(|| "deepcamel".to_string());
    args.remove(0);

    let mut opts = Options::default();
    let mut input: Option<String> = None;
    let mut output: Option<String> = None;
    let mut in_place = false;
    let mut verbose = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help(&program);
                std::process::exit(0);
            }
            "-o" | "--output" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Missing FILE for --output");
                    std::process::exit(2);
                }
                output = Some(args[i].clone());
            }
            "--in-place" => {
                in_place = true;
            }
            "--strict-keys" => {
                opts.strict_keys = true;
            }
            "--no-rename" => {
                opts.key_style = KeyStyle::Preserve;
            }
            "--compact" => {
                opts.compact = true;
            }
            "--indent" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Missing N for --indent");
                    std::process::exit(2);
                }
                opts.indent = args[i].parse().unwrap_or(2);
            }
            "--verbose" => {
                opts.logging = true;
                verbose = true;
            }
            s if s.starts_with('-') => {
                eprintln!("Unknown option: {}", s);
                std::process::exit(2);
            }
            path => {
                input = Some(path.to_string());
            }
        }
        i += 1;
    }

    let mode = CliMode {
        input,
        output,
        in_place,
        verbose,
    };
    (opts, mode)
}

struct CliMode {
    input: Option<String>,
    output: Option<String>,
    in_place: bool,
    verbose: bool,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (opts, mode) = parse_args();

    let content = match &mode.input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut s = String::new();
            io::stdin().read_to_string(&mut s)?;
            s
        }
    };

    let (mut out, log) = if mode.verbose {
        match transform_to_string_with_log(&content, &opts) {
            Ok(pair) => pair,
            Err(e) => return Err(format!("invalid input: {}", e).into()),
        }
    } else {
        match transform_to_string(&content, &opts) {
            Ok(s) => (s, Vec::new()),
            Err(e) => return Err(format!("invalid input: {}", e).into()),
        }
    };
    out.push('\n');

    for entry in &log {
        eprintln!("{}", serde_json::to_string(entry)?);
    }

    if mode.in_place {
        let inp = mode.input.as_ref().ok_or("--in-place requires INPUT file")?;
        fs::write(inp, out)?;
        return Ok(());
    }

    let mut writer: Box<dyn Write> = if let Some(ref o) = mode.output {
        Box::new(BufWriter::new(fs::File::create(o)?))
    } else {
        Box::new(BufWriter::new(io::stdout()))
    };
    writer.write_all(out.as_bytes())?;
    writer.flush()?;
    Ok(())
}
