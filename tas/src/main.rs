#[macro_use]
extern crate clap;

use clap::Arg;
use std::fs::File;
use std::io::prelude::*;
use std::io::BufReader;
use std::process;

fn main() {
    pretty_env_logger::init();

    let matches = app_from_crate!()
        .arg(
            Arg::with_name("INPUT")
                .help("Sets the input file to assemble")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .takes_value(true)
                .value_name("OUTPUT")
                .default_value("ram.hex")
                .help("Sets the output file to write to"),
        )
        .get_matches_safe()
        .unwrap_or_else(|err| {
            // usage and argument errors exit with failure status
            eprintln!("{}", err.message);
            process::exit(1);
        });

    let input = matches.value_of("INPUT").unwrap();
    let output = matches.value_of("output").unwrap();

    process::exit(run(input, output));
}

fn run(input: &str, output: &str) -> i32 {
    let source = match read_source(input) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("{}: Error: {}", input, err);
            return 1;
        }
    };

    let words = match tas::assemble(&source) {
        Ok(words) => words,
        Err(diagnostics) => {
            for diagnostic in &diagnostics {
                eprintln!("{}", diagnostic.render(input));
            }
            return 1;
        }
    };

    let image = thex::Image::from(input.to_owned(), words);
    if let Err(err) = thex::write_file(output, &image) {
        eprintln!("{}: Error: {}", output, err);
        return 1;
    }

    0
}

fn read_source(path: &str) -> std::io::Result<String> {
    let mut source = String::new();
    BufReader::new(File::open(path)?).read_to_string(&mut source)?;
    Ok(source)
}
