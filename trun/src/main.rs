#[macro_use]
extern crate clap;

use clap::Arg;

#[derive(Debug)]
enum Error {
    Run(trun::Error),
    Clap(clap::Error),
}

fn main() -> Result<(), Error> {
    pretty_env_logger::init();

    let matches = app_from_crate!()
        .arg(
            Arg::with_name("PROGRAM")
                .help("Sets the hex image to execute")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("cycles")
                .short("c")
                .long("cycles")
                .takes_value(true)
                .value_name("CYCLES")
                .default_value("10000")
                .help("Sets the clock cycle budget"),
        )
        .arg(
            Arg::with_name("pc_width")
                .short("w")
                .long("pc-width")
                .takes_value(true)
                .value_name("WIDTH")
                .default_value("6")
                .help("Sets the program counter width in bits"),
        )
        .get_matches();

    let program = matches.value_of("PROGRAM").unwrap();
    let cycles = value_t!(matches.value_of("cycles"), u64).map_err(Error::Clap)?;
    let pc_width = value_t!(matches.value_of("pc_width"), u32).map_err(Error::Clap)?;

    let (processor, _memory) = trun::run_image(program, pc_width, cycles).map_err(Error::Run)?;

    println!("pc    = {:#06x}", processor.program_counter());
    println!("flags = {:?}", processor.flags());
    for index in 0..8u16 {
        println!(
            "r{}    = {:#06x}",
            index,
            processor.registers()[index as usize]
        );
    }

    Ok(())
}
