use log::debug;
use std::fmt;
use tangle::{Memory, Processor, Word};

#[derive(Debug)]
pub enum Error {
    Hex(thex::Error),
    /// The image does not fit the configured address space.
    Load(usize),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Hex(err) => write!(f, "Reading the image failed: {}", err),
            Error::Load(words) => {
                write!(f, "Image of {} words does not fit the address space", words)
            }
        }
    }
}

impl std::error::Error for Error {}

/// Runs `words` from address zero for a fixed budget of clock cycles.
///
/// Tangle has no halt instruction; the budget is the only stop. The
/// final machine state is returned for inspection.
pub fn run_words(
    words: &[Word],
    pc_width: u32,
    cycles: u64,
) -> Result<(Processor, Memory), Error> {
    let mut memory = Memory::with_pc_width(pc_width);
    memory
        .load_words(0, words)
        .map_err(|_| Error::Load(words.len()))?;

    let mut processor = Processor::new(pc_width);
    for _ in 0..cycles {
        processor.tick(&mut memory);
    }

    Ok((processor, memory))
}

/// Loads the hex image at `path` and runs it.
pub fn run_image(path: &str, pc_width: u32, cycles: u64) -> Result<(Processor, Memory), Error> {
    let image = thex::read_file(path).map_err(Error::Hex)?;
    debug!(
        target: "trun",
        "loaded {} words from {}",
        image.words().len(),
        path
    );
    run_words(image.words(), pc_width, cycles)
}
