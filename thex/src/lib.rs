//! The hex image format produced by the assembler and consumed by the
//! processor's block RAM.
//!
//! An image is plain ASCII: a first line of the form
//! `// <input-filename> file`, then one instruction word per line as
//! exactly four lowercase hex digits. There are no addresses and no
//! length prefix; the words are loaded into memory starting at address
//! zero, in order.

use log::debug;
use std::fmt;
use std::fs::File;
use std::io::prelude::*;
use std::io::{BufReader, BufWriter};
use std::path::Path;

#[derive(Debug, PartialEq)]
pub struct Image {
    source: String,
    words: Vec<u16>,
}

impl Image {
    pub fn from(source: String, words: Vec<u16>) -> Image {
        Image { source, words }
    }

    /// Name of the source file the image was assembled from, as
    /// recorded in the header comment.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn words(&self) -> &[u16] {
        &self.words[..]
    }
}

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    InvalidWord { line: usize, text: String },
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::Io(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "{}", err),
            Error::InvalidWord { line, text } => {
                write!(f, "line {}: invalid word \"{}\"", line, text)
            }
        }
    }
}

impl std::error::Error for Error {}

pub fn read<R: BufRead>(reader: &mut R) -> Result<Image, Error> {
    let mut source = String::new();
    let mut words = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        if text.starts_with("//") {
            if index == 0 {
                source = header_source(text);
            }
            continue;
        }
        let word = u16::from_str_radix(text, 16).map_err(|_| Error::InvalidWord {
            line: index + 1,
            text: text.to_owned(),
        })?;
        words.push(word);
    }

    debug!(target: "thex", "read {} words", words.len());
    Ok(Image { source, words })
}

pub fn write<W: Write>(writer: &mut W, image: &Image) -> std::io::Result<()> {
    writeln!(writer, "// {} file", image.source)?;
    for word in &image.words {
        writeln!(writer, "{:04x}", word)?;
    }
    debug!(target: "thex", "wrote {} words", image.words.len());
    Ok(())
}

fn header_source(text: &str) -> String {
    text.trim_start_matches('/')
        .trim()
        .trim_end_matches(" file")
        .to_owned()
}

pub trait ReadHexExt: BufRead + Sized {
    fn read_hex(&mut self) -> Result<Image, Error> {
        read(self)
    }
}

impl<R: BufRead + Sized> ReadHexExt for R {}

pub trait WriteHexExt: Write + Sized {
    fn write_hex(&mut self, image: &Image) -> std::io::Result<()> {
        write(self, image)
    }
}

impl<W: Write + Sized> WriteHexExt for W {}

pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Image, Error> {
    BufReader::new(File::open(path)?).read_hex()
}

pub fn write_file<P: AsRef<Path>>(path: P, image: &Image) -> std::io::Result<()> {
    BufWriter::new(File::create(path)?).write_hex(image)
}
