use crate::{constants, Endian, Word};
use byteorder::ByteOrder;

/// A word-addressed memory storage unit. Tangle has no byte accesses;
/// one address names one 16-bit slot, shared by instructions and data.
pub trait Storage {
    /// Total number of addressable words.
    fn length(&self) -> u32;

    fn check_address(&self, address: Word) -> bool {
        u32::from(address) < self.length()
    }

    /// Reads the word at `address`.
    ///
    /// # Errors
    /// Returns an error if `address` is not addressable.
    fn read_word(&self, address: Word) -> Result<Word, ()>;

    /// Writes `value` to the word at `address`.
    ///
    /// # Errors
    /// Returns an error if `address` is not addressable.
    fn write_word(&mut self, address: Word, value: Word) -> Result<(), ()>;
}

/// A contiguous block of word-addressed memory.
pub struct Memory {
    data: Vec<u8>,
}

impl Memory {
    /// Constructs a zeroed `Memory` with space for `length` words.
    pub fn new(length: u32) -> Memory {
        Memory {
            data: vec![0; (length * constants::WORD_BYTES) as usize],
        }
    }

    /// Constructs the unified instruction/data RAM for a program
    /// counter of `width` bits: `2^width` words.
    pub fn with_pc_width(width: u32) -> Memory {
        assert!(width >= 1 && width <= constants::MAX_PC_WIDTH);
        Memory::new(1u32 << width)
    }

    /// Returns the backing store as raw bytes.
    pub fn data(&self) -> &[u8] {
        &self.data[..]
    }

    /// Copies `words` into memory starting at word address `offset`.
    ///
    /// # Errors
    /// Returns an error if the image does not fit.
    pub fn load_words(&mut self, offset: Word, words: &[Word]) -> Result<(), ()> {
        if u32::from(offset) + words.len() as u32 > self.length() {
            return Err(());
        }
        for (i, &word) in words.iter().enumerate() {
            self.write_word(offset + i as Word, word)?;
        }
        Ok(())
    }
}

impl Storage for Memory {
    fn length(&self) -> u32 {
        self.data.len() as u32 / constants::WORD_BYTES
    }

    fn read_word(&self, address: Word) -> Result<Word, ()> {
        if self.check_address(address) {
            let start = usize::from(address) * constants::WORD_BYTES as usize;
            Ok(Endian::read_u16(&self.data[start..]))
        } else {
            Err(())
        }
    }

    fn write_word(&mut self, address: Word, value: Word) -> Result<(), ()> {
        if self.check_address(address) {
            let start = usize::from(address) * constants::WORD_BYTES as usize;
            Endian::write_u16(&mut self.data[start..start + 2], value);
            Ok(())
        } else {
            Err(())
        }
    }
}

impl<'a> From<&'a [Word]> for Memory {
    fn from(words: &'a [Word]) -> Memory {
        let mut memory = Memory::new(words.len() as u32);
        for (i, &word) in words.iter().enumerate() {
            // cannot fail, the memory was sized to fit
            let _ = memory.write_word(i as Word, word);
        }
        memory
    }
}
