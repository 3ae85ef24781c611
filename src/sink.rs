use std::{error, fmt};

/// Errors produced by [`ByteSink`]'s positional writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Attempted to seek past the end of what has been written so far. A
    /// seek may land anywhere in `[0, len]`; landing past `len` would leave
    /// a gap of uninitialized bytes, which back-patching never needs.
    Seek { position: usize, len: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Seek { position, len } => {
                write!(f, "cannot seek to byte {position}, buffer has only {len} bytes")
            }
        }
    }
}

impl error::Error for Error {}

/// A growable, positional byte buffer. All multi-byte primitives are written
/// big-endian. Writes at the logical end grow the buffer; writes after a
/// [`set_position`](ByteSink::set_position) overwrite bytes already present,
/// which is what back-patching the name index relies on.
#[derive(Debug, Default, Clone)]
pub struct ByteSink {
    buf: Vec<u8>,
    pos: usize,
}

impl ByteSink {
    #[must_use]
    pub fn new() -> Self {
        Self {
            buf: Vec::new(),
            pos: 0,
        }
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
            pos: 0,
        }
    }

    /// Current write offset.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Moves the write cursor. `position` must not exceed the number of
    /// bytes written so far; there is no seeking past the end to leave a
    /// gap.
    pub fn set_position(&mut self, position: usize) -> Result<(), Error> {
        if position > self.buf.len() {
            return Err(Error::Seek {
                position,
                len: self.buf.len(),
            });
        }
        self.pos = position;
        Ok(())
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    fn write(&mut self, bytes: &[u8]) {
        let end = self.pos + bytes.len();
        if end > self.buf.len() {
            self.buf.resize(end, 0);
        }
        self.buf[self.pos..end].copy_from_slice(bytes);
        self.pos = end;
    }

    pub fn put_u8(&mut self, value: u8) {
        self.write(&[value]);
    }

    pub fn put_i8(&mut self, value: i8) {
        self.put_u8(value as u8);
    }

    pub fn put_bool(&mut self, value: bool) {
        self.put_u8(u8::from(value));
    }

    pub fn put_i16_be(&mut self, value: i16) {
        self.write(&value.to_be_bytes());
    }

    pub fn put_i32_be(&mut self, value: i32) {
        self.write(&value.to_be_bytes());
    }

    pub fn put_i64_be(&mut self, value: i64) {
        self.write(&value.to_be_bytes());
    }

    pub fn put_f32_be(&mut self, value: f32) {
        self.write(&value.to_be_bytes());
    }

    pub fn put_f64_be(&mut self, value: f64) {
        self.write(&value.to_be_bytes());
    }

    pub fn put_bytes(&mut self, bytes: &[u8]) {
        self.write(bytes);
    }
}

#[test]
fn test_sequential_writes_grow_the_buffer() {
    let mut sink = ByteSink::new();
    sink.put_i32_be(1);
    sink.put_u8(0xff);
    sink.put_i16_be(-1);
    assert_eq!(sink.position(), 7);
    assert_eq!(sink.as_bytes(), &[0, 0, 0, 1, 0xff, 0xff, 0xff]);
}

#[test]
fn test_set_position_overwrites_without_moving_the_end() {
    let mut sink = ByteSink::new();
    sink.put_i32_be(0);
    sink.put_i32_be(0);
    let end = sink.position();

    sink.set_position(0).unwrap();
    sink.put_i32_be(0x0102_0304);
    assert_eq!(sink.position(), 4);
    sink.set_position(end).unwrap();

    assert_eq!(
        sink.as_bytes(),
        &[0x01, 0x02, 0x03, 0x04, 0x00, 0x00, 0x00, 0x00]
    );
    assert_eq!(sink.position(), end);
}

#[test]
fn test_set_position_past_end_is_an_error() {
    let mut sink = ByteSink::new();
    sink.put_u8(0);
    assert_eq!(
        sink.set_position(5),
        Err(Error::Seek { position: 5, len: 1 })
    );
}

#[test]
fn test_put_bytes_and_into_bytes() {
    let mut sink = ByteSink::new();
    sink.put_bytes(&[1, 2, 3]);
    assert_eq!(sink.into_bytes(), vec![1, 2, 3]);
}
