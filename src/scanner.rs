use crate::error::Error;

/// Saved scanner position used to undo a failed speculative parse
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Checkpoint(usize);

impl Checkpoint {
    pub fn position(self) -> usize {
        self.0
    }
}

/// Cursor over a token sequence
///
/// A scanner is owned by exactly one parse session and handed to parsers as
/// `&mut Scanner`. The position only moves forward through [`Scanner::advance`]
/// and backward through [`Scanner::restore`]; parsers never copy it implicitly.
#[derive(Debug)]
pub struct Scanner<'code, T> {
    data: &'code [T],
    position: usize,
}

impl<'code, T> Scanner<'code, T> {
    pub fn new(data: &'code [T]) -> Self {
        Scanner { data, position: 0 }
    }

    /// Start scanning at `position` instead of the beginning of `data`
    ///
    /// Positions past the end are clamped to `data.len()`.
    pub fn at(data: &'code [T], position: usize) -> Self {
        Scanner {
            data,
            position: position.min(data.len()),
        }
    }

    /// Get the token at the cursor
    ///
    /// Reading at end of input is a caller bug, not a parse mismatch, so it
    /// returns [`Error::OutOfBounds`]. Parsers that want to fail gracefully
    /// use [`Scanner::peek`] instead.
    pub fn current(&self) -> Result<&'code T, Error> {
        self.data.get(self.position).ok_or(Error::OutOfBounds {
            position: self.position,
            len: self.data.len(),
        })
    }

    pub fn peek(&self) -> Option<&'code T> {
        self.data.get(self.position)
    }

    /// Look `n` tokens past the cursor without moving it
    pub fn peek_nth(&self, n: usize) -> Option<&'code T> {
        self.position
            .checked_add(n)
            .and_then(|index| self.data.get(index))
    }

    /// Move the cursor forward by one token
    pub fn advance(&mut self) -> Result<(), Error> {
        if self.at_end() {
            return Err(Error::OutOfBounds {
                position: self.position,
                len: self.data.len(),
            });
        }
        self.position += 1;
        Ok(())
    }

    pub fn at_end(&self) -> bool {
        self.position >= self.data.len()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn remaining(&self) -> &'code [T] {
        &self.data[self.position..]
    }

    pub fn source(&self) -> &'code [T] {
        self.data
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.position)
    }

    /// Return the cursor to a previously saved position
    ///
    /// Checkpoints from another scanner over longer input are clamped to the
    /// end of this one.
    pub fn restore(&mut self, checkpoint: Checkpoint) {
        self.position = checkpoint.0.min(self.data.len());
    }
}
