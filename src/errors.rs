use std::fmt;

/// An error that can occur when encoding or decoding Z85 data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
}

impl Error {
    pub(crate) fn new(kind: ErrorKind) -> Error {
        Error { kind }
    }

    /// Return the specific type of error
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Returns the byte offset into the encoded input that the error occurs (if available)
    pub fn offset(&self) -> Option<usize> {
        self.kind.offset()
    }
}

/// Specific type of error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller supplied destination buffer is smaller than required
    InsufficientDestinationLength { want: usize, got: usize },

    /// Encoded input length is not a multiple of 5
    InvalidEncodedLength(usize),

    /// A byte outside of the Z85 alphabet was encountered
    InvalidEncodedByte { byte: u8, offset: usize },

    /// The trailing marker block is malformed. A zero payload means that no
    /// marker was found at all.
    InvalidPostfix(u8),
}

impl ErrorKind {
    pub fn offset(&self) -> Option<usize> {
        match *self {
            ErrorKind::InvalidEncodedByte { offset, .. } => Some(offset),
            _ => None,
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error::new(kind)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            ErrorKind::InsufficientDestinationLength { want, got } => {
                write!(f, "insufficient destination length: {} < {}", got, want)
            }
            ErrorKind::InvalidEncodedLength(n) => write!(f, "invalid encoded length: {}", n),
            ErrorKind::InvalidEncodedByte { byte, offset } => write!(
                f,
                "invalid encoded byte: {:?} (0x{:02x}) at offset {}",
                char::from(byte),
                byte,
                offset
            ),
            ErrorKind::InvalidPostfix(0) => write!(f, "invalid postfix"),
            ErrorKind::InvalidPostfix(x) => write!(f, "invalid postfix: 0x{:02x}", x),
        }
    }
}
