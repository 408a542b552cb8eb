use derive_more::Display;

#[derive(Debug, Display)]
pub enum Error { 
    /// An input that violates an algorithmic precondition, e.g. a
    /// column referring to an index that is not strictly smaller than
    /// its own. Never recovered from.
    #[display("precondition violated: {_0}")]
    Precondition(String),

    /// Malformed external input, detected before any matrix is built.
    #[display("format error: {_0}")]
    Format(String),

    #[display("io error: {_0}")]
    Io(std::io::Error),
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self { 
            Error::Io(e) => Some(e),
            _ => None
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl Error { 
    pub fn is_precondition(&self) -> bool { 
        matches!(self, Error::Precondition(_))
    }

    pub fn is_format(&self) -> bool { 
        matches!(self, Error::Format(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[macro_export]
macro_rules! err {
    ($kind:ident, $($arg:tt)*) => {{
        Err($crate::Error::$kind(format!($($arg)*)))
    }}
}

#[macro_export]
macro_rules! ensure {
    ($cond:expr, $kind:ident, $($arg:tt)*) => {{
        if !$cond { 
            return $crate::err!($kind, $($arg)*);
        }
    }}
}
