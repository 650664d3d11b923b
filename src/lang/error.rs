#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            message: String::new(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message<S: AsRef<str>>(&self, message: S) -> Error {
        debug_assert_eq!(self.message.len(), 0);
        Error {
            code: self.code,
            message: message.as_ref().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    SyntaxError,
    UnknownCommand,
    LineBufferOverflow,
    VariableNotFound,
    UndefinedLine,
    NoProgram,
    OutOfMemory,
    CannotLoad,
    CannotSave,
    CannotAccess,
    NotImplemented,
    Break,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {:?}: {} }}", self.code, self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ErrorCode::*;
        let msg = &self.message;
        match self.code {
            SyntaxError => write!(f, "Error: {}", msg),
            UnknownCommand => write!(
                f,
                "Unknown command: {}\nType HELP for available commands",
                msg
            ),
            LineBufferOverflow => write!(f, "Error: Line buffer overflow"),
            VariableNotFound => write!(f, "Error: Variable ${} not found", msg),
            UndefinedLine => write!(f, "Line {} not found", msg),
            NoProgram => write!(f, "Error: No program loaded"),
            OutOfMemory => write!(f, "Error: Maximum variables exceeded"),
            CannotLoad => write!(f, "Error: Cannot load file '{}'", msg),
            CannotSave => write!(f, "Error: Cannot save to file '{}'", msg),
            CannotAccess => write!(f, "Error: Cannot access {}", msg),
            NotImplemented => write!(f, "Error: {} not implemented in this version", msg),
            Break => write!(f, "Break"),
        }
    }
}
