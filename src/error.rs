use std::fmt;
use std::error::Error;

///
/// Reasons why a string of path data could not be parsed
///
/// The messages generated by `Display` are stable, as callers match against their prefixes
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum PathError {
    /// A character that is not part of a number, an operator or a separator
    UnrecognizedSymbol(char),

    /// An operand could not be read as a floating-point number (contains the operand text)
    InvalidParameter(String),

    /// A letter that does not name a path operator
    InvalidCommand(char),

    /// The operands following a command are not a non-zero multiple of its parameter count
    IncorrectParameterCount(char),

    /// The path data is not empty but does not begin with 'm' or 'M' (contains the path data)
    MissingMoveTo(String),
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use self::PathError::*;

        match self {
            UnrecognizedSymbol(symbol)      => write!(f, "Unrecognized symbol '{}'", symbol),
            InvalidParameter(_)             => write!(f, "Invalid parameter syntax"),
            InvalidCommand(symbol)          => write!(f, "Invalid command '{}'", symbol),
            IncorrectParameterCount(symbol) => write!(f, "Incorrect number of parameters for {}", symbol),
            MissingMoveTo(raw)              => write!(f, "Path data does not start with a moveto command: {}", raw),
        }
    }
}

impl Error for PathError { }

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn invalid_parameter_hides_operand_text() {
        let error = PathError::InvalidParameter("--1".to_string());

        assert!(error.to_string() == "Invalid parameter syntax");
    }

    #[test]
    fn missing_move_to_includes_path_data() {
        let error = PathError::MissingMoveTo("L 1 2".to_string());

        assert!(error.to_string() == "Path data does not start with a moveto command: L 1 2");
    }

    #[test]
    fn can_use_as_boxed_error() {
        let error: Box<dyn Error> = Box::new(PathError::InvalidCommand('x'));

        assert!(error.to_string() == "Invalid command 'x'");
    }
}
