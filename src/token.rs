use super::error::*;

///
/// A token read from SVG path data
///
#[derive(Clone, Debug, PartialEq)]
pub enum PathToken {
    /// A single letter naming a command (not checked against the known operators)
    Operator(char),

    /// The text of a number, not yet parsed
    Operand(String),
}

///
/// Accumulates the characters of the operand that is currently being read
///
struct OperandBuffer {
    /// Characters read so far
    operand: String,

    /// Tokens generated so far
    tokens: Vec<PathToken>
}

impl OperandBuffer {
    fn new() -> OperandBuffer {
        OperandBuffer {
            operand:    String::new(),
            tokens:     vec![]
        }
    }

    ///
    /// Adds the current operand to the list of tokens, if there is one
    ///
    #[inline]
    fn flush(&mut self) {
        if !self.operand.is_empty() {
            let operand = std::mem::replace(&mut self.operand, String::new());
            self.tokens.push(PathToken::Operand(operand));
        }
    }

    ///
    /// Adds a '.' to the current operand, starting a new operand if there's already a decimal point
    ///
    fn decimal_point(&mut self) {
        if self.operand.is_empty() {
            // '.3' is read as '0.3'
            self.operand.push('0');
        } else if self.operand.contains('.') {
            // '.2.3' is two numbers
            self.flush();
            self.operand.push('0');
        }

        self.operand.push('.');
    }

    ///
    /// Adds a '-' to the current operand, which is part of an exponent or starts a new number
    ///
    fn minus(&mut self) {
        if self.operand.ends_with('e') {
            self.operand.push('-');
        } else {
            self.flush();
            self.operand.push('-');
        }
    }

    fn operator(&mut self, symbol: char) {
        self.flush();
        self.tokens.push(PathToken::Operator(symbol));
    }

    fn finish(mut self) -> Vec<PathToken> {
        self.flush();
        self.tokens
    }
}

///
/// Splits SVG path data into operators and operands
///
/// Numbers do not need to be separated when the boundary is unambiguous: `10-20` is two
/// numbers, as is `.2.3`. The sign after an `e` is part of the exponent.
///
pub fn tokenize_path_data(raw: &str) -> Result<Vec<PathToken>, PathError> {
    let mut buffer = OperandBuffer::new();

    for chr in raw.chars() {
        match chr {
            '.'                                 => buffer.decimal_point(),
            '0'..='9' | 'e'                     => buffer.operand.push(chr),
            '-'                                 => buffer.minus(),
            'a'..='z' | 'A'..='Z'               => buffer.operator(chr),
            ','                                 => buffer.flush(),
            chr if chr.is_whitespace()          => buffer.flush(),

            _                                   => return Err(PathError::UnrecognizedSymbol(chr))
        }
    }

    Ok(buffer.finish())
}

#[cfg(test)]
mod test {
    use super::*;

    fn operand(value: &str) -> PathToken {
        PathToken::Operand(value.to_string())
    }

    #[test]
    fn empty_data_has_no_tokens() {
        assert!(tokenize_path_data("").unwrap().is_empty());
        assert!(tokenize_path_data(" \t\n, ").unwrap().is_empty());
    }

    #[test]
    fn separators_split_operands() {
        let tokens = tokenize_path_data("M 10,20 L30 , 40").unwrap();

        assert!(tokens == vec![
            PathToken::Operator('M'), operand("10"), operand("20"),
            PathToken::Operator('L'), operand("30"), operand("40")
        ]);
    }

    #[test]
    fn leading_decimal_point_gets_zero() {
        let tokens = tokenize_path_data("M.5").unwrap();

        assert!(tokens == vec![PathToken::Operator('M'), operand("0.5")]);
    }

    #[test]
    fn adjacent_decimals_are_split() {
        let tokens = tokenize_path_data(".2.3").unwrap();

        assert!(tokens == vec![operand("0.2"), operand("0.3")]);
    }

    #[test]
    fn second_decimal_point_after_digits_starts_new_operand() {
        let tokens = tokenize_path_data("1.5.25").unwrap();

        assert!(tokens == vec![operand("1.5"), operand("0.25")]);
    }

    #[test]
    fn minus_starts_new_operand() {
        let tokens = tokenize_path_data("10-20").unwrap();

        assert!(tokens == vec![operand("10"), operand("-20")]);
    }

    #[test]
    fn minus_after_exponent_is_kept() {
        let tokens = tokenize_path_data("200e-2-1").unwrap();

        assert!(tokens == vec![operand("200e-2"), operand("-1")]);
    }

    #[test]
    fn double_minus_produces_bare_sign() {
        let tokens = tokenize_path_data("10--1").unwrap();

        assert!(tokens == vec![operand("10"), operand("-"), operand("-1")]);
    }

    #[test]
    fn operator_terminates_operand() {
        let tokens = tokenize_path_data("L30,30Z").unwrap();

        assert!(tokens == vec![PathToken::Operator('L'), operand("30"), operand("30"), PathToken::Operator('Z')]);
    }

    #[test]
    fn upper_case_e_is_an_operator() {
        let tokens = tokenize_path_data("1E5").unwrap();

        assert!(tokens == vec![operand("1"), PathToken::Operator('E'), operand("5")]);
    }

    #[test]
    fn unknown_characters_are_rejected() {
        assert!(tokenize_path_data("M 10 7%4 Z") == Err(PathError::UnrecognizedSymbol('%')));
        assert!(tokenize_path_data("M +1 2") == Err(PathError::UnrecognizedSymbol('+')));
    }
}
