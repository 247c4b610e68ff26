use super::error::*;
use super::token::*;
use super::operator::*;

///
/// A single command from SVG path data: an operator symbol and its parameters
///
/// The case of the symbol indicates whether or not the coordinates are absolute
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PathCommand {
    /// The symbol for this command ('M', 'l', 'Z', etc)
    pub symbol: char,

    /// The parameters for this command, in the order they appear in the path data
    pub params: Vec<f64>
}

impl PathCommand {
    ///
    /// Creates a new path command
    ///
    pub fn new(symbol: char, params: Vec<f64>) -> PathCommand {
        PathCommand { symbol, params }
    }

    ///
    /// True if this command uses absolute coordinates (has an upper-case symbol)
    ///
    #[inline]
    pub fn is_absolute(&self) -> bool {
        self.symbol == self.symbol.to_ascii_uppercase()
    }

    ///
    /// The operator for this command, if the symbol is a known one
    ///
    #[inline]
    pub fn operator(&self) -> Option<PathOperator> {
        PathOperator::from_symbol(self.symbol)
    }

    /// True for 'm' and 'M'
    #[inline]
    pub fn is_move(&self) -> bool {
        self.symbol.eq_ignore_ascii_case(&'m')
    }

    /// True for 'z' and 'Z'
    #[inline]
    pub fn is_close(&self) -> bool {
        self.symbol.eq_ignore_ascii_case(&'z')
    }
}

///
/// Generates the commands for a set of operands that follow an operator
///
/// `operands` is in reverse order (the last operand in the path data is first). Commands are
/// pushed to `commands` in reverse order too.
///
fn assemble_operator(symbol: char, operands: &mut Vec<f64>, commands: &mut Vec<PathCommand>) -> Result<(), PathError> {
    let operator    = PathOperator::from_symbol(symbol).ok_or(PathError::InvalidCommand(symbol))?;
    let arity       = operator.arity();

    if arity == 0 && operands.is_empty() {
        commands.push(PathCommand::new(symbol, vec![]));
        return Ok(());
    }

    if arity == 0 || operands.is_empty() || operands.len() % arity != 0 {
        return Err(PathError::IncorrectParameterCount(symbol));
    }

    // Extra coordinate pairs after a moveto are implicit linetos
    let repeat_symbol = if operator == PathOperator::MoveTo {
        PathOperator::LineTo.symbol(symbol.is_ascii_uppercase())
    } else {
        symbol
    };

    // The final chunk of the reversed operands holds the parameters of the first command
    let num_commands = operands.len() / arity;
    for (index, params) in operands.chunks(arity).enumerate() {
        let symbol = if index == num_commands-1 { symbol } else { repeat_symbol };
        let params = params.iter().rev().cloned().collect();

        commands.push(PathCommand::new(symbol, params));
    }

    operands.clear();
    Ok(())
}

///
/// Converts a list of tokens into the commands that they represent
///
/// `raw` is the path data the tokens were read from, which is reported if it does not start
/// with a moveto command.
///
/// Operands are grouped according to the arity of the operator that precedes them: when
/// there are more operands than the operator takes, the command is repeated. This works
/// through the tokens from last to first, so each operator is reached with all of its
/// operands already read.
///
pub fn assemble_commands(raw: &str, tokens: &[PathToken]) -> Result<Vec<PathCommand>, PathError> {
    match tokens.first() {
        None                                                    => return Ok(vec![]),
        Some(PathToken::Operator(symbol)) if symbol.eq_ignore_ascii_case(&'m') => { }
        Some(_)                                                 => return Err(PathError::MissingMoveTo(raw.to_string()))
    }

    let mut operands = vec![];
    let mut commands = vec![];

    for token in tokens.iter().rev() {
        match token {
            PathToken::Operand(operand) => {
                // Out of range values such as '1e400' would otherwise be read as infinity
                let value = operand.parse::<f64>().ok()
                    .filter(|value| value.is_finite())
                    .ok_or_else(|| PathError::InvalidParameter(operand.clone()))?;
                operands.push(value);
            }

            PathToken::Operator(symbol) => {
                assemble_operator(*symbol, &mut operands, &mut commands)?;
            }
        }
    }

    // The first token is an operator, so every operand has been consumed
    debug_assert!(operands.is_empty(), "operands with no operator");

    commands.reverse();
    Ok(commands)
}
