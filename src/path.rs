use super::error::*;
use super::token::*;
use super::command::*;

use std::str::FromStr;

///
/// The commands from an SVG path data attribute
///
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Path {
    pub commands: Vec<PathCommand>
}

///
/// Parses the value of an SVG path data attribute into a path
///
/// The path data must be empty or start with a moveto command. Coordinates following a
/// command are split into repeated instances of that command, except for moveto, where the
/// extra coordinates become lineto commands.
///
pub fn parse_path(raw: &str) -> Result<Path, PathError> {
    let tokens      = tokenize_path_data(raw)?;
    let commands    = assemble_commands(raw, &tokens)?;

    trace!("Parsed {} tokens into {} path commands", tokens.len(), commands.len());

    Ok(Path { commands })
}

impl Path {
    ///
    /// Creates a path from a list of commands
    ///
    pub fn new(commands: Vec<PathCommand>) -> Path {
        Path { commands }
    }

    ///
    /// Creates a path with no commands
    ///
    pub fn empty() -> Path {
        Path { commands: vec![] }
    }

    #[inline] pub fn len(&self) -> usize { self.commands.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.commands.is_empty() }

    ///
    /// Iterates over the commands in this path
    ///
    pub fn iter<'a>(&'a self) -> impl 'a+Iterator<Item=&'a PathCommand> {
        self.commands.iter()
    }

    ///
    /// Splits this path into subpaths, each of which starts with a moveto command
    ///
    /// Closepath commands end a subpath and are not included in the result. A subpath that
    /// continues after a closepath without its own moveto starts with a copy of the last
    /// moveto command.
    ///
    pub fn subpaths(&self) -> Vec<Path> {
        let mut subpaths            = vec![];
        let mut current             = vec![];
        let mut most_recent_move    = None;

        for command in self.commands.iter() {
            if command.is_move() {
                // Each moveto starts a new subpath
                if !current.is_empty() {
                    subpaths.push(Path::new(current));
                }

                current             = vec![command.clone()];
                most_recent_move    = Some(command.clone());
            } else if command.is_close() {
                // 'Z Z' closes a subpath consisting of just the last moveto
                if current.is_empty() {
                    current.extend(most_recent_move.iter().cloned());
                }

                if !current.is_empty() {
                    subpaths.push(Path::new(current));
                }

                current = vec![];
            } else {
                if current.is_empty() {
                    // Parsed paths always start with a moveto, so there's always a command to copy here
                    current.extend(most_recent_move.iter().cloned());
                }

                current.push(command.clone());
            }
        }

        if !current.is_empty() {
            subpaths.push(Path::new(current));
        }

        debug!("Split path with {} commands into {} subpaths", self.commands.len(), subpaths.len());

        subpaths
    }
}

impl FromStr for Path {
    type Err = PathError;

    fn from_str(raw: &str) -> Result<Path, PathError> {
        parse_path(raw)
    }
}

impl From<Vec<PathCommand>> for Path {
    fn from(commands: Vec<PathCommand>) -> Path {
        Path::new(commands)
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item      = &'a PathCommand;
    type IntoIter  = std::slice::Iter<'a, PathCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}
