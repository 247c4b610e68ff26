use super::path::*;
use super::command::*;

use std::fmt;
use std::fmt::Write;

///
/// Trait implemented by objects that can be written out as SVG path data
///
pub trait PathDataEncoding {
    ///
    /// Encodes this item by appending it to the specified string
    ///
    fn encode_path_data(&self, append_to: &mut String);

    ///
    /// Encodes this item into a new string
    ///
    fn to_path_data(&self) -> String {
        let mut result = String::new();
        self.encode_path_data(&mut result);
        result
    }
}

///
/// Parameters are written in their shortest exact form. NaN and infinite values have no
/// path data representation, so commands built by hand must hold finite parameters for
/// the encoded data to parse again (`parse_path` never produces them).
///
impl PathDataEncoding for f64 {
    #[inline]
    fn encode_path_data(&self, append_to: &mut String) {
        // Writing to a string can't fail
        write!(append_to, "{}", self).ok();
    }
}

impl PathDataEncoding for PathCommand {
    fn encode_path_data(&self, append_to: &mut String) {
        append_to.push(self.symbol);

        for (index, param) in self.params.iter().enumerate() {
            if index > 0 { append_to.push(' '); }
            param.encode_path_data(append_to);
        }
    }
}

impl PathDataEncoding for Path {
    fn encode_path_data(&self, append_to: &mut String) {
        for (index, command) in self.commands.iter().enumerate() {
            if index > 0 { append_to.push(' '); }
            command.encode_path_data(append_to);
        }
    }
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path_data())
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path_data())
    }
}
