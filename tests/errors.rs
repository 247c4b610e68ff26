use flo_svg_path::*;

fn check_error(raw: &str, expected: PathError, message: &str) {
    let result = parse_path(raw);

    println!("{:?}", result);
    assert!(result == Err(expected.clone()));
    assert!(expected.to_string() == message);
}

#[test]
fn invalid_command() {
    check_error("M 10 20 x", PathError::InvalidCommand('x'), "Invalid command 'x'");
}

#[test]
fn no_moveto_at_beginning() {
    check_error("10,20", PathError::MissingMoveTo("10,20".to_string()), "Path data does not start with a moveto command: 10,20");
}

#[test]
fn line_at_beginning() {
    check_error("L 10,20", PathError::MissingMoveTo("L 10,20".to_string()), "Path data does not start with a moveto command: L 10,20");
}

#[test]
fn incorrect_number_of_parameters() {
    check_error("M 10 20 30 Z", PathError::IncorrectParameterCount('M'), "Incorrect number of parameters for M");
}

#[test]
fn unrecognized_symbol() {
    check_error("M 10 7%4 Z", PathError::UnrecognizedSymbol('%'), "Unrecognized symbol '%'");
}

#[test]
fn double_minus_is_invalid() {
    check_error("M 10--1 Z", PathError::InvalidParameter("-".to_string()), "Invalid parameter syntax");
}

#[test]
fn dangling_exponent_is_invalid() {
    check_error("M 10 1e Z", PathError::InvalidParameter("1e".to_string()), "Invalid parameter syntax");
}

#[test]
fn out_of_range_parameter_is_invalid() {
    check_error("M 1e400 0", PathError::InvalidParameter("1e400".to_string()), "Invalid parameter syntax");
}

#[test]
fn upper_case_exponent_is_a_command() {
    check_error("M 10 1E5", PathError::InvalidCommand('E'), "Invalid command 'E'");
}

#[test]
fn lexing_errors_come_first() {
    // Would also be missing a moveto and have an invalid command
    check_error("x 1 # 2", PathError::UnrecognizedSymbol('#'), "Unrecognized symbol '#'");
}

#[test]
fn rightmost_assembly_error_is_reported() {
    check_error("M 1 2 3 L 4 x", PathError::InvalidCommand('x'), "Invalid command 'x'");
}

#[test]
fn error_is_std_error() {
    let error: Box<dyn std::error::Error> = Box::new(parse_path("M 1 2 3").unwrap_err());

    assert!(error.to_string().starts_with("Incorrect number of parameters"));
}
