use std::str::FromStr;

use checker::Check;
use checker::CheckSpecError;
use thiserror::Error;

use crate::domain::student::models::RegistrationForm;
use crate::domain::student::models::SignIn;

pub const CHECK_USAGE: &str = "check <kind[:rule]> <input>";
pub const REGISTER_USAGE: &str = "register <first> <last> <email> <age> <telephone> <password>";
pub const LOGIN_USAGE: &str = "login <email> <password>";

/// One line of console input, parsed.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Run a single check. The input is everything after the descriptor,
    /// untouched, so surrounding whitespace reaches the checker.
    Check { check: Check, input: String },
    Register(RegistrationForm),
    Login(SignIn),
    List,
    Export,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCommandError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Invalid check: {0}")]
    InvalidCheck(#[from] CheckSpecError),
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_start();
        let (name, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));

        match name.to_lowercase().as_str() {
            "" => Err(ParseCommandError::Empty),
            "check" => parse_check(rest),
            "register" => parse_register(rest),
            "login" => parse_login(rest),
            "list" => Ok(Command::List),
            "export" => Ok(Command::Export),
            "help" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(ParseCommandError::Unknown(other.to_string())),
        }
    }
}

fn parse_check(rest: &str) -> Result<Command, ParseCommandError> {
    let rest = rest.trim_start();
    if rest.is_empty() {
        return Err(ParseCommandError::Usage(CHECK_USAGE));
    }

    let (descriptor, input) = rest.split_once(' ').unwrap_or((rest, ""));

    Ok(Command::Check {
        check: descriptor.parse()?,
        input: input.to_string(),
    })
}

fn parse_register(rest: &str) -> Result<Command, ParseCommandError> {
    let fields: Vec<&str> = rest.split_whitespace().collect();

    match fields.as_slice() {
        [first_name, last_name, email, age, telephone, password] => {
            Ok(Command::Register(RegistrationForm {
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                email: email.to_string(),
                age: age.to_string(),
                telephone: telephone.to_string(),
                password: password.to_string(),
            }))
        }
        _ => Err(ParseCommandError::Usage(REGISTER_USAGE)),
    }
}

fn parse_login(rest: &str) -> Result<Command, ParseCommandError> {
    let fields: Vec<&str> = rest.split_whitespace().collect();

    match fields.as_slice() {
        [user_id, password] => Ok(Command::Login(SignIn {
            user_id: user_id.to_string(),
            password: password.to_string(),
        })),
        _ => Err(ParseCommandError::Usage(LOGIN_USAGE)),
    }
}
