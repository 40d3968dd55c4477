use std::str::FromStr;

use super::error::InputError;

/// Actions reachable from the idle prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    List,
    Insert,
}

impl FromStr for Command {
    type Err = InputError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        match line {
            "1" => Ok(Command::List),
            "2" => Ok(Command::Insert),
            other => Err(InputError::UnknownOption(other.to_string())),
        }
    }
}

/// Parse the age field as a signed decimal integer. Negative values are allowed.
pub fn parse_age(text: &str) -> Result<i64, InputError> {
    text.parse::<i64>()
        .map_err(|_| InputError::InvalidAge(text.to_string()))
}

/// How the process was asked to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Interactive,
    /// `0 <name> <age> <gender>`: one insert, no loop. Age is still unparsed.
    InsertOnce {
        name: String,
        age: String,
        gender: String,
    },
}

impl Invocation {
    pub fn from_positionals(values: &[String]) -> Result<Self, InputError> {
        match values {
            [flag, rest @ ..] if flag == "0" => match rest {
                [name, age, gender] => Ok(Invocation::InsertOnce {
                    name: name.clone(),
                    age: age.clone(),
                    gender: gender.clone(),
                }),
                _ => Err(InputError::Usage(rest.len())),
            },
            _ => Ok(Invocation::Interactive),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_command_parse() {
        assert_eq!("1".parse::<Command>(), Ok(Command::List));
        assert_eq!("2".parse::<Command>(), Ok(Command::Insert));
        assert_eq!(
            "9".parse::<Command>(),
            Err(InputError::UnknownOption("9".to_string()))
        );
        assert!(" 1".parse::<Command>().is_err());
        assert!("".parse::<Command>().is_err());
    }

    #[test]
    fn test_parse_age() {
        assert_eq!(parse_age("30"), Ok(30));
        assert_eq!(parse_age("-7"), Ok(-7));
        assert_eq!(parse_age("+5"), Ok(5));
        assert_eq!(parse_age("thirty"), Err(InputError::InvalidAge("thirty".to_string())));
        assert!(parse_age(" 30").is_err());
        assert!(parse_age("30.5").is_err());
        assert!(parse_age("").is_err());
    }

    #[test]
    fn test_invocation_from_positionals() {
        assert_eq!(Invocation::from_positionals(&[]), Ok(Invocation::Interactive));
        assert_eq!(
            Invocation::from_positionals(&strings(&["0", "Alice", "30", "F"])),
            Ok(Invocation::InsertOnce {
                name: "Alice".to_string(),
                age: "30".to_string(),
                gender: "F".to_string(),
            })
        );
        assert_eq!(
            Invocation::from_positionals(&strings(&["0", "Alice"])),
            Err(InputError::Usage(1))
        );
        assert_eq!(
            Invocation::from_positionals(&strings(&["7", "x"])),
            Ok(Invocation::Interactive)
        );
    }
}
