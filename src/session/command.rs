//! One line of user input.

/// What a line of input asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Leave the session.
    Quit,
    /// Throw the game away and start a new one.
    Reset,
    /// Knock down this many pins. Not yet range-checked.
    Roll(i64),
    /// Neither a command word nor an integer.
    Unreadable,
}

impl Command {
    /// Interpret a line.
    ///
    /// Command words match case-insensitively anywhere in the line, so
    /// "Exit now" quits. Quitting wins over resetting.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let lower = line.to_lowercase();
        if lower.contains("exit") || lower.contains("quit") {
            Command::Quit
        } else if lower.contains("restart") || lower.contains("reset") {
            Command::Reset
        } else {
            line.trim()
                .parse::<i64>()
                .map_or(Command::Unreadable, Command::Roll)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("exit"), Command::Quit);
        assert_eq!(Command::parse("QUIT\n"), Command::Quit);
        assert_eq!(Command::parse("please exit"), Command::Quit);
        assert_eq!(Command::parse("reset"), Command::Reset);
        assert_eq!(Command::parse("Restart"), Command::Reset);
        assert_eq!(Command::parse("reset and quit"), Command::Quit);
    }

    #[test]
    fn test_parse_rolls() {
        assert_eq!(Command::parse("7"), Command::Roll(7));
        assert_eq!(Command::parse("  10 \n"), Command::Roll(10));
        assert_eq!(Command::parse("-2"), Command::Roll(-2));
        assert_eq!(Command::parse("42"), Command::Roll(42));
    }

    #[test]
    fn test_parse_unreadable() {
        assert_eq!(Command::parse(""), Command::Unreadable);
        assert_eq!(Command::parse("seven"), Command::Unreadable);
        assert_eq!(Command::parse("7 pins"), Command::Unreadable);
    }
}
