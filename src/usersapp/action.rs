use std::fmt;
use std::str::FromStr;

/// A top-level command typed at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    List,
    Add,
    Remove,
    Help,
    Quit,
}

impl Action {
    /// All actions, in the order they are advertised to the operator.
    pub const ALL: [Action; 5] = [
        Action::List,
        Action::Add,
        Action::Remove,
        Action::Quit,
        Action::Help,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Action::List => "list",
            Action::Add => "add",
            Action::Remove => "remove",
            Action::Help => "help",
            Action::Quit => "quit",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Action::List => "show all users",
            Action::Add => "add new user to the list",
            Action::Remove => "remove user from the list",
            Action::Help => "show this list again",
            Action::Quit => "quit the app",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Input that names no known action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAction(pub String);

impl fmt::Display for UnknownAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown command: {}", self.0)
    }
}

impl FromStr for Action {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "list" | "ls" => Ok(Action::List),
            "add" => Ok(Action::Add),
            "remove" | "rm" => Ok(Action::Remove),
            "help" | "?" => Ok(Action::Help),
            "quit" | "q" | "exit" => Ok(Action::Quit),
            _ => Err(UnknownAction(trimmed.to_string())),
        }
    }
}
