use std::fmt;

#[derive(Debug)]
pub enum ScenarioError {
    Parse { message: String, line: usize },
    Runtime { message: String, line: usize },
    StepFailed { message: String, line: usize },
    Io(std::io::Error),
}

impl ScenarioError {
    pub fn exit_code(&self) -> i32 {
        match self {
            ScenarioError::Parse { .. } => 2,
            ScenarioError::Runtime { .. } => 3,
            ScenarioError::StepFailed { .. } => 1,
            ScenarioError::Io(_) => 4,
        }
    }
}

impl fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScenarioError::Parse { message, line } => {
                write!(f, "Parse error at line {}: {}", line, message)
            }
            ScenarioError::Runtime { message, line } => {
                write!(f, "Runtime error at line {}: {}", line, message)
            }
            ScenarioError::StepFailed { message, line } => {
                write!(f, "Step failed at line {}: {}", line, message)
            }
            ScenarioError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for ScenarioError {}

impl From<std::io::Error> for ScenarioError {
    fn from(e: std::io::Error) -> Self {
        ScenarioError::Io(e)
    }
}
