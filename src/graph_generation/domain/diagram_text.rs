use std::fmt;

/// First line of every PlantUML document
pub const START_MARKER: &str = "@startuml";
/// Last line of every PlantUML document
pub const END_MARKER: &str = "@enduml";

/// Generated PlantUML text, immutable once built
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramText(String);

impl DiagramText {
    /// Wraps `body` lines between the start and end markers
    pub fn from_body<I, S>(body: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut text = String::from(START_MARKER);
        text.push('\n');
        for line in body {
            text.push_str(line.as_ref());
            text.push('\n');
        }
        text.push_str(END_MARKER);
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.0.lines()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for DiagramText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
