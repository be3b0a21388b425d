use serde::{Serialize, Deserialize};
use std::fmt;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub surname: String,
    pub age: i32,
}

impl Record {
    pub fn new(name: impl Into<String>, surname: impl Into<String>, age: i32) -> Self {
        Self {
            name: name.into(),
            surname: surname.into(),
            age,
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, self.surname)
    }
}
