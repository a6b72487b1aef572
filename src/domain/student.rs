use crate::domain::ports::{Entity, EntityId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Letter grade derived from a 0-100 score.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub fn from_score(score: u32) -> Self {
        match score {
            80.. => Grade::A,
            70..=79 => Grade::B,
            60..=69 => Grade::C,
            50..=59 => Grade::D,
            _ => Grade::F,
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        };
        f.write_str(letter)
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Student {
    pub id: EntityId,
    pub full_name: String,
    pub score: u32,
}

impl Student {
    pub fn grade(&self) -> Grade {
        Grade::from_score(self.score)
    }

    pub fn report_line(&self) -> String {
        format!(
            "{} (ID: {}): Score = {}, Grade = {}",
            self.full_name,
            self.id,
            self.score,
            self.grade()
        )
    }
}

impl Entity for Student {
    fn id(&self) -> EntityId {
        self.id
    }
}
