use crate::domain::ports::{Entity, EntityId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Patient {
    pub id: EntityId,
    pub name: String,
    pub age: u8,
    pub gender: String,
}

impl Patient {
    pub fn new(id: EntityId, name: impl Into<String>, age: u8, gender: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            gender: gender.into(),
        }
    }
}

impl Entity for Patient {
    fn id(&self) -> EntityId {
        self.id
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Prescription {
    pub id: EntityId,
    /// The patient this prescription was issued to.
    pub patient_id: EntityId,
    pub medication_name: String,
    pub date_issued: NaiveDate,
}

impl Prescription {
    pub fn new(
        id: EntityId,
        patient_id: EntityId,
        medication_name: impl Into<String>,
        date_issued: NaiveDate,
    ) -> Self {
        Self {
            id,
            patient_id,
            medication_name: medication_name.into(),
            date_issued,
        }
    }
}

impl Entity for Prescription {
    fn id(&self) -> EntityId {
        self.id
    }
}
