use crate::domain::healthcare::{Patient, Prescription};
use crate::domain::ports::EntityId;
use crate::error::Result;
use crate::infrastructure::in_memory::EntityRepository;
use chrono::NaiveDate;
use std::collections::HashMap;

/// Patient and prescription records, with prescriptions grouped by patient.
#[derive(Default)]
pub struct HealthSystemApp {
    patients: EntityRepository<Patient>,
    prescriptions: EntityRepository<Prescription>,
    prescription_map: HashMap<EntityId, Vec<Prescription>>,
}

impl HealthSystemApp {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn patients(&self) -> &EntityRepository<Patient> {
        &self.patients
    }

    pub fn add_patient(&mut self, patient: Patient) -> Result<()> {
        self.patients.add(patient)
    }

    pub fn add_prescription(&mut self, prescription: Prescription) -> Result<()> {
        self.prescriptions.add(prescription)
    }

    pub fn seed_data(&mut self) -> Result<()> {
        self.add_patient(Patient::new(1, "Ama Mensah", 34, "Female"))?;
        self.add_patient(Patient::new(2, "Kwame Boateng", 52, "Male"))?;
        self.add_patient(Patient::new(3, "Efua Owusu", 27, "Female"))?;

        let issued = |m, d| NaiveDate::from_ymd_opt(2025, m, d).unwrap_or_default();
        self.add_prescription(Prescription::new(1, 1, "Amoxicillin", issued(5, 2)))?;
        self.add_prescription(Prescription::new(2, 1, "Ibuprofen", issued(5, 9)))?;
        self.add_prescription(Prescription::new(3, 2, "Metformin", issued(4, 21)))?;
        self.add_prescription(Prescription::new(4, 3, "Cetirizine", issued(6, 1)))?;
        self.add_prescription(Prescription::new(5, 2, "Lisinopril", issued(6, 3)))?;
        Ok(())
    }

    /// Rebuilds the patient -> prescriptions grouping from the repository.
    pub fn build_prescription_map(&mut self) {
        self.prescription_map.clear();
        for prescription in self.prescriptions.iter() {
            self.prescription_map
                .entry(prescription.patient_id)
                .or_default()
                .push(prescription.clone());
        }
        tracing::debug!(
            patients = self.prescription_map.len(),
            "prescription map built"
        );
    }

    /// Prescriptions for `patient_id` in insertion order; empty for unknown ids.
    pub fn prescriptions_for(&self, patient_id: EntityId) -> &[Prescription] {
        self.prescription_map
            .get(&patient_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn patient_lines(&self) -> Vec<String> {
        self.patients
            .iter()
            .map(|p| format!("[{}] {}, Age: {}, Gender: {}", p.id, p.name, p.age, p.gender))
            .collect()
    }

    pub fn prescription_lines(&self, patient_id: EntityId) -> Result<Vec<String>> {
        let patient = self.patients.get_by_id(patient_id)?;
        let prescriptions = self.prescriptions_for(patient_id);

        let mut lines = vec![format!("Prescriptions for {}:", patient.name)];
        if prescriptions.is_empty() {
            lines.push("  (none)".to_string());
        }
        lines.extend(prescriptions.iter().map(|p| {
            format!(
                "  [{}] {} (issued {})",
                p.id, p.medication_name, p.date_issued
            )
        }));
        Ok(lines)
    }
}
