use crate::domain::ports::ReportSink;
use crate::domain::student::Student;
use crate::error::Result;
use crate::infrastructure::in_memory::EntityRepository;
use crate::interfaces::csv::student_reader::StudentReader;
use std::io::Read;

/// Counts from one grading pass.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct GradingSummary {
    pub written: usize,
    pub skipped: usize,
}

/// Turns a student score file into a graded report.
#[derive(Default)]
pub struct StudentResultProcessor {
    students: EntityRepository<Student>,
}

impl StudentResultProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn students(&self) -> &EntityRepository<Student> {
        &self.students
    }

    /// Loads every well-formed line from `source`.
    ///
    /// Malformed lines and repeated ids are logged and skipped; the number
    /// skipped is returned.
    pub fn read_students<R: Read>(&mut self, source: R) -> usize {
        let mut skipped = 0;
        for result in StudentReader::new(source).students() {
            let outcome = result.and_then(|student| self.students.add(student));
            if let Err(e) = outcome {
                tracing::warn!("Skipping student record: {}", e);
                skipped += 1;
            }
        }
        skipped
    }

    pub fn report_lines(&self) -> Vec<String> {
        self.students.iter().map(Student::report_line).collect()
    }

    /// Reads `source`, then writes one report line per student to `sink`.
    pub fn process<R: Read, S: ReportSink>(&mut self, source: R, sink: &mut S) -> Result<GradingSummary> {
        let skipped = self.read_students(source);
        let lines = self.report_lines();
        sink.write_lines(&lines)?;

        let summary = GradingSummary {
            written: lines.len(),
            skipped,
        };
        tracing::info!(
            written = summary.written,
            skipped = summary.skipped,
            "grade report written"
        );
        Ok(summary)
    }
}
