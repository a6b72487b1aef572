use crate::domain::ports::EntityId;
use crate::domain::student::Student;
use crate::error::{Result, StoreError};
use csv::StringRecord;
use std::io::Read;
use std::str::FromStr;

const FIELD_COUNT: usize = 3;

/// Reads `id,full name,score` lines from a headerless CSV source.
///
/// Each line produces one `Result<Student>`, so a malformed line can be
/// reported and skipped without abandoning the rest of the file.
pub struct StudentReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> StudentReader<R> {
    /// Wraps `source` without buffering it up front; lines are parsed as the
    /// iterator from [`StudentReader::students`] is driven.
    ///
    /// Quotes get no special meaning, so a stray `"` cannot pull the following
    /// lines into the same record.
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .quoting(false)
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and parses students.
    pub fn students(self) -> impl Iterator<Item = Result<Student>> {
        self.reader
            .into_records()
            .map(|result| result.map_err(StoreError::from).and_then(|r| parse_student(&r)))
    }
}

fn parse_student(record: &StringRecord) -> Result<Student> {
    let line = record.position().map(|p| p.line()).unwrap_or_default();
    if record.len() < FIELD_COUNT {
        return Err(StoreError::MissingField {
            line,
            expected: FIELD_COUNT,
            found: record.len(),
        });
    }

    if record.len() > FIELD_COUNT {
        let extra: Vec<&str> = record.iter().skip(FIELD_COUNT).collect();
        return Err(StoreError::InvalidFormat {
            line,
            field: "trailing field",
            value: extra.join(","),
        });
    }

    let id: EntityId = parse_field(&record[0], "id", line)?;
    let full_name = &record[1];
    if full_name.is_empty() || full_name.contains('"') {
        return Err(StoreError::InvalidFormat {
            line,
            field: "name",
            value: full_name.to_string(),
        });
    }
    let full_name = full_name.to_string();
    let score: u32 = parse_field(&record[2], "score", line)?;
    if score > 100 {
        return Err(StoreError::InvalidFormat {
            line,
            field: "score",
            value: record[2].to_string(),
        });
    }

    Ok(Student {
        id,
        full_name,
        score,
    })
}

fn parse_field<T: FromStr>(raw: &str, field: &'static str, line: u64) -> Result<T> {
    raw.parse().map_err(|_| StoreError::InvalidFormat {
        line,
        field,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::student::Grade;

    fn read(data: &str) -> Vec<Result<Student>> {
        StudentReader::new(data.as_bytes()).students().collect()
    }

    #[test]
    fn test_reader_valid_line() {
        let results = read("1,Carol,85");
        assert_eq!(results.len(), 1);

        let student = results[0].as_ref().unwrap();
        assert_eq!(student.id, 1);
        assert_eq!(student.full_name, "Carol");
        assert_eq!(student.grade(), Grade::A);
    }

    #[test]
    fn test_reader_missing_field() {
        let results = read("7,Alice");
        assert!(matches!(
            results[0],
            Err(StoreError::MissingField {
                line: 1,
                expected: 3,
                found: 2
            })
        ));
    }

    #[test]
    fn test_reader_invalid_id() {
        let results = read("x,Bob,90");
        match &results[0] {
            Err(StoreError::InvalidFormat { field, value, .. }) => {
                assert_eq!(*field, "id");
                assert_eq!(value, "x");
            }
            other => panic!("expected InvalidFormat, got {other:?}"),
        }
    }

    #[test]
    fn test_reader_invalid_score() {
        let results = read("2,Dan,ninety\n3,Eve,101\n4,Finn,-5");
        for result in &results {
            assert!(matches!(
                result,
                Err(StoreError::InvalidFormat { field: "score", .. })
            ));
        }
    }

    #[test]
    fn test_reader_stray_quote_stays_on_its_line() {
        let results = read("1,\"Carol,85\n2,Dan,64");
        assert_eq!(results.len(), 2);
        assert!(matches!(
            results[0],
            Err(StoreError::InvalidFormat {
                line: 1,
                field: "name",
                ..
            })
        ));
        assert_eq!(results[1].as_ref().unwrap().full_name, "Dan");
    }

    #[test]
    fn test_reader_rejects_extra_fields() {
        let results = read("1,Carol,85,extra\n2,Dan,64");
        match &results[0] {
            Err(StoreError::InvalidFormat { field, value, .. }) => {
                assert_eq!(*field, "trailing field");
                assert_eq!(value, "extra");
            }
            other => panic!("expected InvalidFormat, got {other:?}"),
        }
        assert_eq!(results[1].as_ref().unwrap().id, 2);
    }

    #[test]
    fn test_reader_rejects_empty_name() {
        let results = read("4,,70");
        assert!(matches!(
            results[0],
            Err(StoreError::InvalidFormat { field: "name", .. })
        ));
    }

    #[test]
    fn test_reader_continues_after_bad_line() {
        let results = read("1, Carol , 85\n7,Alice\n2,Dan,64");
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().full_name, "Carol");
        assert!(results[1].is_err());

        let dan = results[2].as_ref().unwrap();
        assert_eq!(dan.grade(), Grade::C);
        assert_eq!(dan.score, 64);
    }
}
