// 🎓 Grading - Student score file → graded report
//
// Input format: one student per line, `id, full name, score`.
// Each line is validated on its own; the first bad line aborts the read.

use crate::error::{GradingError, StoreError};
use crate::store::{Keyed, RecordId, RecordStore};
use csv::{ReaderBuilder, StringRecord, Trim};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;

/// Contents written when no student file exists yet
pub const SAMPLE_STUDENTS: [&str; 5] = [
    "101, Alice Johnson, 84",
    "102, Bob Smith, 73",
    "103, Charlie Brown, 65",
    "104, Diana Prince, 58",
    "105, Evan Wright, 45",
];

const MAX_SCORE: u32 = 100;

// ============================================================================
// GRADE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// 80+ A, 70+ B, 60+ C, 50+ D, otherwise F
    pub fn from_score(score: u32) -> Self {
        match score {
            80.. => Grade::A,
            70..=79 => Grade::B,
            60..=69 => Grade::C,
            50..=59 => Grade::D,
            _ => Grade::F,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// STUDENT
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: RecordId,
    pub full_name: String,

    /// Always within 0..=100
    pub score: u32,
}

impl Student {
    pub fn new(id: RecordId, full_name: &str, score: u32) -> Self {
        Student {
            id,
            full_name: full_name.to_string(),
            score,
        }
    }

    pub fn grade(&self) -> Grade {
        Grade::from_score(self.score)
    }

    /// One report line
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

impl Keyed for Student {
    fn id(&self) -> RecordId {
        self.id
    }

    fn validate(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

// ============================================================================
// PARSING
// ============================================================================

/// Parse student lines from any reader
pub fn read_students<R: Read>(input: R) -> Result<Vec<Student>, GradingError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(input);

    let mut students = Vec::new();
    for result in reader.records() {
        let record = result?;
        students.push(parse_student(&record)?);
    }

    Ok(students)
}

pub fn read_students_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Student>, GradingError> {
    let file = File::open(path.as_ref())?;
    read_students(file)
}

/// Load students straight into a keyed store; repeated ids are refused
pub fn students_to_store(students: Vec<Student>) -> Result<RecordStore<Student>, StoreError> {
    RecordStore::from_records(students)
}

fn parse_student(record: &StringRecord) -> Result<Student, GradingError> {
    let line = record.position().map(|p| p.line()).unwrap_or(0);
    let content = || record.iter().collect::<Vec<_>>().join(", ");

    if record.len() != 3 {
        return Err(GradingError::MissingField {
            line,
            content: content(),
        });
    }

    let id: RecordId = record[0].parse().map_err(|_| GradingError::InvalidId {
        line,
        content: content(),
    })?;

    let full_name = &record[1];

    let score = record[2]
        .parse::<u32>()
        .ok()
        .filter(|score| *score <= MAX_SCORE)
        .ok_or_else(|| GradingError::InvalidScore {
            line,
            content: content(),
        })?;

    Ok(Student::new(id, full_name, score))
}

// ============================================================================
// REPORT
// ============================================================================

pub fn write_report<W: Write>(students: &[Student], mut output: W) -> io::Result<()> {
    for student in students {
        writeln!(output, "{}", student.report_line())?;
    }
    output.flush()
}

pub fn write_report_to_file<P: AsRef<Path>>(
    students: &[Student],
    path: P,
) -> Result<(), GradingError> {
    let file = File::create(path.as_ref())?;
    write_report(students, BufWriter::new(file))?;
    Ok(())
}

/// Write the sample student file. Returns false when the file already exists.
pub fn ensure_sample_file<P: AsRef<Path>>(path: P) -> io::Result<bool> {
    if path.as_ref().exists() {
        return Ok(false);
    }

    let mut content = SAMPLE_STUDENTS.join("\n");
    content.push('\n');
    fs::write(path.as_ref(), content)?;
    Ok(true)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "recordkeeper-{}-{}.txt",
            std::process::id(),
            name
        ))
    }

    #[test]
    fn test_grade_thresholds() {
        assert_eq!(Grade::from_score(100), Grade::A);
        assert_eq!(Grade::from_score(80), Grade::A);
        assert_eq!(Grade::from_score(79), Grade::B);
        assert_eq!(Grade::from_score(70), Grade::B);
        assert_eq!(Grade::from_score(69), Grade::C);
        assert_eq!(Grade::from_score(60), Grade::C);
        assert_eq!(Grade::from_score(59), Grade::D);
        assert_eq!(Grade::from_score(50), Grade::D);
        assert_eq!(Grade::from_score(49), Grade::F);
        assert_eq!(Grade::from_score(0), Grade::F);
    }

    #[test]
    fn test_sample_file_parses() {
        let input = SAMPLE_STUDENTS.join("\n");
        let students = read_students(input.as_bytes()).unwrap();

        assert_eq!(students.len(), 5);
        assert_eq!(students[0], Student::new(101, "Alice Johnson", 84));

        let grades: Vec<Grade> = students.iter().map(Student::grade).collect();
        assert_eq!(grades, vec![Grade::A, Grade::B, Grade::C, Grade::D, Grade::F]);
    }

    #[test]
    fn test_missing_field() {
        let input = "101, Alice Johnson, 84\n102, Bob Smith\n";
        let err = read_students(input.as_bytes()).unwrap_err();

        match err {
            GradingError::MissingField { line, content } => {
                assert_eq!(line, 2);
                assert_eq!(content, "102, Bob Smith");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_too_many_fields() {
        let input = "101, Alice, Johnson, 84\n";
        let err = read_students(input.as_bytes()).unwrap_err();
        assert!(matches!(err, GradingError::MissingField { line: 1, .. }));
    }

    #[test]
    fn test_quoted_comma_still_splits() {
        let input = "101,\"Johnson, Alice\",84\n";
        let err = read_students(input.as_bytes()).unwrap_err();

        match err {
            GradingError::MissingField { line, content } => {
                assert_eq!(line, 1);
                assert_eq!(content, "101, \"Johnson, Alice\", 84");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_id() {
        let input = "abc, Alice Johnson, 84\n";
        let err = read_students(input.as_bytes()).unwrap_err();
        assert!(matches!(err, GradingError::InvalidId { line: 1, .. }));
    }

    #[test]
    fn test_invalid_score() {
        let input = "101, Alice Johnson, 84\n102, Bob Smith, seventy\n";
        let err = read_students(input.as_bytes()).unwrap_err();
        assert!(matches!(err, GradingError::InvalidScore { line: 2, .. }));

        let out_of_range = "101, Alice Johnson, 101\n";
        let err = read_students(out_of_range.as_bytes()).unwrap_err();
        assert!(matches!(err, GradingError::InvalidScore { line: 1, .. }));

        let negative = "101, Alice Johnson, -4\n";
        let err = read_students(negative.as_bytes()).unwrap_err();
        assert!(matches!(err, GradingError::InvalidScore { line: 1, .. }));
    }

    #[test]
    fn test_blank_lines_skipped() {
        let input = "101, Alice Johnson, 84\n\n102, Bob Smith, 73\n";
        let students = read_students(input.as_bytes()).unwrap();
        assert_eq!(students.len(), 2);
    }

    #[test]
    fn test_report_lines() {
        let students = vec![
            Student::new(101, "Alice Johnson", 84),
            Student::new(105, "Evan Wright", 45),
        ];

        let mut out = Vec::new();
        write_report(&students, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Alice Johnson (ID: 101): Score = 84, Grade = A\n\
             Evan Wright (ID: 105): Score = 45, Grade = F\n"
        );
    }

    #[test]
    fn test_file_roundtrip() {
        let input = temp_path("students");
        let report = temp_path("report");

        assert!(ensure_sample_file(&input).unwrap());
        assert!(!ensure_sample_file(&input).unwrap());

        let students = read_students_from_file(&input).unwrap();
        write_report_to_file(&students, &report).unwrap();

        let written = fs::read_to_string(&report).unwrap();
        assert_eq!(written.lines().count(), 5);
        assert!(written.starts_with("Alice Johnson (ID: 101): Score = 84, Grade = A"));

        fs::remove_file(&input).unwrap();
        fs::remove_file(&report).unwrap();
    }

    #[test]
    fn test_missing_input_file() {
        let err = read_students_from_file(temp_path("does-not-exist")).unwrap_err();
        assert!(matches!(err, GradingError::Io(_)));
    }

    #[test]
    fn test_students_to_store_rejects_duplicates() {
        let students = vec![
            Student::new(101, "Alice Johnson", 84),
            Student::new(101, "Alice Again", 90),
        ];
        assert_eq!(
            students_to_store(students).unwrap_err(),
            StoreError::DuplicateKey { id: 101 }
        );
    }
}
