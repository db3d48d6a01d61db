use serde::{Deserialize, Serialize};

/// Mean grade of every record belonging to one student name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentAverage {
    pub student_name: String,
    pub average_grade: f64,
}

/// Mean grade of every record filed under one course name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseAverage {
    pub course_name: String,
    pub average_grade: f64,
}

/// A grouped row as the store hands it back, before null normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupAverage {
    pub name: String,
    pub average_grade: Option<f64>,
}

impl GroupAverage {
    pub fn new(name: impl Into<String>, average_grade: Option<f64>) -> Self {
        Self {
            name: name.into(),
            average_grade,
        }
    }
}

impl StudentAverage {
    pub fn new(student_name: impl Into<String>, average_grade: f64) -> Self {
        Self {
            student_name: student_name.into(),
            average_grade,
        }
    }
}

impl CourseAverage {
    pub fn new(course_name: impl Into<String>, average_grade: f64) -> Self {
        Self {
            course_name: course_name.into(),
            average_grade,
        }
    }
}
