//! SQL shared by every backend.
//!
//! Grouping and averaging happen inside the database so only one row per
//! group crosses the wire. The cast keeps the column a double on PostgreSQL,
//! where `AVG` over integers or numerics would otherwise yield `NUMERIC`.
//! Missing names are reported as `""` and group together with empty names.

use gradebook_core::GroupAverage;
use sqlx::FromRow;

pub const STUDENT_AVERAGES: &str = r#"
    SELECT COALESCE(s.name, '') AS name,
           CAST(AVG(g.grade) AS DOUBLE PRECISION) AS average_grade
    FROM student s
    JOIN grades g ON s.id = g.student_id
    GROUP BY COALESCE(s.name, '')
    ORDER BY 1
"#;

pub const COURSE_AVERAGES: &str = r#"
    SELECT COALESCE(g.course_name, '') AS name,
           CAST(AVG(g.grade) AS DOUBLE PRECISION) AS average_grade
    FROM grades g
    GROUP BY COALESCE(g.course_name, '')
    ORDER BY 1
"#;

#[derive(Debug, FromRow)]
pub(crate) struct AverageRow {
    pub name: String,
    pub average_grade: Option<f64>,
}

impl From<AverageRow> for GroupAverage {
    fn from(row: AverageRow) -> Self {
        GroupAverage::new(row.name, row.average_grade)
    }
}
