use crate::{CourseAverage, GradeStore, GroupAverage, Result, StudentAverage};
use std::sync::Arc;

/// Computes student and course averages through a [`GradeStore`].
///
/// The engine keeps no state between calls besides the store handle, so a
/// single instance can be cloned into every request handler.
#[derive(Clone)]
pub struct AggregationEngine {
    store: Arc<dyn GradeStore>,
}

impl AggregationEngine {
    pub fn new(store: Arc<dyn GradeStore>) -> Self {
        Self { store }
    }

    /// Average grade per student, in the order the store returned them
    pub async fn get_student_averages(&self) -> Result<Vec<StudentAverage>> {
        let rows = self.store.student_averages().await?;

        tracing::debug!(groups = rows.len(), "Fetched student averages");

        Ok(rows
            .into_iter()
            .map(|row| {
                let average_grade = normalize_average(&row);
                StudentAverage {
                    student_name: row.name,
                    average_grade,
                }
            })
            .collect())
    }

    /// Average grade per course, in the order the store returned them
    pub async fn get_course_averages(&self) -> Result<Vec<CourseAverage>> {
        let rows = self.store.course_averages().await?;

        tracing::debug!(groups = rows.len(), "Fetched course averages");

        Ok(rows
            .into_iter()
            .map(|row| {
                let average_grade = normalize_average(&row);
                CourseAverage {
                    course_name: row.name,
                    average_grade,
                }
            })
            .collect())
    }
}

/// Null or non-finite aggregates leave the engine as 0.0.
fn normalize_average(row: &GroupAverage) -> f64 {
    match row.average_grade {
        Some(value) if value.is_finite() => value,
        other => {
            tracing::warn!(group = %row.name, value = ?other, "Store returned no usable average, using 0.0");
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use async_trait::async_trait;
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Groups raw grade rows the way the SQL stores do.
    struct MemoryStore {
        students: Vec<(i64, &'static str)>,
        grades: Vec<(i64, &'static str, f64)>,
    }

    impl MemoryStore {
        fn sample() -> Self {
            Self {
                students: vec![(1, "Alice"), (2, "Bob"), (3, "Carol")],
                grades: vec![
                    (1, "Math", 90.0),
                    (1, "History", 95.0),
                    (2, "Math", 70.0),
                    (2, "Physics", 86.0),
                    (2, "History", 78.0),
                ],
            }
        }

        fn group(pairs: impl Iterator<Item = (String, f64)>) -> Vec<GroupAverage> {
            let mut groups: BTreeMap<String, (f64, usize)> = BTreeMap::new();
            for (name, grade) in pairs {
                let entry = groups.entry(name).or_insert((0.0, 0));
                entry.0 += grade;
                entry.1 += 1;
            }
            groups
                .into_iter()
                .map(|(name, (sum, count))| GroupAverage::new(name, Some(sum / count as f64)))
                .collect()
        }
    }

    #[async_trait]
    impl GradeStore for MemoryStore {
        async fn student_averages(&self) -> Result<Vec<GroupAverage>> {
            let pairs = self.grades.iter().filter_map(|(student_id, _, grade)| {
                self.students
                    .iter()
                    .find(|(id, _)| id == student_id)
                    .map(|(_, name)| (name.to_string(), *grade))
            });
            Ok(Self::group(pairs))
        }

        async fn course_averages(&self) -> Result<Vec<GroupAverage>> {
            Ok(Self::group(
                self.grades
                    .iter()
                    .map(|(_, course, grade)| (course.to_string(), *grade)),
            ))
        }
    }

    struct FailingStore {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl GradeStore for FailingStore {
        async fn student_averages(&self) -> Result<Vec<GroupAverage>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(Error::data_access("connection refused"))
        }

        async fn course_averages(&self) -> Result<Vec<GroupAverage>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(Error::data_access("connection refused"))
        }
    }

    struct NullStore;

    #[async_trait]
    impl GradeStore for NullStore {
        async fn student_averages(&self) -> Result<Vec<GroupAverage>> {
            Ok(vec![
                GroupAverage::new("Alice", None),
                GroupAverage::new("Bob", Some(f64::NAN)),
            ])
        }

        async fn course_averages(&self) -> Result<Vec<GroupAverage>> {
            Ok(vec![GroupAverage::new("Math", None)])
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[tokio::test]
    async fn test_student_averages_are_means() {
        let engine = AggregationEngine::new(Arc::new(MemoryStore::sample()));

        let averages = engine.get_student_averages().await.unwrap();

        assert_eq!(averages.len(), 2);
        assert_eq!(averages[0].student_name, "Alice");
        assert_close(averages[0].average_grade, 92.5);
        assert_eq!(averages[1].student_name, "Bob");
        assert_close(averages[1].average_grade, 78.0);
    }

    #[tokio::test]
    async fn test_students_without_grades_are_absent() {
        let engine = AggregationEngine::new(Arc::new(MemoryStore::sample()));

        let averages = engine.get_student_averages().await.unwrap();

        assert!(averages.iter().all(|a| a.student_name != "Carol"));
    }

    #[tokio::test]
    async fn test_course_averages_are_means() {
        let engine = AggregationEngine::new(Arc::new(MemoryStore::sample()));

        let averages = engine.get_course_averages().await.unwrap();
        let names: Vec<_> = averages.iter().map(|a| a.course_name.as_str()).collect();

        assert_eq!(names, vec!["History", "Math", "Physics"]);
        assert_close(averages[0].average_grade, 86.5);
        assert_close(averages[1].average_grade, 80.0);
        assert_close(averages[2].average_grade, 86.0);
    }

    #[tokio::test]
    async fn test_repeated_calls_are_idempotent() {
        let engine = AggregationEngine::new(Arc::new(MemoryStore::sample()));

        let first = engine.get_student_averages().await.unwrap();
        let second = engine.get_student_averages().await.unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_null_average_becomes_zero() {
        let engine = AggregationEngine::new(Arc::new(NullStore));

        let students = engine.get_student_averages().await.unwrap();
        assert_eq!(students[0].average_grade, 0.0);
        assert_eq!(students[1].average_grade, 0.0);

        let courses = engine.get_course_averages().await.unwrap();
        assert_eq!(courses[0].average_grade, 0.0);
    }

    #[tokio::test]
    async fn test_store_failure_is_data_access() {
        let store = Arc::new(FailingStore {
            calls: AtomicUsize::new(0),
        });
        let engine = AggregationEngine::new(store.clone());

        let students = engine.get_student_averages().await;
        let courses = engine.get_course_averages().await;

        assert!(matches!(students, Err(Error::DataAccess(_))));
        assert!(matches!(courses, Err(Error::DataAccess(_))));
        // One attempt per call, no retries
        assert_eq!(store.calls.load(Ordering::SeqCst), 2);
    }
}
