//! # Course Repository
//!
//! Database operations for courses. Courses are only ever inserted and
//! listed; ids come from SQLite's AUTOINCREMENT and are never reused.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use tally_core::{Course, CourseId};

/// Repository for course database operations.
#[derive(Debug, Clone)]
pub struct CourseRepository {
    pool: SqlitePool,
}

impl CourseRepository {
    /// Creates a new CourseRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CourseRepository { pool }
    }

    /// Lists all courses in insertion order.
    pub async fn list(&self) -> DbResult<Vec<Course>> {
        let courses = sqlx::query_as::<_, Course>("SELECT id, name FROM courses ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        debug!(count = courses.len(), "Listed courses");
        Ok(courses)
    }

    /// Gets a course by its ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Course))` - Course found
    /// * `Ok(None)` - Course not found
    pub async fn get_by_id(&self, id: CourseId) -> DbResult<Option<Course>> {
        let course = sqlx::query_as::<_, Course>("SELECT id, name FROM courses WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(course)
    }

    /// Inserts a course and returns it with its new id.
    ///
    /// The name is stored as given; trimming and emptiness checks belong to
    /// `tally_core::validation`.
    pub async fn insert(&self, name: &str) -> DbResult<Course> {
        debug!(name = %name, "Inserting course");

        let course = sqlx::query_as::<_, Course>(
            "INSERT INTO courses (name) VALUES (?1) RETURNING id, name",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await?;

        Ok(course)
    }

    /// Counts all courses.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM courses")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Database, DbConfig};

    #[tokio::test]
    async fn test_insert_then_list() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.courses();

        let first = repo.insert("Mathematik").await.unwrap();
        let second = repo.insert("X").await.unwrap();

        assert_ne!(first.id, second.id);

        let courses = repo.list().await.unwrap();
        let named_x: Vec<_> = courses.iter().filter(|c| c.name == "X").collect();
        assert_eq!(named_x.len(), 1);
        assert_eq!(named_x[0].id, second.id);

        // Insertion order
        let names: Vec<&str> = courses.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Mathematik", "X"]);
    }

    #[tokio::test]
    async fn test_get_by_id_and_count() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.courses();

        assert_eq!(repo.count().await.unwrap(), 0);
        let course = repo.insert("Geschichte").await.unwrap();

        assert_eq!(repo.get_by_id(course.id).await.unwrap(), Some(course.clone()));
        assert_eq!(repo.get_by_id(course.id + 100).await.unwrap(), None);
        assert_eq!(repo.count().await.unwrap(), 1);
    }
}
