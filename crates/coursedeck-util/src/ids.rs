//! Strongly-typed identifiers for coursedeck

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a course
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CourseId(String);

impl CourseId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for CourseId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for CourseId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Composite identity of a feedback session.
/// A session is unique per (course, name) pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionKey {
    pub course_id: CourseId,
    pub name: String,
}

impl SessionKey {
    pub fn new(course_id: impl Into<CourseId>, name: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.course_id, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn course_id_equality() {
        let id1 = CourseId::new("cs1101");
        let id2 = CourseId::new("cs1101");
        let id3 = CourseId::new("cs2103");

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
    }

    #[test]
    fn session_key_equality() {
        let k1 = SessionKey::new("cs1101", "Midterm feedback");
        let k2 = SessionKey::new("cs1101", "Midterm feedback");
        let k3 = SessionKey::new("cs1101", "Final feedback");

        assert_eq!(k1, k2);
        assert_ne!(k1, k3);
    }

    #[test]
    fn ids_serialize_deserialize() {
        let course_id = CourseId::new("cs1101");
        let json = serde_json::to_string(&course_id).unwrap();
        let parsed: CourseId = serde_json::from_str(&json).unwrap();
        assert_eq!(course_id, parsed);

        let key = SessionKey::new("cs1101", "Midterm feedback");
        let json = serde_json::to_string(&key).unwrap();
        let parsed: SessionKey = serde_json::from_str(&json).unwrap();
        assert_eq!(key, parsed);
    }
}
