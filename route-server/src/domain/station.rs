//! Station records.

use super::Position;

/// Error returned when a station record fails validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station: {reason}")]
pub struct InvalidStation {
    reason: &'static str,
}

/// One stop on one line.
///
/// A physical interchange served by several lines appears as several
/// records at (nearly) the same position, one per line. Records are not
/// linked explicitly; the graph builder pairs them up by proximity.
///
/// # Examples
///
/// ```
/// use route_server::domain::{Position, Station};
///
/// let pos = Position::new(29.0, 41.0).unwrap();
/// let station = Station::new("Yenikapı", pos, "M1A").unwrap();
/// assert_eq!(station.name(), "Yenikapı");
/// assert_eq!(station.line(), "M1A");
///
/// assert!(Station::new("  ", pos, "M1A").is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    name: String,
    position: Position,
    line: String,
    status: Option<String>,
    department: Option<String>,
}

impl Station {
    /// Create a station record.
    ///
    /// Name and line must contain at least one non-whitespace character.
    pub fn new(
        name: impl Into<String>,
        position: Position,
        line: impl Into<String>,
    ) -> Result<Self, InvalidStation> {
        let name = name.into();
        let line = line.into();

        if name.trim().is_empty() {
            return Err(InvalidStation {
                reason: "name must not be empty",
            });
        }
        if line.trim().is_empty() {
            return Err(InvalidStation {
                reason: "line must not be empty",
            });
        }

        Ok(Self {
            name,
            position,
            line,
            status: None,
            department: None,
        })
    }

    /// Attach the project status reported by the source data.
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Attach the operating department reported by the source data.
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    /// Display name. Also the graph node key.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Identifier of the line this record belongs to.
    pub fn line(&self) -> &str {
        &self.line
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn department(&self) -> Option<&str> {
        self.department.as_deref()
    }

    /// Whether this record is on the same line as `other`.
    pub fn shares_line(&self, other: &Station) -> bool {
        self.line == other.line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos() -> Position {
        Position::new(28.95, 41.0).unwrap()
    }

    #[test]
    fn valid_station() {
        let s = Station::new("Aksaray", pos(), "M1A").unwrap();
        assert_eq!(s.name(), "Aksaray");
        assert_eq!(s.line(), "M1A");
        assert_eq!(s.position(), pos());
        assert!(s.status().is_none());
        assert!(s.department().is_none());
    }

    #[test]
    fn rejects_blank_name() {
        let err = Station::new("", pos(), "M1A").unwrap_err();
        assert_eq!(err.to_string(), "invalid station: name must not be empty");
        assert!(Station::new(" \t", pos(), "M1A").is_err());
    }

    #[test]
    fn rejects_blank_line() {
        let err = Station::new("Aksaray", pos(), " ").unwrap_err();
        assert_eq!(err.to_string(), "invalid station: line must not be empty");
    }

    #[test]
    fn metadata() {
        let s = Station::new("Aksaray", pos(), "M1A")
            .unwrap()
            .with_status("İşletmede")
            .with_department("Raylı Sistemler");
        assert_eq!(s.status(), Some("İşletmede"));
        assert_eq!(s.department(), Some("Raylı Sistemler"));
    }

    #[test]
    fn shares_line() {
        let a = Station::new("A", pos(), "M1").unwrap();
        let b = Station::new("B", pos(), "M1").unwrap();
        let c = Station::new("C", pos(), "M2").unwrap();
        assert!(a.shares_line(&b));
        assert!(!a.shares_line(&c));
    }
}
