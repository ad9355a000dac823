use std::fmt;

/// Ordered set of class names attached to an element.
///
/// Every mutating method reports whether the list actually changed, so
/// callers can tell a real transition from a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    names: Vec<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Add a class. Returns true if it was not already present.
    pub fn add(&mut self, name: &str) -> bool {
        if self.contains(name) {
            return false;
        }
        self.names.push(name.to_string());
        true
    }

    /// Remove a class. Returns true if it was present.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.names.len();
        self.names.retain(|n| n != name);
        self.names.len() != before
    }

    /// Flip a class. Returns whether the class is present afterwards.
    pub fn toggle(&mut self, name: &str) -> bool {
        if self.remove(name) {
            false
        } else {
            self.names.push(name.to_string());
            true
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for ClassList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = Self::new();
        for name in iter {
            let name = name.into();
            if !list.contains(&name) {
                list.names.push(name);
            }
        }
        list
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.names.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_is_idempotent() {
        let mut list = ClassList::new();
        assert!(list.add("show"));
        assert!(!list.add("show"));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn remove_missing_is_noop() {
        let mut list: ClassList = ["options"].into_iter().collect();
        assert!(!list.remove("show"));
        assert!(list.remove("options"));
        assert!(list.is_empty());
    }

    #[test]
    fn toggle_reports_presence() {
        let mut list = ClassList::new();
        assert!(list.toggle("open"));
        assert!(list.contains("open"));
        assert!(!list.toggle("open"));
        assert!(!list.contains("open"));
    }

    #[test]
    fn display_joins_with_spaces() {
        let list: ClassList = ["select", "wide", "select"].into_iter().collect();
        assert_eq!(list.to_string(), "select wide");
    }
}
