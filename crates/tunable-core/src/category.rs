//! Parameter categories: coarse classification tags for grouping related
//! parameters in UIs and help output.

use core::fmt;

/// A named category with an optional free-form description.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParamCategory {
    /// Category name (e.g., "Camera", "Engine").
    pub name: String,
    /// One-line description of what the category groups.
    pub description: String,
}

impl ParamCategory {
    /// Create a category.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

impl Default for ParamCategory {
    /// The catch-all bucket for parameters declared without a category.
    fn default() -> Self {
        Self::new("General", "General parameters")
    }
}

impl fmt::Display for ParamCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_general() {
        let cat = ParamCategory::default();
        assert_eq!(cat.name, "General");
    }

    #[test]
    fn display_is_the_name() {
        let cat = ParamCategory::new("Camera", "Sensor controls");
        assert_eq!(cat.to_string(), "Camera");
    }
}
