//! Bundled default template
//!
//! The template shipped with the binary: a curated set of `[tool.*]` sections
//! (ruff, mypy, pytest, coverage, poe tasks, poetry dev-dependencies) used as
//! the source document whenever the caller gives no `--src`.

use once_cell::sync::Lazy;
use toml::Table;

/// Raw text of the bundled template.
pub const DEFAULT_TEMPLATE_TOML: &str = include_str!("default.toml");

/// The bundled template, parsed once per process and read-only thereafter.
pub static DEFAULT_TEMPLATE: Lazy<Table> =
    Lazy::new(|| toml::from_str(DEFAULT_TEMPLATE_TOML).expect("bundled default.toml is valid TOML"));

#[cfg(test)]
mod tests {
    use super::DEFAULT_TEMPLATE;
    use crate::merge::tool_names;

    #[test]
    fn bundled_template_parses_with_expected_sections() {
        let names = tool_names(&DEFAULT_TEMPLATE);
        assert_eq!(names, ["poetry", "ruff", "mypy", "pytest", "coverage", "poe"]);
    }

    #[test]
    fn bundled_template_pins_dev_dependency_group() {
        let deps = DEFAULT_TEMPLATE["tool"]["poetry"]["group"]["dev"]["dependencies"]
            .as_table()
            .expect("dev dependencies table");
        assert!(deps.contains_key("ruff"));
        assert!(deps.contains_key("mypy"));
        assert!(deps.contains_key("pytest"));
    }
}
