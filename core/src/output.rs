//! Output formatting for parsed flag sets.

use crate::parser::FlagSet;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum OutputFormat {
    /// One `name value` line per flag value, then one `arg` line per leftover.
    #[default]
    Plain,
    Json,
    Yaml,
    Table,
}

/// Formats a flag set in the requested output format.
pub fn format_flag_set(flags: &FlagSet, format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Plain => Ok(flag_set_to_plain(flags)),
        OutputFormat::Json => serde_json::to_string_pretty(flags)
            .map_err(|e| format!("JSON serialization failed: {e}")),
        OutputFormat::Yaml => {
            serde_yaml::to_string(flags).map_err(|e| format!("YAML serialization failed: {e}"))
        }
        OutputFormat::Table => Ok(flag_set_to_table(flags)),
    }
}

fn flag_set_to_plain(flags: &FlagSet) -> String {
    let mut out = String::new();

    for (name, values) in flags.flags() {
        for value in values {
            out.push_str(&format!("{name} {value}\n"));
        }
    }
    for arg in flags.args() {
        out.push_str(&format!("arg {arg}\n"));
    }

    out
}

fn flag_set_to_table(flags: &FlagSet) -> String {
    let mut out = String::new();

    out.push_str(&format!("Flag set: {}\n", flags.name()));

    if !flags.flags().is_empty() {
        out.push_str("\nFlags:\n");
        let max_name = flags.flags().keys().map(String::len).max().unwrap_or(4);

        for (name, values) in flags.flags() {
            for value in values {
                out.push_str(&format!("  {:<width$}  {value}\n", name, width = max_name));
            }
        }
    }

    if !flags.args().is_empty() {
        out.push_str("\nArguments:\n");
        for arg in flags.args() {
            out.push_str(&format!("  {arg}\n"));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Expected;

    fn sample() -> FlagSet {
        let mut flags =
            FlagSet::new("build").with_expected(Expected::from_names(["target", "v"]));
        flags
            .parse(["--target=release", "--target", "debug", "-v", "-x", "src dir"])
            .unwrap();
        flags
    }

    #[test]
    fn test_format_plain() {
        let out = format_flag_set(&sample(), OutputFormat::Plain).unwrap();
        assert_eq!(
            out,
            "target release\ntarget debug\nv \narg -x\narg \"src dir\"\n"
        );
    }

    #[test]
    fn test_format_json() {
        let out = format_flag_set(&sample(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["name"], "build");
        assert_eq!(value["flags"]["target"], serde_json::json!(["release", "debug"]));
        assert_eq!(value["flags"]["v"], serde_json::json!([""]));
        assert_eq!(value["args"], serde_json::json!(["-x", "\"src dir\""]));
        assert!(value.get("expected").is_none());
    }

    #[test]
    fn test_format_yaml() {
        let out = format_flag_set(&sample(), OutputFormat::Yaml).unwrap();
        assert!(out.contains("name: build"));
        assert!(out.contains("- release"));
    }

    #[test]
    fn test_format_table() {
        let out = format_flag_set(&sample(), OutputFormat::Table).unwrap();
        assert!(out.starts_with("Flag set: build\n"));
        assert!(out.contains("  target  release\n"));
        assert!(out.contains("  v       \n"));
        assert!(out.contains("Arguments:\n  -x\n"));
    }

    #[test]
    fn test_format_table_empty() {
        let out = format_flag_set(&FlagSet::new("empty"), OutputFormat::Table).unwrap();
        assert_eq!(out, "Flag set: empty\n");
    }
}
