use instmeta_io::{ReadMode, TableReport, read_rows_from_path};
use instmeta_kernel::GeneratorSettings;
use serde::Serialize;
use std::collections::BTreeMap;

pub const SKIPPED_SAMPLE_LIMIT: usize = 10;

pub fn fail(message: impl std::fmt::Display) -> ! {
    tracing::error!("{message}");
    eprintln!("error: {message}");
    std::process::exit(1);
}

pub fn read_mode(strict: bool) -> ReadMode {
    if strict {
        ReadMode::Strict
    } else {
        ReadMode::Lenient
    }
}

pub fn read_table_or_exit(path: &str, mode: ReadMode) -> TableReport {
    read_rows_from_path(path, mode)
        .unwrap_or_else(|e| fail(format!("failed to read dimension table {path}: {e}")))
}

pub fn load_settings_or_exit(path: Option<&str>) -> GeneratorSettings {
    match path {
        None => GeneratorSettings::default(),
        Some(path) => GeneratorSettings::from_path(path).unwrap_or_else(|e| fail(e)),
    }
}

/// Command line wins over the settings file. Absent from both is fatal.
pub fn resolve_max_der_order_or_exit(
    arg: Option<u32>,
    settings: &GeneratorSettings,
) -> u32 {
    arg.or(settings.max_der_order)
        .unwrap_or_else(|| fail("missing required parameter `max_der_order`"))
}

/// `key=value` invocation parameters.
#[derive(Debug, Clone, Default)]
pub struct InvocationArgs {
    values: BTreeMap<String, String>,
}

impl InvocationArgs {
    pub fn parse(pairs: &[String]) -> Result<Self, String> {
        let mut values = BTreeMap::new();
        for pair in pairs {
            let Some((key, value)) = pair.split_once('=') else {
                return Err(format!("expected key=value, got `{pair}`"));
            };
            values.insert(key.to_string(), value.to_string());
        }
        Ok(Self { values })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn require(&self, key: &str) -> Result<&str, String> {
        self.get(key)
            .ok_or_else(|| format!("missing required parameter `{key}`"))
    }
}

/// Name of the running program, as cited in generated headers.
pub fn program_name() -> String {
    std::env::args().next().unwrap_or_else(|| "instmeta".to_string())
}

pub fn print_json_or_exit<T: Serialize>(value: &T, label: &str) {
    let rendered = serde_json::to_string_pretty(value).unwrap_or_else(|err| {
        eprintln!("error: failed to render {label} json: {err}");
        std::process::exit(2);
    });
    println!("{rendered}");
}

pub fn sample_with_truncation<T>(items: Vec<T>, limit: usize) -> (Vec<T>, usize) {
    let total = items.len();
    let sample: Vec<T> = items.into_iter().take(limit).collect();
    let truncated = total.saturating_sub(sample.len());
    (sample, truncated)
}

pub fn print_sample_block(header: &str, items: &[String], truncated: usize) {
    if items.is_empty() {
        return;
    }

    eprintln!("  {header} (showing up to {}):", items.len());
    for item in items {
        eprintln!("    - {item}");
    }
    if truncated > 0 {
        eprintln!("    - ... and {truncated} more");
    }
}

pub fn report_skipped(report: &TableReport) {
    let skipped: Vec<String> = report
        .skipped
        .iter()
        .map(|s| format!("line {}: `{}` ({})", s.line, s.content, s.reason))
        .collect();
    let (sample, truncated) = sample_with_truncation(skipped, SKIPPED_SAMPLE_LIMIT);
    print_sample_block("Skipped lines", &sample, truncated);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn invocation_args_lookup() {
        let args = InvocationArgs::parse(&pairs(&["config_file=dims.txt", "max_der_order=2"]))
            .expect("pairs should parse");
        assert_eq!(args.require("config_file"), Ok("dims.txt"));
        assert_eq!(args.get("out_file"), None);
        assert_eq!(
            args.require("out_file"),
            Err("missing required parameter `out_file`".to_string())
        );
    }

    #[test]
    fn invocation_value_may_contain_equals() {
        let args = InvocationArgs::parse(&pairs(&["out_file=a=b.txt"])).expect("pairs should parse");
        assert_eq!(args.get("out_file"), Some("a=b.txt"));
    }

    #[test]
    fn bare_token_is_rejected() {
        assert!(InvocationArgs::parse(&pairs(&["dims.txt"])).is_err());
    }

    #[test]
    fn sample_truncates() {
        let (sample, truncated) = sample_with_truncation(vec![1, 2, 3], 2);
        assert_eq!(sample, vec![1, 2]);
        assert_eq!(truncated, 1);
    }
}
