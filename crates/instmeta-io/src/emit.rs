//! Generated-file writer.
//!
//! The file starts with a fixed header naming the generating program and
//! lists every derived list in its own `//`-titled section.

use instmeta_kernel::{DescriptorList, InstantiationInfo};
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// `// This file was automatically generated from <script> ...`
///
/// Only the last path component of `script` is used.
pub fn header(script: &str) -> String {
    let name = script
        .rsplit(['/', '\\'])
        .next()
        .filter(|s| !s.is_empty())
        .unwrap_or(script);
    format!(
        "// This file was automatically generated from {name}\n\
         // DO NOT edit as it will be overwritten.\n\n"
    )
}

/// Write one section per list.
pub fn write_lists(writer: &mut impl Write, lists: &[DescriptorList]) -> Result<(), EmitError> {
    let mut sections = String::new();
    for (idx, list) in lists.iter().enumerate() {
        if idx > 0 {
            sections.push('\n');
        }
        sections.push_str(&format!("// {} ({})\n", list.name, list.len()));
        for entry in &list.entries {
            sections.push_str(entry);
            sections.push('\n');
        }
    }
    writer
        .write_all(sections.as_bytes())
        .map_err(|e| EmitError::Io(e.to_string()))
}

/// Full file contents: header, then every list.
pub fn render_generated_file(script: &str, info: &InstantiationInfo) -> Result<String, EmitError> {
    let mut out = header(script).into_bytes();
    write_lists(&mut out, &info.descriptor_lists())?;
    String::from_utf8(out).map_err(|e| EmitError::Io(e.to_string()))
}

/// Replace `path` with `contents`: the bytes go to a sibling temp file which
/// is synced and then renamed over `path`, so readers see the old file or
/// the new one and never a prefix.
pub fn write_generated_file(path: impl AsRef<Path>, contents: &str) -> Result<(), EmitError> {
    let path = path.as_ref();
    let parent = path.parent().filter(|p| !p.as_os_str().is_empty());
    if let Some(parent) = parent {
        fs::create_dir_all(parent).map_err(io_at(parent))?;
    }

    let staged = staging_path(path);
    if let Err(error) = stage(&staged, contents) {
        let _ = fs::remove_file(&staged);
        return Err(error);
    }
    if let Err(error) = fs::rename(&staged, path) {
        let _ = fs::remove_file(&staged);
        return Err(EmitError::Io(format!(
            "{} -> {}: {error}",
            staged.display(),
            path.display()
        )));
    }
    if let Some(parent) = parent {
        File::open(parent)
            .and_then(|dir| dir.sync_all())
            .map_err(io_at(parent))?;
    }

    tracing::debug!(path = %path.display(), bytes = contents.len(), "wrote generated file");
    Ok(())
}

fn stage(staged: &Path, contents: &str) -> Result<(), EmitError> {
    let mut file = File::create(staged).map_err(io_at(staged))?;
    file.write_all(contents.as_bytes())
        .and_then(|()| file.sync_all())
        .map_err(io_at(staged))
}

/// Tag an I/O error with the path it happened on.
fn io_at(path: &Path) -> impl Fn(std::io::Error) -> EmitError + '_ {
    move |e| EmitError::Io(format!("{}: {e}", path.display()))
}

/// `<path>.<pid>-<nanos>.partial`, next to `path`.
fn staging_path(path: &Path) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    let mut staged: OsString = path.as_os_str().to_os_string();
    staged.push(format!(".{}-{nanos}.partial", std::process::id()));
    PathBuf::from(staged)
}

/// Errors from writing generated files.
#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    #[error("I/O error: {0}")]
    Io(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use instmeta_kernel::{GeneratorSettings, SpaceRow, SpaceTable, Transformation, derive_all};

    fn temp_path(prefix: &str) -> PathBuf {
        let unique = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after unix epoch")
            .as_nanos();
        std::env::temp_dir().join(format!(
            "instmeta-emit-{prefix}-{}-{unique}/generated.txt",
            std::process::id()
        ))
    }

    #[test]
    fn header_names_script_basename() {
        assert_eq!(
            header("/build/cmake/instantiation_scripts/tensor.inst.py"),
            "// This file was automatically generated from tensor.inst.py\n\
             // DO NOT edit as it will be overwritten.\n\n"
        );
    }

    #[test]
    fn sections_list_entries() {
        let lists = vec![
            DescriptorList {
                name: "quadratures",
                entries: vec!["Quadrature<2>".to_string(), "Quadrature<1>".to_string()],
            },
            DescriptorList {
                name: "grid_wrappers",
                entries: Vec::new(),
            },
        ];
        let mut out = Vec::new();
        write_lists(&mut out, &lists).expect("lists should write");
        insta::assert_snapshot!(String::from_utf8(out).unwrap(), @r"
        // quadratures (2)
        Quadrature<2>
        Quadrature<1>

        // grid_wrappers (0)
        ");
    }

    #[test]
    fn empty_table_still_gets_header() {
        let info = derive_all(SpaceTable::default(), 1, &GeneratorSettings::default());
        let contents = render_generated_file("instmeta", &info).expect("render should succeed");
        assert!(contents.starts_with("// This file was automatically generated from instmeta\n"));
        assert!(contents.contains("// ref_dims (0)\n"));
    }

    #[test]
    fn write_generated_file_replaces_contents() {
        let path = temp_path("atomic");
        let rows = vec![SpaceRow::new(1, 1, 1, 1, Transformation::HGrad)];
        let info = derive_all(SpaceTable::from_user_rows(rows), 0, &GeneratorSettings::default());

        write_generated_file(&path, "stale\n").expect("first write should succeed");
        let contents = render_generated_file("instmeta", &info).expect("render should succeed");
        write_generated_file(&path, &contents).expect("second write should succeed");

        let written = fs::read_to_string(&path).expect("generated file should exist");
        assert!(!written.contains("stale"));
        assert!(written.contains("CartesianGrid<1>\n"));

        if let Some(parent) = path.parent() {
            let _ = fs::remove_dir_all(parent);
        }
    }

    #[test]
    fn failed_write_leaves_no_staging_file() {
        let dir = temp_path("blocked");
        let dir = dir.parent().expect("temp path has a parent").to_path_buf();
        let target = dir.join("taken");
        fs::create_dir_all(target.join("child")).expect("blocking dir should exist");

        assert!(write_generated_file(&target, "contents\n").is_err());
        let leftovers: Vec<_> = fs::read_dir(&dir)
            .expect("dir should list")
            .filter_map(Result::ok)
            .filter(|e| e.file_name().to_string_lossy().ends_with(".partial"))
            .collect();
        assert!(leftovers.is_empty());

        let _ = fs::remove_dir_all(dir);
    }
}
