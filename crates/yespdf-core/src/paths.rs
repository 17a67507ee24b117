//! String-level path helpers. Nothing here touches the filesystem except
//! reading the current working directory.

use std::io;
use std::path::{Component, Path, PathBuf};

/// Suffix a path must end with to count as a PDF. Case-sensitive.
pub const PDF_SUFFIX: &str = ".pdf";

/// Whether `path` ends with [`PDF_SUFFIX`].
pub fn has_pdf_suffix(path: &str) -> bool {
    path.ends_with(PDF_SUFFIX)
}

/// Text after the final path separator.
///
/// Unlike [`Path::file_name`], a trailing separator yields `""` and `..` is
/// returned as-is.
pub fn base_name(path: &str) -> &str {
    match path.rfind(std::path::is_separator) {
        // Separators are ASCII.
        Some(i) => &path[i + 1..],
        None => path,
    }
}

/// Resolve `path` against the current working directory.
pub fn absolute_path(path: &Path) -> io::Result<PathBuf> {
    if path.is_absolute() {
        return Ok(normalize(path));
    }
    let cwd = std::env::current_dir()?;
    Ok(normalize(&cwd.join(path)))
}

/// Lexical normalization: `.` is dropped, `..` pops the previous component,
/// and repeated separators collapse. Symlinks are not resolved.
///
/// On Unix a leading `//` (exactly two slashes) is kept, since POSIX leaves
/// its meaning implementation-defined.
pub fn normalize(path: &Path) -> PathBuf {
    let mut root = PathBuf::new();
    let mut parts: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => root.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                // `..` at the root stays at the root.
                _ if root.as_os_str().is_empty() => parts.push(component),
                _ => {}
            },
            Component::Normal(_) => parts.push(component),
        }
    }

    #[cfg(unix)]
    {
        let bytes = path.as_os_str().as_encoded_bytes();
        if bytes.starts_with(b"//") && !bytes.starts_with(b"///") {
            root = PathBuf::from("//");
        }
    }

    let mut out = root;
    for part in parts {
        out.push(part.as_os_str());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pdf_suffix_is_case_sensitive() {
        assert!(has_pdf_suffix("report.pdf"));
        assert!(has_pdf_suffix(".pdf"));
        assert!(!has_pdf_suffix("report.PDF"));
        assert!(!has_pdf_suffix("report.pdf.txt"));
        assert!(!has_pdf_suffix("reportpdf"));
    }

    #[test]
    fn base_name_takes_last_component() {
        assert_eq!(base_name("/a/b/report.pdf"), "report.pdf");
        assert_eq!(base_name("report.pdf"), "report.pdf");
        assert_eq!(base_name("dir/"), "");
        assert_eq!(base_name("a/.."), "..");
    }

    #[cfg(unix)]
    #[test]
    fn normalize_collapses_dots_and_separators() {
        assert_eq!(
            normalize(Path::new("/a/./b//c/../d.pdf")),
            PathBuf::from("/a/b/d.pdf")
        );
        assert_eq!(normalize(Path::new("/../x")), PathBuf::from("/x"));
        assert_eq!(normalize(Path::new("../a/../b")), PathBuf::from("../b"));
    }

    #[cfg(unix)]
    #[test]
    fn leading_double_slash_is_kept() {
        // Path equality ignores repeated separators; compare the raw text.
        assert_eq!(normalize(Path::new("//x")).as_os_str(), "//x");
        assert_eq!(normalize(Path::new("//x/./y/..")).as_os_str(), "//x");
        assert_eq!(normalize(Path::new("///x")).as_os_str(), "/x");
        assert_eq!(absolute_path(Path::new("//x")).unwrap().as_os_str(), "//x");
    }

    #[test]
    fn relative_path_joins_cwd() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(
            absolute_path(Path::new("report.pdf")).unwrap(),
            cwd.join("report.pdf")
        );
    }

    #[cfg(unix)]
    #[test]
    fn absolute_path_is_kept() {
        assert_eq!(
            absolute_path(Path::new("/tmp/x/../report.pdf")).unwrap(),
            PathBuf::from("/tmp/report.pdf")
        );
    }
}
