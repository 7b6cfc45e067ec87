use std::path::{Path, PathBuf};

/// Characters that are illegal in a path segment on at least one of the
/// filesystems we care about.
const ILLEGAL_CHARS: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Replace filesystem-hostile characters in a title with underscores.
pub fn sanitize(title: &str) -> String {
    title
        .chars()
        .map(|c| if ILLEGAL_CHARS.contains(&c) { '_' } else { c })
        .collect()
}

/// Find a path under `dir` that does not exist yet: `title.ext`, then
/// `title_1.ext`, `title_2.ext`, and so on. The counter is unbounded;
/// collision runs are short in practice but nothing here assumes a cap.
///
/// The returned path is guaranteed not to exist at the moment of the check.
/// There is no reservation beyond that instant, which is fine for a
/// single-user interactive tool.
pub fn allocate(dir: &Path, title: &str, extension: &str) -> PathBuf {
    let mut candidate = dir.join(format!("{title}.{extension}"));
    let mut i: u64 = 1;
    while candidate.exists() {
        candidate = dir.join(format!("{title}_{i}.{extension}"));
        i += 1;
    }
    candidate
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_sanitize_strips_illegal_characters() {
        assert_eq!(sanitize("a/b\\c:d"), "a_b_c_d");
        assert_eq!(sanitize("what? \"why\" <how> | *when*"), "what_ _why_ _how_ _ _when_");
    }

    #[test]
    fn test_sanitize_is_identity_on_clean_titles() {
        assert_eq!(sanitize("My Title - Part 2 (live)"), "My Title - Part 2 (live)");
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn test_sanitize_handles_unicode() {
        assert_eq!(sanitize("ünïcödé/tïtle"), "ünïcödé_tïtle");
    }

    #[test]
    fn test_allocate_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = allocate(dir.path(), "t", "mp3");
        assert_eq!(path, dir.path().join("t.mp3"));
        assert!(!path.exists());
    }

    #[test]
    fn test_allocate_skips_existing() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("t.mp3"), b"").unwrap();
        assert_eq!(allocate(dir.path(), "t", "mp3"), dir.path().join("t_1.mp3"));

        fs::write(dir.path().join("t_1.mp3"), b"").unwrap();
        assert_eq!(allocate(dir.path(), "t", "mp3"), dir.path().join("t_2.mp3"));
    }

    #[test]
    fn test_allocate_result_never_exists_at_call_time() {
        let dir = tempfile::tempdir().unwrap();
        for _ in 0..5 {
            let path = allocate(dir.path(), "clip", "mp4");
            assert!(!path.exists());
            fs::write(&path, b"").unwrap();
        }
        assert_eq!(allocate(dir.path(), "clip", "mp4"), dir.path().join("clip_5.mp4"));
    }

    #[test]
    fn test_allocate_extensions_are_independent() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("t.mp3"), b"").unwrap();
        assert_eq!(allocate(dir.path(), "t", "mp4"), dir.path().join("t.mp4"));
    }
}
