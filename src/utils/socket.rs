use std::path::Path;

/// Returns `true` if `path` names a Unix domain socket.
///
/// Empty or missing paths, and anything `stat` refuses, are reported as
/// `false`. Always `false` on non-Unix targets.
pub fn is_socket_file<P: AsRef<Path>>(path: P) -> bool {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return false;
    }

    match std::fs::metadata(path) {
        Ok(meta) => is_socket(&meta.file_type()),
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::debug!("unable to stat {}: {}", path.display(), e);
            }
            false
        }
    }
}

#[cfg(unix)]
fn is_socket(file_type: &std::fs::FileType) -> bool {
    use std::os::unix::fs::FileTypeExt;
    file_type.is_socket()
}

#[cfg(not(unix))]
fn is_socket(_file_type: &std::fs::FileType) -> bool {
    false
}

#[cfg(test)]
mod test {
    use std::fs;

    use super::*;

    #[test]
    fn test_is_socket_file_missing() {
        assert!(!is_socket_file(""));
        assert!(!is_socket_file("/this/path/does/not/exist.sock"));
    }

    #[test]
    fn test_is_socket_file_regular_and_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        let file_path = temp_dir.path().join("plain");
        fs::write(&file_path, b"not a socket").unwrap();

        assert!(!is_socket_file(&file_path));
        assert!(!is_socket_file(temp_dir.path()));
    }

    #[cfg(unix)]
    #[test]
    fn test_is_socket_file_unix_socket() {
        let temp_dir = tempfile::tempdir().unwrap();
        let sock_path = temp_dir.path().join("service.sock");
        let _listener = std::os::unix::net::UnixListener::bind(&sock_path).unwrap();

        assert!(is_socket_file(&sock_path));
    }
}
