//! File handling shared by all codecs.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use super::CodecError;

/// Mode of newly created artifacts on Unix (rw-r--r--)
#[cfg(unix)]
pub(crate) const ARTIFACT_MODE: u32 = 0o644;

/// Buffered handle over the temporary file backing an in-progress artifact
pub(crate) type ArtifactWriter<'a> = BufWriter<&'a mut File>;

/// Write an artifact through a temporary sibling file and rename it into place.
///
/// If `write` fails, the temporary file is removed and `destination` is left
/// as it was. A replaced artifact keeps its permissions; a new one gets
/// [`ARTIFACT_MODE`] on Unix. Returns the size of the committed artifact in
/// bytes.
pub(crate) fn write_atomically<F>(destination: &Path, write: F) -> Result<u64, CodecError>
where
    F: FnOnce(&mut ArtifactWriter<'_>) -> Result<(), CodecError>,
{
    let dir = parent_dir(destination);
    let mut tmp = tempfile::Builder::new()
        .prefix(".userformats-")
        .suffix(".tmp")
        .tempfile_in(&dir)?;

    {
        let mut out = BufWriter::new(tmp.as_file_mut());
        write(&mut out)?;
        out.flush()?;
    }
    set_artifact_permissions(tmp.as_file(), destination)?;
    tmp.as_file().sync_all()?;

    tmp.persist(destination).map_err(|e| CodecError::IoError(e.error))?;

    Ok(fs::metadata(destination)?.len())
}

/// Open an artifact for decoding, mapping a missing file to [`CodecError::NotFound`]
pub(crate) fn open_artifact(source: &Path) -> Result<File, CodecError> {
    File::open(source).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => CodecError::NotFound(source.to_path_buf()),
        _ => CodecError::IoError(e),
    })
}

#[cfg(unix)]
fn set_artifact_permissions(file: &File, destination: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let permissions = match fs::metadata(destination) {
        Ok(meta) if meta.is_file() => meta.permissions(),
        _ => fs::Permissions::from_mode(ARTIFACT_MODE),
    };
    file.set_permissions(permissions)
}

#[cfg(not(unix))]
fn set_artifact_permissions(_file: &File, _destination: &Path) -> io::Result<()> {
    Ok(())
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_atomically_commits() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.txt");

        let bytes = write_atomically(&path, |out| {
            out.write_all(b"hello")?;
            Ok(())
        })
        .unwrap();

        assert_eq!(bytes, 5);
        assert_eq!(fs::read(&path).unwrap(), b"hello");
    }

    #[test]
    fn test_failed_write_keeps_previous_artifact() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.txt");
        fs::write(&path, b"previous").unwrap();

        let result = write_atomically(&path, |out| {
            out.write_all(b"partial")?;
            Err(CodecError::malformed(Path::new("x"), "boom"))
        });

        assert!(result.is_err());
        assert_eq!(fs::read(&path).unwrap(), b"previous");
        // No temporary files left behind
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_new_artifact_is_world_readable() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let path = dir.path().join("out.txt");
        write_atomically(&path, |out| Ok(out.write_all(b"hello")?)).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, ARTIFACT_MODE);
    }

    #[cfg(unix)]
    #[test]
    fn test_replaced_artifact_keeps_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let path = dir.path().join("out.txt");
        fs::write(&path, b"previous").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o640)).unwrap();

        write_atomically(&path, |out| Ok(out.write_all(b"next")?)).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o640);
        assert_eq!(fs::read(&path).unwrap(), b"next");
    }

    #[test]
    fn test_open_missing_artifact() {
        let dir = tempdir().unwrap();
        let result = open_artifact(&dir.path().join("missing.csv"));
        assert!(matches!(result, Err(CodecError::NotFound(_))));
    }
}
