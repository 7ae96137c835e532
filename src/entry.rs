use std::fs;
use std::io;
use std::path::Path;

/// How the engine treats one entry of a directory listing.
///
/// Derived from the entry's own file type, without following it, so a link
/// is never mistaken for the directory it points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EntryKind {
    /// Anything that is not a directory: regular files, symlinks to files,
    /// dangling symlinks, pipes, sockets, devices. These are match candidates.
    File,

    /// A real directory. Queued for the next wave.
    Dir,

    /// A symbolic link (or junction) resolving to a directory. Never traversed.
    DirLink,
}

impl EntryKind {
    pub(crate) fn of(entry: &fs::DirEntry) -> io::Result<Self> {
        let ft = entry.file_type()?;
        if ft.is_dir() {
            Ok(Self::Dir)
        } else if ft.is_symlink() {
            Ok(if points_to_dir(&entry.path()) { Self::DirLink } else { Self::File })
        } else {
            Ok(Self::File)
        }
    }

    pub(crate) fn is_dir_like(self) -> bool {
        matches!(self, Self::Dir | Self::DirLink)
    }
}

/// Dangling links count as files.
fn points_to_dir(link: &Path) -> bool {
    fs::metadata(link).map(|m| m.is_dir()).unwrap_or(false)
}
