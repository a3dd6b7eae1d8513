//! Conversion of picked files into intake candidates.
//!
//! Only the declared metadata is read; file contents are never loaded.

use googlia::FileCandidate;
use web_sys::{File, FileList};

/// Declared name, MIME type and size of a browser file.
pub fn candidate_from_file(file: &File) -> FileCandidate {
    FileCandidate::new(file.name(), file.type_(), file.size().max(0.0) as u64)
}

/// Every file of a picker or drop `FileList`, in order.
pub fn candidates_from_list(list: &FileList) -> Vec<FileCandidate> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|file| candidate_from_file(&file))
        .collect()
}
