//! Longest shared dotted prefix across a set of qualified names.
//!
//! Generated file names are shortened by stripping the prefix every task
//! shares, and the same prefix is descended again on import to rebuild the
//! package directories under the source root.

use std::path::PathBuf;

/// Compute the longest dotted prefix shared by all of `paths`.
///
/// Names are compared segment by segment. The walk stops as soon as one
/// name runs out of segments or a segment disagrees, so a name that is a
/// strict prefix of another bounds the result. With a single name the
/// result is that whole name; with no names or no shared leading segment
/// the result is empty.
pub fn common_root(paths: &[String]) -> String {
    let names: Vec<Vec<&str>> = paths.iter().map(|p| p.split('.').collect()).collect();

    let mut root = String::new();
    let mut index = 0;
    'segments: loop {
        let mut check: Option<&str> = None;
        for segments in &names {
            match segments.get(index) {
                None => break 'segments,
                Some(segment) => match check {
                    None => check = Some(segment),
                    Some(first) if first != *segment => break 'segments,
                    Some(_) => {}
                },
            }
        }
        // No names at all
        let Some(segment) = check else {
            break;
        };
        if index > 0 {
            root.push('.');
        }
        root.push_str(segment);
        index += 1;
    }
    root
}

/// Turn a dotted name into a relative path, one directory per segment.
/// An empty name yields an empty path.
pub fn dotted_to_path(dotted: &str) -> PathBuf {
    let mut path = PathBuf::new();
    for segment in dotted.split('.').filter(|s| !s.is_empty()) {
        path.push(segment);
    }
    path
}
