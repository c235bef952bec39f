use crate::app::models::Entry;
use pathdiff::diff_paths;
use std::path::Path;

pub struct OutputGenerator;

impl OutputGenerator {
    /// One line per file, relative to `root`, optionally prefixed by its size.
    pub fn generate_list(entries: &[Entry], root: &Path, long: bool) -> String {
        let mut output = String::new();

        for entry in entries {
            let relative = diff_paths(&entry.path, root).unwrap_or_else(|| entry.path.clone());
            if long {
                output.push_str(&format!("{:>12}  {}\n", entry.size, relative.display()));
            } else {
                output.push_str(&format!("{}\n", relative.display()));
            }
        }

        output.trim_end().to_string()
    }

    pub fn sort_entries(entries: &mut [Entry]) {
        entries.sort_by(|a, b| a.path.cmp(&b.path));
    }
}
