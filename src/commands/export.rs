//! JSON export of solved games

use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Serialize `document` to `output`, or to stdout when `None`
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_json<T: Serialize>(document: &T, output: Option<&Path>, pretty: bool) -> io::Result<()> {
    match output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            to_writer(&mut writer, document, pretty)?;
            writer.flush()?;
            log::info!("wrote {}", path.display());
            Ok(())
        }
        None => {
            let mut writer = io::stdout().lock();
            to_writer(&mut writer, document, pretty)?;
            writeln!(writer)
        }
    }
}

fn to_writer<W: Write, T: Serialize>(writer: W, document: &T, pretty: bool) -> io::Result<()> {
    if pretty {
        serde_json::to_writer_pretty(writer, document)?;
    } else {
        serde_json::to_writer(writer, document)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::Strategy;

    #[test]
    fn write_compact_and_pretty() {
        let strategy = Strategy::from_words(&["abc", "bac"]).unwrap();
        let dir = std::env::temp_dir();
        let compact = dir.join(format!("hangman_export_{}_compact.json", std::process::id()));
        let pretty = dir.join(format!("hangman_export_{}_pretty.json", std::process::id()));

        write_json(&strategy.json(), Some(&compact), false).unwrap();
        write_json(&strategy.json(), Some(&pretty), true).unwrap();

        let compact_text = std::fs::read_to_string(&compact).unwrap();
        let pretty_text = std::fs::read_to_string(&pretty).unwrap();
        std::fs::remove_file(&compact).unwrap();
        std::fs::remove_file(&pretty).unwrap();

        assert!(!compact_text.contains('\n'));
        assert!(pretty_text.contains('\n'));

        let a: serde_json::Value = serde_json::from_str(&compact_text).unwrap();
        let b: serde_json::Value = serde_json::from_str(&pretty_text).unwrap();
        assert_eq!(a, b);
        assert_eq!(a["max_errors"], 0);
    }

    #[test]
    fn missing_directory_fails() {
        let strategy = Strategy::from_words(&["ab"]).unwrap();
        let path = Path::new("/nonexistent-hangman-dir/out.json");
        assert!(write_json(&strategy.json(), Some(path), false).is_err());
    }
}
