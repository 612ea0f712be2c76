use super::tables;
use gearforge::search::Combination;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Append-only record of every best combination, in the same layout as the console.
pub struct ResultLog {
    file: File,
}

impl ResultLog {
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        if file.metadata()?.len() == 0 {
            writeln!(file, "# gearforge results")?;
        }
        Ok(Self { file })
    }

    pub fn append(&mut self, combo: &Combination) -> io::Result<()> {
        let mut table = tables::combination(combo);
        table.force_no_tty();
        writeln!(self.file, "\n{}", table)?;
        writeln!(self.file, "{}", tables::summary(&combo.totals))?;
        self.file.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gearforge::search::Totals;

    fn empty_combo(dps: f64) -> Combination {
        Combination {
            items: Vec::new(),
            totals: Totals {
                dps,
                ..Totals::default()
            },
        }
    }

    #[test]
    fn test_header_written_once_across_reopens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.txt");

        let mut log = ResultLog::open(&path).unwrap();
        log.append(&empty_combo(12.5)).unwrap();
        drop(log);

        let mut log = ResultLog::open(&path).unwrap();
        log.append(&empty_combo(13.0)).unwrap();
        drop(log);

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.matches("# gearforge results").count(), 1);
        assert!(content.contains("Total DPS: 12.50"));
        assert!(content.contains("Total DPS: 13.00"));
        assert!(!content.contains('\u{1b}'), "log must not contain ANSI escapes");
    }
}
