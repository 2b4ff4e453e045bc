//! Flat CSV export of the score table.
//!
//! One row per PairScore, 13 columns in creation order, header row,
//! no index column.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use h2influence_common::entities::PairScoreRow;
use h2influence_common::{PairScore, Result};
use tracing::info;

pub const DEFAULT_SCORES_FILE: &str = "project_influence_scores.csv";

/// Serialize `scores` to any writer. The header is written even for an
/// empty table.
pub fn write_scores<W: Write>(scores: &[PairScore], writer: W) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(PairScoreRow::COLUMNS)?;
    for pair in scores {
        csv_writer.serialize(pair.as_row())?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write `scores` to `path`, replacing any existing file.
pub fn save_scores_to_csv(scores: &[PairScore], path: &Path) -> Result<()> {
    let file = File::create(path)?;
    write_scores(scores, file)?;
    info!(path = %path.display(), n_rows = scores.len(), "Scores saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use h2influence_common::ProjectRecord;
    use pretty_assertions::assert_eq;

    fn pair() -> PairScore {
        PairScore {
            source: ProjectRecord::new("HyDeal", "Electrolysis", "ES", 400.0, 1800.0, "2030"),
            target: ProjectRecord::new("Masshylia", "Electrolysis", "FR", 5.0, 100.0, "2025"),
            score: 0.6,
        }
    }

    #[test]
    fn test_header_and_row_layout() {
        let mut out = Vec::new();
        write_scores(&[pair()], &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "Project1,Project2,Score,Technology1,Country1,Capacity1,Investment1,Date1,\
             Technology2,Country2,Capacity2,Investment2,Date2"
        );
        assert_eq!(
            lines[1],
            "HyDeal,Masshylia,0.6,Electrolysis,ES,400.0,1800.0,2030,Electrolysis,FR,5.0,100.0,2025"
        );
    }

    #[test]
    fn test_empty_table_still_has_header() {
        let mut out = Vec::new();
        write_scores(&[], &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.starts_with("Project1,Project2,Score"));
    }

    #[test]
    fn test_names_with_commas_are_quoted() {
        let mut p = pair();
        p.source.name = "Hydrogen Valley, South".to_string();
        let mut out = Vec::new();
        write_scores(&[p], &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\"Hydrogen Valley, South\""));
    }
}
