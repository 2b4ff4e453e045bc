//! Project table loader.
//!
//! Reads the hydrogen project spreadsheet export (CSV) into [`ProjectRecord`]s.
//!
//! Expected columns (exact names, any order, extra columns ignored):
//! - `Project Name`
//! - `Technology`
//! - `Country`
//! - `Capacity (kt H2/y)`
//! - `Investment Cost (MUSD)`
//! - `Date Online`
//!
//! Loading is all-or-nothing: the first bad header or row aborts the load.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use h2influence_common::{InfluenceError, ProjectRecord, Result, REQUIRED_COLUMNS};
use tracing::{debug, info};

/// Load every project from a CSV file.
pub fn load_data(path: &Path) -> Result<Vec<ProjectRecord>> {
    if !path.exists() {
        return Err(InfluenceError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("project table not found at {}", path.display()),
        )));
    }

    info!(path = %path.display(), "Loading project table");
    let file = File::open(path)?;
    let projects = parse_projects(file)?;
    info!(n_projects = projects.len(), "Loaded project table");
    Ok(projects)
}

/// Parse projects from any CSV source.
pub fn parse_projects<R: Read>(source: R) -> Result<Vec<ProjectRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Fields)
        .from_reader(source);

    let headers = reader.headers()?.clone();
    check_required_columns(&headers)?;
    debug!(n_columns = headers.len(), "Header validated");

    let mut projects = Vec::new();
    for (idx, result) in reader.deserialize::<ProjectRecord>().enumerate() {
        let row = idx + 1;
        let record = result.map_err(|e| InfluenceError::Input {
            row,
            message: describe_csv_error(&e),
        })?;
        validate_record(&record, row)?;
        projects.push(record);
    }

    Ok(projects)
}

// ── Validation ──────────────────────────────────────────────────────────────

fn check_required_columns(headers: &csv::StringRecord) -> Result<()> {
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(InfluenceError::MissingColumn(column.to_string()));
        }
    }
    Ok(())
}

fn validate_record(record: &ProjectRecord, row: usize) -> Result<()> {
    check_quantity(record.capacity, "capacity", row)?;
    check_quantity(record.investment, "investment cost", row)?;
    Ok(())
}

fn check_quantity(value: f64, field: &str, row: usize) -> Result<()> {
    if !value.is_finite() {
        return Err(InfluenceError::Input {
            row,
            message: format!("{field} is not a finite number"),
        });
    }
    if value < 0.0 {
        return Err(InfluenceError::Input {
            row,
            message: format!("{field} is negative ({value})"),
        });
    }
    Ok(())
}

fn describe_csv_error(err: &csv::Error) -> String {
    match err.kind() {
        csv::ErrorKind::Deserialize { err, .. } => match err.field() {
            Some(field) => format!("field {}: {}", field + 1, err.kind()),
            None => err.kind().to_string(),
        },
        _ => err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "Project Name,Technology,Country,Capacity (kt H2/y),Investment Cost (MUSD),Date Online";

    #[test]
    fn test_parse_basic_table() {
        let data = format!(
            "{HEADER}\nHyDeal,Electrolysis,ES,120.5,900,2030\nH2Ruhr,SMR,DE,60,450,2026\n"
        );
        let projects = parse_projects(data.as_bytes()).unwrap();
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].name, "HyDeal");
        assert_eq!(projects[0].capacity, 120.5);
        assert_eq!(projects[1].date_online, "2026");
    }

    #[test]
    fn test_column_order_and_extras_are_ignored() {
        let data = "Country,Notes,Date Online,Project Name,Technology,Investment Cost (MUSD),Capacity (kt H2/y)\n\
                    NL,pilot,2028,NortH2,Electrolysis,2000,800\n";
        let projects = parse_projects(data.as_bytes()).unwrap();
        assert_eq!(projects[0].country, "NL");
        assert_eq!(projects[0].capacity, 800.0);
        assert_eq!(projects[0].investment, 2000.0);
    }

    #[test]
    fn test_missing_column_is_input_error() {
        let data = "Project Name,Technology,Country,Capacity,Investment Cost (MUSD),Date Online\n\
                    A,SMR,FR,10,20,2025\n";
        let err = parse_projects(data.as_bytes()).unwrap_err();
        assert!(err.is_input_error());
        assert!(matches!(err, InfluenceError::MissingColumn(ref c) if c == "Capacity (kt H2/y)"));
    }

    #[test]
    fn test_unparsable_capacity_names_row() {
        let data = format!("{HEADER}\nA,SMR,FR,10,20,2025\nB,SMR,FR,lots,20,2025\n");
        let err = parse_projects(data.as_bytes()).unwrap_err();
        assert!(matches!(err, InfluenceError::Input { row: 2, .. }));
    }

    #[test]
    fn test_negative_investment_rejected() {
        let data = format!("{HEADER}\nA,SMR,FR,10,-5,2025\n");
        let err = parse_projects(data.as_bytes()).unwrap_err();
        match err {
            InfluenceError::Input { row, message } => {
                assert_eq!(row, 1);
                assert!(message.contains("investment cost"));
            }
            other => panic!("expected input error, got {other:?}"),
        }
    }

    #[test]
    fn test_numeric_date_kept_as_label() {
        let data = format!("{HEADER}\nA,SMR,FR,10,20,2025\n");
        let projects = parse_projects(data.as_bytes()).unwrap();
        assert_eq!(projects[0].date_online, "2025");
    }

    #[test]
    fn test_header_only_yields_empty_population() {
        let projects = parse_projects(format!("{HEADER}\n").as_bytes()).unwrap();
        assert!(projects.is_empty());
    }
}
