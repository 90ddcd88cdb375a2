//! Reading command inputs

use std::fs;
use std::path::Path;

use color_eyre::eyre::WrapErr;
use finmgr_core::date_math::utc_midnight;
use jiff::Timestamp;
use jiff::civil::Date;
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// Deserialize a JSON file
pub fn read_json<T: DeserializeOwned>(path: &Path) -> color_eyre::Result<T> {
    let content =
        fs::read_to_string(path).wrap_err_with(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&content).wrap_err_with(|| format!("failed to parse {}", path.display()))
}

/// A file holding either a single record or an array of them
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

pub fn read_json_list<T: DeserializeOwned>(path: &Path) -> color_eyre::Result<Vec<T>> {
    Ok(match read_json::<OneOrMany<T>>(path)? {
        OneOrMany::One(item) => vec![item],
        OneOrMany::Many(items) => items,
    })
}

/// Start of a command-line date in UTC, or the current instant when absent
pub fn resolve_now(date: Option<Date>) -> color_eyre::Result<Timestamp> {
    match date {
        Some(d) => Ok(utc_midnight(d)?),
        None => Ok(Timestamp::now()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use finmgr_core::model::Loan;
    use tempfile::tempdir;

    #[test]
    fn test_single_or_list() {
        let dir = tempdir().unwrap();
        let one = dir.path().join("one.json");
        let many = dir.path().join("many.json");
        fs::write(&one, r#"{"total":1000,"interestRate":5,"loanTerm":12}"#).unwrap();
        fs::write(
            &many,
            r#"[{"total":1000,"interestRate":5,"loanTerm":12},{"total":2000,"interestRate":4,"loanTerm":6}]"#,
        )
        .unwrap();

        assert_eq!(read_json_list::<Loan>(&one).unwrap().len(), 1);
        let loans = read_json_list::<Loan>(&many).unwrap();
        assert_eq!(loans.len(), 2);
        assert_eq!(loans[1].total, 2000.0);
    }

    #[test]
    fn test_parse_error_names_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{").unwrap();

        let err = read_json::<Loan>(&path).unwrap_err();
        assert!(err.to_string().contains("bad.json"));
    }

    #[test]
    fn test_resolve_now_uses_utc_midnight() {
        let now = resolve_now(Some(jiff::civil::date(2024, 1, 23))).unwrap();
        assert_eq!(now, "2024-01-23T00:00:00Z".parse::<Timestamp>().unwrap());
    }
}
