//! CSV ledger source
//!
//! Reads the tabular finance export into a [`Ledger`]. Columns are located by
//! header name, so their order in the file does not matter.

use std::io::Read;
use std::path::Path;

use csv::{Reader, ReaderBuilder, StringRecord, Trim, Writer};

use crate::error::{FinanceError, FinanceResult};
use crate::models::{ExpenseRecord, IncomeRecord, Ledger, Money, MonthKey};

/// Header row written to new ledger files
pub const LEDGER_HEADERS: [&str; 7] = [
    "Month",
    "Type",
    "Category",
    "Amount",
    "Source",
    "Date",
    "Description",
];

/// Positions of the source columns within a row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceColumns {
    pub month: usize,
    pub kind: usize,
    pub category: usize,
    pub amount: usize,
    pub source: Option<usize>,
    pub date: Option<usize>,
    pub description: Option<usize>,
}

impl SourceColumns {
    /// Locate the columns in a header record
    pub fn from_headers(headers: &StringRecord) -> FinanceResult<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
        };
        let require = |name: &str| find(name).ok_or_else(|| FinanceError::missing_column(name));

        Ok(Self {
            month: require("month")?,
            kind: require("type")?,
            category: require("category")?,
            amount: require("amount")?,
            source: find("source"),
            date: find("date"),
            description: find("description"),
        })
    }
}

/// What a source row describes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowKind {
    Income,
    Expense,
    Other(String),
}

impl RowKind {
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "income" => Self::Income,
            "expense" => Self::Expense,
            other => Self::Other(other.to_string()),
        }
    }
}

/// Load a ledger from a CSV file
///
/// Fails with [`FinanceError::SourceNotFound`] if the file does not exist and
/// with [`FinanceError::DataFormat`] on the first row that cannot be read.
pub fn read_ledger<P: AsRef<Path>>(path: P) -> FinanceResult<Ledger> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(FinanceError::SourceNotFound {
            path: path.to_path_buf(),
        });
    }

    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_path(path)?;

    let ledger = read_ledger_from_reader(&mut reader)?;
    tracing::info!(
        path = %path.display(),
        months = ledger.month_count(),
        income = ledger.income_count(),
        expenses = ledger.expense_count(),
        "Loaded ledger"
    );
    Ok(ledger)
}

/// Load a ledger from an already-open CSV reader (header row expected)
pub fn read_ledger_from_reader<R: Read>(reader: &mut Reader<R>) -> FinanceResult<Ledger> {
    let headers = reader.headers()?.clone();
    let columns = SourceColumns::from_headers(&headers)?;
    let mut ledger = Ledger::new();

    for (idx, result) in reader.records().enumerate() {
        let row = idx + 1;
        let record = result.map_err(|e| FinanceError::DataFormat {
            row,
            message: e.to_string(),
        })?;
        load_record(&mut ledger, &record, row, &columns)?;
    }

    Ok(ledger)
}

fn load_record(
    ledger: &mut Ledger,
    record: &StringRecord,
    row: usize,
    columns: &SourceColumns,
) -> FinanceResult<()> {
    let cell = |col: usize| record.get(col).unwrap_or("").trim();
    let optional = |col: Option<usize>| col.map(cell).unwrap_or("").to_string();

    let month = MonthKey::parse(cell(columns.month)).map_err(|e| FinanceError::DataFormat {
        row,
        message: e.to_string(),
    })?;
    let kind = RowKind::parse(cell(columns.kind));

    // Every month value gets a bucket, whatever the row type
    ledger.bucket_mut(month);

    let pushed = match kind {
        RowKind::Income => {
            let amount = parse_amount(cell(columns.amount), row)?;
            ledger.push_income(month, IncomeRecord::new(cell(columns.category), amount))
        }
        RowKind::Expense => {
            let amount = parse_amount(cell(columns.amount), row)?;
            ledger.push_expense(
                month,
                ExpenseRecord {
                    category: cell(columns.category).to_string(),
                    amount,
                    source: optional(columns.source),
                    date: optional(columns.date),
                    description: optional(columns.description),
                },
            )
        }
        RowKind::Other(kind) => {
            tracing::warn!(row, kind = %kind, "Skipping row with unknown type");
            Ok(())
        }
    };

    pushed.map_err(|e| FinanceError::DataFormat {
        row,
        message: e.to_string(),
    })
}

fn parse_amount(s: &str, row: usize) -> FinanceResult<Money> {
    let amount = Money::parse(s).map_err(|e| FinanceError::DataFormat {
        row,
        message: e.to_string(),
    })?;

    if amount.is_negative() {
        return Err(FinanceError::DataFormat {
            row,
            message: format!("amount cannot be negative: {}", s),
        });
    }

    Ok(amount)
}

/// Create an empty ledger file containing only the header row
///
/// Returns `false` without touching the file when it already exists.
pub fn create_ledger_file<P: AsRef<Path>>(path: P) -> FinanceResult<bool> {
    let path = path.as_ref();
    if path.exists() {
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut writer = Writer::from_path(path)?;
    writer.write_record(LEDGER_HEADERS)?;
    writer.flush()?;

    tracing::info!(path = %path.display(), "Created ledger file");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn reader(data: &str) -> Reader<&[u8]> {
        ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(data.as_bytes())
    }

    #[test]
    fn test_load_income_and_expense_rows() {
        let csv_data = "month,type,category,amount,source,date,description\n\
            2024-01,income,Salary,5000,,,\n\
            2024-01,expense,Coffee,4.75,Starbucks,2024-01-03,Morning latte\n\
            2024-02,expense,Rent,1800.00,Landlord,2024-02-01,February rent\n";

        let ledger = read_ledger_from_reader(&mut reader(csv_data)).unwrap();
        let jan = MonthKey::parse("2024-01").unwrap();

        assert_eq!(ledger.month_count(), 2);
        assert_eq!(ledger.income(jan)[0].source, "Salary");
        assert_eq!(ledger.income(jan)[0].amount.cents(), 500000);

        let expense = &ledger.expenses(jan)[0];
        assert_eq!(expense.category, "Coffee");
        assert_eq!(expense.amount.cents(), 475);
        assert_eq!(expense.source, "Starbucks");
        assert_eq!(expense.date, "2024-01-03");
        assert_eq!(expense.description, "Morning latte");
    }

    #[test]
    fn test_columns_found_by_name_in_any_order() {
        let csv_data = "Amount,Description,Type,Month,Category,Date,Source\n\
            12.50,Lunch,expense,2024-03,Dining,2024-03-04,Restaurant\n";

        let ledger = read_ledger_from_reader(&mut reader(csv_data)).unwrap();
        let expenses = ledger.expenses(MonthKey::parse("2024-03").unwrap());
        assert_eq!(expenses[0].amount.cents(), 1250);
        assert_eq!(expenses[0].source, "Restaurant");
    }

    #[test]
    fn test_income_only_file_needs_no_expense_columns() {
        let csv_data = "month,type,category,amount\n2024-01,income,Salary,100\n";
        let ledger = read_ledger_from_reader(&mut reader(csv_data)).unwrap();
        let jan = MonthKey::parse("2024-01").unwrap();
        assert_eq!(ledger.income(jan).len(), 1);
        assert!(ledger.expenses(jan).is_empty());
    }

    #[test]
    fn test_bad_amount_is_data_format_error() {
        let csv_data = "month,type,category,amount,source,date,description\n\
            2024-01,expense,Food,12.00,Costco,2024-01-02,Bulk\n\
            2024-01,expense,Food,twelve,Costco,2024-01-03,Bulk\n";

        let err = read_ledger_from_reader(&mut reader(csv_data)).unwrap_err();
        match err {
            FinanceError::DataFormat { row, .. } => assert_eq!(row, 2),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_negative_amount_is_rejected() {
        let csv_data = "month,type,category,amount\n2024-01,expense,Food,-3\n";
        let err = read_ledger_from_reader(&mut reader(csv_data)).unwrap_err();
        assert!(err.is_data_format());
    }

    #[test]
    fn test_bad_month_is_rejected() {
        let csv_data = "month,type,category,amount\nJanuary,income,Salary,100\n";
        let err = read_ledger_from_reader(&mut reader(csv_data)).unwrap_err();
        assert!(err.is_data_format());
    }

    #[test]
    fn test_missing_column_is_reported() {
        let csv_data = "month,type,amount\n2024-01,income,100\n";
        let err = read_ledger_from_reader(&mut reader(csv_data)).unwrap_err();
        assert!(err.to_string().contains("category"));
    }

    #[test]
    fn test_unknown_row_type_is_skipped_but_month_exists() {
        let csv_data = "month,type,category,amount\n2024-05,transfer,Savings,100\n";
        let ledger = read_ledger_from_reader(&mut reader(csv_data)).unwrap();
        let may = MonthKey::parse("2024-05").unwrap();
        assert!(ledger.bucket(may).is_some());
        assert_eq!(ledger.expense_count() + ledger.income_count(), 0);
    }

    #[test]
    fn test_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = read_ledger(temp_dir.path().join("missing.csv")).unwrap_err();
        assert!(err.is_source_not_found());
    }

    #[test]
    fn test_read_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("finances.csv");
        fs::write(
            &path,
            "month,type,category,amount,source,date,description\n\
             2024-01,expense,Transport,23.10,Uber,2024-01-09,Airport ride\n",
        )
        .unwrap();

        let ledger = read_ledger(&path).unwrap();
        assert_eq!(ledger.expense_count(), 1);
    }

    #[test]
    fn test_create_ledger_file_is_readable_and_not_overwritten() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data").join("finances.csv");

        assert!(create_ledger_file(&path).unwrap());
        let ledger = read_ledger(&path).unwrap();
        assert!(ledger.is_empty());

        fs::write(&path, "Month,Type,Category,Amount\n2024-01,expense,Food,3\n").unwrap();
        assert!(!create_ledger_file(&path).unwrap());
        assert_eq!(read_ledger(&path).unwrap().expense_count(), 1);
    }

    #[test]
    fn test_month_total_overflow_is_data_format_error() {
        let csv_data = "month,type,category,amount\n\
            2024-01,expense,Travel,60000000000000000\n\
            2024-02,expense,Travel,60000000000000000\n\
            2024-01,expense,Travel,60000000000000000\n";

        let err = read_ledger_from_reader(&mut reader(csv_data)).unwrap_err();
        match err {
            FinanceError::DataFormat { row, message } => {
                assert_eq!(row, 3);
                assert!(message.starts_with("Amount too large"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
