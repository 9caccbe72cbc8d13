use mock_core::{CellValue, MockConfig};
use mock_export::{ExportArgs, OutputFormat};
use mockgen::commands::generate::{export_if_requested, generate_from_config};
use mockgen::commands::validate::validate_columns;
use mockgen::GenerateOpts;
use std::fs;
use tempfile::TempDir;

const USERS_CONFIG: &str = r#"
num_rows: 50
seed: 11

schema:
  - name: id
    type: integer
    generation:
      start: 100
      step: 5

  - name: email
    type: string
    generation:
      faker: email

  - name: age
    type: integer
    generation:
      min: 18
      max: 80

  - name: signup_date
    type: date
    generation:
      start_date: 2020-01-01
      end_date: 2020-01-31

  - name: is_active
    type: boolean
    generation:
      probability: 1.0

  - name: plan
    type: categorical
    generation:
      categories: [free, basic, premium]
      probabilities: [0.5, 0.3, 0.2]
"#;

fn users_config() -> MockConfig {
    MockConfig::from_yaml(USERS_CONFIG).unwrap()
}

fn default_opts() -> GenerateOpts {
    GenerateOpts {
        rows: None,
        seed: None,
        preview: 0,
    }
}

#[test]
fn test_generate_users_table() {
    let table = generate_from_config(&users_config(), &default_opts()).unwrap();

    assert_eq!(table.num_rows(), 50);
    assert_eq!(
        table.column_names(),
        vec!["id", "email", "age", "signup_date", "is_active", "plan"]
    );

    let ids = table.get("id").unwrap().as_integers().unwrap();
    assert_eq!(ids[0], 100);
    assert_eq!(ids[49], 100 + 49 * 5);

    let ages = table.get("age").unwrap().as_integers().unwrap();
    assert!(ages.iter().all(|a| (18..=80).contains(a)));

    let emails = table.get("email").unwrap().as_strings().unwrap();
    assert!(emails.iter().all(|e| e.contains('@')));

    let start = chrono::NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    let end = chrono::NaiveDate::from_ymd_opt(2020, 1, 31).unwrap();
    let dates = table.get("signup_date").unwrap().as_dates().unwrap();
    assert!(dates.iter().all(|d| *d >= start && *d <= end));

    let active = table.get("is_active").unwrap().as_booleans().unwrap();
    assert!(active.iter().all(|a| *a));

    let plans = table.get("plan").unwrap().as_strings().unwrap();
    assert!(plans
        .iter()
        .all(|p| ["free", "basic", "premium"].contains(&p.as_str())));
}

#[test]
fn test_seeded_generation_is_reproducible() {
    let config = users_config();
    let first = generate_from_config(&config, &default_opts()).unwrap();
    let second = generate_from_config(&config, &default_opts()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_cli_overrides_rows_and_seed() {
    let config = users_config();
    let opts = GenerateOpts {
        rows: Some(3),
        seed: Some(99),
        preview: 0,
    };

    let table = generate_from_config(&config, &opts).unwrap();
    assert_eq!(table.num_rows(), 3);
    assert_eq!(
        table.get("id").unwrap().as_integers().unwrap(),
        &[100, 105, 110]
    );

    let again = generate_from_config(&config, &opts).unwrap();
    assert_eq!(table, again);
}

#[test]
fn test_zero_rows_keeps_columns() {
    let opts = GenerateOpts {
        rows: Some(0),
        ..default_opts()
    };
    let table = generate_from_config(&users_config(), &opts).unwrap();
    assert_eq!(table.num_rows(), 0);
    assert_eq!(table.num_columns(), 6);
}

#[test]
fn test_generation_error_names_column() {
    let config = MockConfig::from_yaml(
        r#"
num_rows: 5
schema:
  - name: id
    type: integer
    generation: { start: 1, step: 1 }
  - name: plan
    type: categorical
    generation:
      categories: [a, b]
      probabilities: [0.5, 0.4]
"#,
    )
    .unwrap();

    let err = generate_from_config(&config, &default_opts()).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("plan"), "unexpected error: {message}");
}

#[test]
fn test_export_csv_and_jsonl() {
    let temp_dir = TempDir::new().unwrap();
    let opts = GenerateOpts {
        rows: Some(4),
        ..default_opts()
    };
    let table = generate_from_config(&users_config(), &opts).unwrap();

    let csv_path = temp_dir.path().join("users.csv");
    let metrics = export_if_requested(
        &table,
        &ExportArgs {
            output: Some(csv_path.clone()),
            ..Default::default()
        },
    )
    .unwrap()
    .unwrap();
    assert_eq!(metrics.rows_written, 4);

    let csv = fs::read_to_string(&csv_path).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "id,email,age,signup_date,is_active,plan");
    assert!(lines[1].starts_with("100,"));

    let jsonl_path = temp_dir.path().join("users.out");
    export_if_requested(
        &table,
        &ExportArgs {
            output: Some(jsonl_path.clone()),
            format: Some(OutputFormat::Jsonl),
            no_header: false,
        },
    )
    .unwrap();

    let jsonl = fs::read_to_string(&jsonl_path).unwrap();
    let rows: Vec<serde_json::Value> = jsonl
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0]["id"], 100);
    assert_eq!(rows[3]["id"], 115);
    assert_eq!(rows[0]["is_active"], true);
}

#[test]
fn test_export_skipped_without_output() {
    let table = generate_from_config(&users_config(), &default_opts()).unwrap();
    let metrics = export_if_requested(&table, &ExportArgs::default()).unwrap();
    assert!(metrics.is_none());
}

#[test]
fn test_export_rejects_unknown_extension() {
    let temp_dir = TempDir::new().unwrap();
    let table = generate_from_config(&users_config(), &default_opts()).unwrap();
    let result = export_if_requested(
        &table,
        &ExportArgs {
            output: Some(temp_dir.path().join("users.txt")),
            ..Default::default()
        },
    );
    assert!(result.is_err());
}

#[test]
fn test_row_values_follow_column_order() {
    let opts = GenerateOpts {
        rows: Some(1),
        ..default_opts()
    };
    let table = generate_from_config(&users_config(), &opts).unwrap();
    let row = table.row(0).unwrap();
    assert_eq!(row.len(), 6);
    assert_eq!(row[0], CellValue::Int(100));
    assert_eq!(row[4], CellValue::Bool(true));
}

#[test]
fn test_validate_reports_every_bad_column() {
    let config = MockConfig::from_yaml(
        r#"
num_rows: 5
schema:
  - name: id
    type: integer
    generation: { start: 1, step: 1 }
  - name: nickname
    type: string
    generation: { faker: not_a_method }
  - name: score
    type: float
    generation: { min: 0, max: 1 }
  - name: when
    type: date
    generation: { start_date: 2024-01-01 }
"#,
    )
    .unwrap();

    let issues = validate_columns(&config.schema);
    let columns: Vec<Option<&str>> = issues.iter().map(|i| i.column.as_deref()).collect();
    assert_eq!(columns, vec![Some("nickname"), Some("score"), Some("when")]);
    assert!(issues[1].error.contains("float"));
}

#[test]
fn test_validate_accepts_sample_config() {
    let config = MockConfig::from_file(concat!(env!("CARGO_MANIFEST_DIR"), "/config.yaml")).unwrap();
    assert!(validate_columns(&config.schema).is_empty());
}
