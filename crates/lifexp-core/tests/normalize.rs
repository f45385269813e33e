use std::path::PathBuf;

use lifexp_core::normalize::{is_long_format, melt_years, normalize_shape, split_metadata_columns};
use lifexp_core::PipelineError;
use lifexp_loader::{load_table, CANONICAL_COLUMNS};
use polars::df;
use polars::prelude::*;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../lifexp-loader/tests/data")
        .join(name)
}

fn column_names(df: &DataFrame) -> Vec<String> {
    df.get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect()
}

fn strings(df: &DataFrame, name: &str) -> Vec<Option<String>> {
    df.column(name)
        .expect("column missing")
        .str()
        .expect("not a string column")
        .into_iter()
        .map(|value| value.map(str::to_string))
        .collect()
}

fn wide_frame(keys: &[&str], years: &[(&str, &[&str])]) -> DataFrame {
    let mut columns: Vec<Column> = vec![Series::new("unit,sex,age,geo\\time".into(), keys.to_vec()).into()];
    for (label, cells) in years {
        columns.push(Series::new((*label).into(), cells.to_vec()).into());
    }
    DataFrame::new(columns).expect("failed to build wide frame")
}

#[test]
fn detects_long_and_wide_layouts() {
    let wide = load_table(fixture_path("eu_life_expectancy_raw_sample.tsv")).expect("TSV load failed");
    let long = load_table(fixture_path("eurostat_life_expect_sample.json")).expect("JSON load failed");

    assert!(!is_long_format(&wide));
    assert!(is_long_format(&long));
}

#[test]
fn split_appends_four_metadata_columns() {
    let wide = load_table(fixture_path("eu_life_expectancy_raw_sample.tsv")).expect("TSV load failed");
    let split = split_metadata_columns(&wide).expect("split failed");

    assert_eq!(split.width(), wide.width() + 4);
    assert_eq!(
        column_names(&split)[wide.width()..],
        ["unit", "sex", "age", "region"]
    );
    assert_eq!(strings(&split, "region")[0].as_deref(), Some("PT"));
    assert_eq!(strings(&split, "region")[5].as_deref(), Some("FR"));
    assert_eq!(strings(&split, "sex")[1].as_deref(), Some("M"));
}

#[test]
fn split_rejects_keys_without_four_parts() {
    let short = wide_frame(&["YR,F,Y1,PT", "YR,F,PT"], &[("2020", &["80.1", "80.2"])]);
    match split_metadata_columns(&short) {
        Err(PipelineError::MalformedKey { row, key }) => {
            assert_eq!(row, 1);
            assert_eq!(key, "YR,F,PT");
        }
        other => panic!("expected malformed key, got {other:?}"),
    }

    let long = wide_frame(&["YR,F,Y1,PT,extra"], &[("2020", &["80.1"])]);
    assert!(matches!(
        split_metadata_columns(&long),
        Err(PipelineError::MalformedKey { row: 0, .. })
    ));
}

#[test]
fn melt_emits_one_row_per_year_column() {
    let df = df!(
        "composed" => ["a,b,c,PT"],
        "2020" => ["10.5"],
        "2021" => ["11.0"],
        "unit" => ["YR"],
        "sex" => ["M"],
        "age" => ["Y10"],
        "region" => ["PT"]
    )
    .expect("failed to build frame");

    let long = melt_years(&df).expect("melt failed");

    assert_eq!(column_names(&long), CANONICAL_COLUMNS);
    assert_eq!(long.height(), 2);
    assert_eq!(
        strings(&long, "year"),
        vec![Some("2020".to_string()), Some("2021".to_string())]
    );
    assert_eq!(
        strings(&long, "value"),
        vec![Some("10.5".to_string()), Some("11.0".to_string())]
    );
    assert_eq!(strings(&long, "unit"), vec![Some("YR".to_string()); 2]);
    assert_eq!(strings(&long, "age"), vec![Some("Y10".to_string()); 2]);
}

#[test]
fn melt_groups_rows_by_source_row_in_year_column_order() {
    let df = df!(
        "composed" => ["YR,F,Y1,PT", "YR,M,Y1,ES"],
        "2021" => ["81.7", "80.1"],
        "2020" => ["81.3", ":"],
        "2019" => [Some("81.9"), None],
        "unit" => ["YR", "YR"],
        "sex" => ["F", "M"],
        "age" => ["Y1", "Y1"],
        "region" => ["PT", "ES"]
    )
    .expect("failed to build frame");

    let long = melt_years(&df).expect("melt failed");

    assert_eq!(long.height(), 6);
    assert_eq!(
        strings(&long, "region"),
        ["PT", "PT", "PT", "ES", "ES", "ES"].map(|s| Some(s.to_string())).to_vec()
    );
    assert_eq!(
        strings(&long, "year"),
        ["2021", "2020", "2019", "2021", "2020", "2019"].map(|s| Some(s.to_string())).to_vec()
    );
    assert_eq!(
        strings(&long, "value"),
        vec![
            Some("81.7".to_string()),
            Some("81.3".to_string()),
            Some("81.9".to_string()),
            Some("80.1".to_string()),
            Some(":".to_string()),
            None,
        ]
    );
}

#[test]
fn melt_without_year_columns_yields_empty_canonical_table() {
    let df = df!(
        "composed" => ["YR,F,Y1,PT"],
        "unit" => ["YR"],
        "sex" => ["F"],
        "age" => ["Y1"],
        "region" => ["PT"]
    )
    .expect("failed to build frame");

    let long = melt_years(&df).expect("melt failed");

    assert_eq!(column_names(&long), CANONICAL_COLUMNS);
    assert_eq!(long.height(), 0);
}

#[test]
fn melt_without_metadata_columns_fails() {
    let df = df!("composed" => ["a,b,c,PT"], "2020" => ["10.5"]).expect("failed to build frame");
    assert!(matches!(melt_years(&df), Err(PipelineError::MissingColumn(_))));
}

#[test]
fn normalized_wide_table_has_rows_times_years_rows() {
    let wide = load_table(fixture_path("eu_life_expectancy_raw_sample.tsv")).expect("TSV load failed");
    let year_columns = wide.width() - 1;

    let long = normalize_shape(&wide).expect("normalize failed");

    assert_eq!(long.height(), wide.height() * year_columns);
    assert_eq!(column_names(&long), CANONICAL_COLUMNS);
}

#[test]
fn normalized_rows_are_grouped_by_source_row() {
    let wide = wide_frame(
        &["YR,F,Y1,PT", "YR,M,Y1,ES"],
        &[("2021", &["1", "4"]), ("2020", &["2", "5"]), ("2019", &["3", "6"])],
    );

    let long = normalize_shape(&wide).expect("normalize failed");

    let regions: Vec<Option<String>> = strings(&long, "region");
    assert_eq!(
        regions,
        ["PT", "PT", "PT", "ES", "ES", "ES"]
            .iter()
            .map(|r| Some(r.to_string()))
            .collect::<Vec<_>>()
    );
    let years: Vec<Option<String>> = strings(&long, "year");
    assert_eq!(
        years,
        ["2021", "2020", "2019", "2021", "2020", "2019"]
            .iter()
            .map(|y| Some(y.to_string()))
            .collect::<Vec<_>>()
    );
    let values: Vec<Option<String>> = strings(&long, "value");
    assert_eq!(
        values,
        ["1", "2", "3", "4", "5", "6"]
            .iter()
            .map(|v| Some(v.to_string()))
            .collect::<Vec<_>>()
    );
}

#[test]
fn long_tables_are_projected_onto_canonical_columns() {
    let long = df!(
        "value" => [80.5],
        "flag" => ["e"],
        "year" => [2020i64],
        "region" => ["PT"],
        "age" => ["Y1"],
        "sex" => ["F"],
        "unit" => ["YR"]
    )
    .expect("failed to build frame");

    let normalized = normalize_shape(&long).expect("normalize failed");

    assert_eq!(column_names(&normalized), CANONICAL_COLUMNS);
    assert_eq!(normalized.height(), 1);
}
