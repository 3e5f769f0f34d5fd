use crate::support::{print_json_or_exit, read_mode, read_table_or_exit, report_skipped};
use instmeta_kernel::{SpaceRow, SpaceTable};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TableOutput<'a> {
    config_file: &'a str,
    skipped_lines: usize,
    user_table: &'a [SpaceRow],
    face_table: &'a [SpaceRow],
    table: &'a [SpaceRow],
}

pub fn run(config_file: String, strict: bool, json: bool) {
    let report = read_table_or_exit(&config_file, read_mode(strict));
    let skipped_lines = report.skipped.len();
    report_skipped(&report);
    let tables = SpaceTable::from_user_rows(report.rows);

    if json {
        print_json_or_exit(
            &TableOutput {
                config_file: &config_file,
                skipped_lines,
                user_table: tables.user_table(),
                face_table: tables.face_table(),
                table: tables.table(),
            },
            "table",
        );
        return;
    }

    println!("instmeta table");
    println!("  Table: {config_file}");
    println!("  Skipped lines: {skipped_lines}");
    print_rows("User rows", tables.user_table());
    print_rows("Face rows", tables.face_table());
    print_rows("All rows", tables.table());
}

fn print_rows(header: &str, rows: &[SpaceRow]) {
    println!("  {header} ({}):", rows.len());
    for row in rows {
        println!("    - {row}");
    }
}
