use crate::support::{
    fail, load_settings_or_exit, print_json_or_exit, program_name, read_mode,
    read_table_or_exit, report_skipped, resolve_max_der_order_or_exit,
};
use instmeta_io::{render_generated_file, write_generated_file};
use instmeta_kernel::{GeneratorSettings, InstantiationInfo, SpaceTable, derive_all};

pub struct Args {
    pub config_file: String,
    pub max_der_order: Option<u32>,
    pub out_file: Option<String>,
    pub settings: Option<String>,
    pub script_name: Option<String>,
    pub strict: bool,
    pub json: bool,
}

pub fn run(args: Args) {
    let settings = load_settings_or_exit(args.settings.as_deref());
    let max_der_order = resolve_max_der_order_or_exit(args.max_der_order, &settings);
    let info = derive_or_exit(&args.config_file, max_der_order, args.strict, &settings);

    if args.json {
        print_json_or_exit(&info.manifest(), "derive");
        return;
    }

    let script = args.script_name.unwrap_or_else(program_name);
    match args.out_file {
        Some(out_file) => {
            write_or_exit(&script, &out_file, &info);
            print_summary(&args.config_file, &out_file, &info);
        }
        None => {
            let contents = render_generated_file(&script, &info)
                .unwrap_or_else(|e| fail(format!("failed to render generated file: {e}")));
            print!("{contents}");
        }
    }
}

pub fn derive_or_exit(
    config_file: &str,
    max_der_order: u32,
    strict: bool,
    settings: &GeneratorSettings,
) -> InstantiationInfo {
    let report = read_table_or_exit(config_file, read_mode(strict));
    report_skipped(&report);
    tracing::info!(
        config_file,
        rows = report.rows.len(),
        max_der_order,
        "deriving instantiation lists"
    );
    derive_all(SpaceTable::from_user_rows(report.rows), max_der_order, settings)
}

pub fn write_or_exit(script: &str, out_file: &str, info: &InstantiationInfo) {
    let contents = render_generated_file(script, info)
        .unwrap_or_else(|e| fail(format!("failed to render generated file: {e}")));
    write_generated_file(out_file, &contents)
        .unwrap_or_else(|e| fail(format!("failed to write {out_file}: {e}")));
}

pub fn print_summary(config_file: &str, out_file: &str, info: &InstantiationInfo) {
    let lists = info.descriptor_lists();
    let entries: usize = lists.iter().map(|l| l.len()).sum();
    println!("instmeta derive");
    println!("  Table: {config_file}");
    println!("  User rows: {}", info.tables.user_table().len());
    println!("  Face rows: {}", info.tables.face_table().len());
    println!("  Max derivative order: {}", info.max_der_order);
    println!("  Lists: {}", lists.len());
    println!("  Entries: {entries}");
    println!("  Output: {out_file}");
}
