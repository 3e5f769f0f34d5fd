use crate::commands::derive::{derive_or_exit, print_summary, write_or_exit};
use crate::support::{
    InvocationArgs, fail, load_settings_or_exit, program_name, resolve_max_der_order_or_exit,
};
use instmeta_kernel::MAX_DER_ORDER;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptParams {
    pub config_file: String,
    pub max_der_order: Option<u32>,
    pub out_file: String,
}

/// Validate every parameter before anything is read or written.
pub fn script_params(pairs: &[String]) -> Result<ScriptParams, String> {
    let args = InvocationArgs::parse(pairs)?;
    let config_file = args.require("config_file")?.to_string();
    let out_file = args.require("out_file")?.to_string();
    let max_der_order = args
        .get("max_der_order")
        .map(|raw| match raw.parse::<u32>() {
            Ok(order) if order <= MAX_DER_ORDER => Ok(order),
            _ => Err(format!(
                "max_der_order must be an integer in 0..={MAX_DER_ORDER}, got `{raw}`"
            )),
        })
        .transpose()?;
    Ok(ScriptParams {
        config_file,
        max_der_order,
        out_file,
    })
}

pub fn run(pairs: Vec<String>, settings: Option<String>, strict: bool) {
    let params = script_params(&pairs).unwrap_or_else(|e| fail(e));
    let settings = load_settings_or_exit(settings.as_deref());
    let max_der_order = resolve_max_der_order_or_exit(params.max_der_order, &settings);

    let info = derive_or_exit(&params.config_file, max_der_order, strict, &settings);
    write_or_exit(&program_name(), &params.out_file, &info);
    print_summary(&params.config_file, &params.out_file, &info);
}
