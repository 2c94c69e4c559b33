//! `cohera params` - the parameter reference table.

use anyhow::Result;

use crate::cli::output::table::params_table;
use crate::infrastructure::validator::PARAM_SPECS;

/// Execute the params command.
pub fn execute(json: bool) -> Result<()> {
    if json {
        let specs: Vec<serde_json::Value> = PARAM_SPECS
            .iter()
            .map(|spec| {
                serde_json::json!({
                    "key": spec.key,
                    "name": spec.name,
                    "min": spec.min,
                    "max": spec.max,
                    "required": spec.required,
                    "description": spec.description,
                    "role": spec.role,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&specs)?);
    } else {
        println!("{}", params_table());
    }
    Ok(())
}
