use serde::Deserialize;
use uuid::Uuid;

use crate::algebra::variable::Variable;
use crate::manager::manager::Manager;
use crate::manager::managererror::{
    ManagerError,
    parse_json_value
};

#[derive(Deserialize)]
struct VariableJsonProp {
    name: String,
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    uuid: Option<String>
}

fn get_variable_from_json(json_value: serde_json::Value) -> Result<Variable, ManagerError> {
    let json_prop: VariableJsonProp = parse_json_value(json_value)?;
    let label = json_prop.label.unwrap_or(json_prop.name);
    let variable = match json_prop.uuid {
        Some(text) => Variable::with_uuid(Uuid::parse_str(&text)?, &label),
        None => Variable::new(&label)
    };
    Ok(variable)
}


pub struct VariableManager;


impl VariableManager {
    pub fn new() -> Manager<Variable> {
        Manager::new(get_variable_from_json)
    }
}
