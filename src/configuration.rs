use std::fs::File;
use std::io::BufReader;

use serde::Deserialize;
use tracing::debug;

use crate::algebra::polynomial::Polynomial;
use crate::algebra::polynomialmanager::PolynomialManager;
use crate::algebra::variable::Variable;
use crate::algebra::variablemanager::VariableManager;
use crate::manager::managererror::ManagerError;
use crate::manager::manager::{
    IManager,
    Manager
};


#[derive(Deserialize)]
struct ConfigurationJsonProp {
    #[serde(default)]
    variables: Vec<serde_json::Value>,
    #[serde(default)]
    polynomials: Vec<serde_json::Value>
}

/// Variables and polynomials loaded by name. Polynomials refer to
/// variables by name, so variables are always loaded first.
pub struct Configuration {
    variable_manager: Manager<Variable>,
    polynomial_manager: PolynomialManager
}


impl Configuration {
    pub fn new() -> Configuration {
        Configuration {
            variable_manager: VariableManager::new(),
            polynomial_manager: PolynomialManager::new()
        }
    }

    pub fn variable_manager(&self) -> &Manager<Variable> {
        &self.variable_manager
    }

    pub fn polynomial_manager(&self) -> &PolynomialManager {
        &self.polynomial_manager
    }

    pub fn variable(&self, name: &str) -> Result<Variable, ManagerError> {
        self.variable_manager.get(name)
    }

    pub fn polynomial(&self, name: &str) -> Result<Polynomial, ManagerError> {
        self.polynomial_manager.get(name)
    }

    pub fn from_reader(&self, file_path: &str) -> Result<(), ManagerError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_prop: ConfigurationJsonProp = serde_json::from_reader(reader)?;
        debug!(file_path, "loading configuration");
        self.load(json_prop)
    }

    pub fn from_json_str(&self, text: &str) -> Result<(), ManagerError> {
        let json_prop: ConfigurationJsonProp = serde_json::from_str(text)?;
        self.load(json_prop)
    }

    fn load(&self, json_prop: ConfigurationJsonProp) -> Result<(), ManagerError> {
        self.variable_manager.insert_obj_from_json_vec(&json_prop.variables, &())?;
        self.polynomial_manager.insert_obj_from_json_vec(&json_prop.polynomials, &self.variable_manager)?;
        debug!(
            variables = json_prop.variables.len(),
            polynomials = json_prop.polynomials.len(),
            "configuration loaded"
        );
        Ok(())
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new()
    }
}
