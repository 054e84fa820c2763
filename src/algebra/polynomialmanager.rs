use std::cell::{
    RefCell,
    RefMut
};
use std::collections::HashMap;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::debug;

use crate::algebra::polynomial::Polynomial;
use crate::algebra::term::Term;
use crate::algebra::variable::Variable;
use crate::manager::manager::{
    IManager,
    Manager
};
use crate::manager::managererror::{
    ManagerError,
    parse_json_value
};

/// Decimals are read from JSON strings so their scale survives (`"2.50"`).
#[derive(Deserialize)]
struct TermJsonProp {
    coefficient: String,
    #[serde(default = "default_order")]
    order: String
}

fn default_order() -> String {
    "0".to_owned()
}

#[derive(Deserialize)]
struct PolynomialJsonProp {
    name: String,
    variable: String,
    terms: Vec<TermJsonProp>
}

fn parse_decimal(text: &str) -> Result<Decimal, ManagerError> {
    Decimal::from_str(text).map_err(|source| ManagerError::DecimalParseError {
        text: text.to_owned(),
        source
    })
}

fn term_from_json_prop(json_prop: &TermJsonProp, variable: &Variable) -> Result<Term, ManagerError> {
    let coefficient = parse_decimal(&json_prop.coefficient)?;
    let order = parse_decimal(&json_prop.order)?;
    Ok(Term::new(coefficient, variable.clone(), order))
}

/// Named polynomials, each over a variable looked up by name in a
/// variable manager.
pub struct PolynomialManager {
    map_cell: RefCell<HashMap<String, Polynomial>>
}

impl PolynomialManager {
    pub fn new() -> PolynomialManager {
        PolynomialManager { map_cell: RefCell::new(HashMap::new()) }
    }
}

impl IManager<Polynomial, Manager<Variable>> for PolynomialManager {
    fn map(&self) -> RefMut<'_, HashMap<String, Polynomial>> {
        self.map_cell.borrow_mut()
    }

    fn insert_obj_from_json(&self,
                            json_value: serde_json::Value,
                            supports: &Manager<Variable>) -> Result<(), ManagerError> {
        let json_prop: PolynomialJsonProp = parse_json_value(json_value)?;
        let variable = supports.get(&json_prop.variable)?;
        let terms = json_prop.terms
            .iter()
            .map(|term_prop| term_from_json_prop(term_prop, &variable))
            .collect::<Result<Vec<Term>, ManagerError>>()?;
        let polynomial = Polynomial::new(terms)?;
        debug!(name = %json_prop.name, polynomial = %polynomial, "registered polynomial");
        self.map().insert(json_prop.name, polynomial);
        Ok(())
    }
}
