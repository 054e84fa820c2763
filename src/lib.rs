pub mod algebra {
    pub mod algebraerror;
    pub mod variable;
    pub mod term;
    pub mod polynomial;
    pub mod variablemanager;
    pub mod polynomialmanager;
}

pub mod configuration;

pub mod manager {
    pub mod managererror;
    pub mod manager;
}

pub mod math {
    pub mod exactarithmetic;
}

pub mod objectwithuuid;
