use serde::{Deserialize, Serialize};
use crate::enums::ecosystem::Ecosystem;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    pub name: String,
    pub version: String,
    pub ecosystem: Ecosystem,
}

impl Dependency {
    pub fn new(name: &str, version: &str, ecosystem: Ecosystem) -> Self {
        Self {
            name: name.to_string(),
            version: version.to_string(),
            ecosystem,
        }
    }
}
