//! The static dataset the front end displays

use anyhow::Context;

use crate::api::Dataset;

const BUILTIN: &str = include_str!("mock.json");

pub fn parse_dataset(json: &str) -> anyhow::Result<Dataset> {
    serde_json::from_str(json).context("parsing dataset")
}

pub fn builtin_dataset() -> anyhow::Result<Dataset> {
    parse_dataset(BUILTIN).context("loading builtin dataset")
}
