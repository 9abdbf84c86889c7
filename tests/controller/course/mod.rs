use crate::setup::{test_setup, TestSetup};

mod create;
mod delete;
mod update;
