use crate::setup::{test_setup, TestSetup};

mod delete;
