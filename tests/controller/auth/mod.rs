use crate::setup::{test_setup, TestSetup};

mod login;
mod logout;
