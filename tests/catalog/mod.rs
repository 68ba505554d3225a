//! End-to-end catalog workflows.
//!
//! These tests drive list screens through the navigator the way a front end would: load,
//! filter, write through a form and follow links between kinds, against a mock backend.

mod navigation;
mod write;

use fundbank_test_utils::prelude::*;

use crate::util::TestSetupExt;
