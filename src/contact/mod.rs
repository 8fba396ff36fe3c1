//! Contact form controller

mod controller;

pub use controller::{ContactController, SubmitOutcome, SUCCESS_BANNER_DURATION};
