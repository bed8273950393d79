#![allow(dead_code)] // Not every test binary uses every helper

pub mod fake_runner;

pub use fake_runner::FakeRunner;
