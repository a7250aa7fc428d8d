pub mod demo_flow;

pub use demo_flow::{DemoFlow, DemoOutcome};
