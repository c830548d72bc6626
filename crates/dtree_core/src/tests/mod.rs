//! Tests for the dtree analysis library
//!
//! Tests are organized by topic:
//! - `fixture` - Scripted in-memory tree that records every evaluator call
//! - `risk_sensitivity` - Sweep strategies, reference figures, call order and failures
//! - `config` - YAML loading and validation of sensitivity settings
//! - `table` - Result table accessors, serialization and text layout


mod config;
