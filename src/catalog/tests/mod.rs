//! Unit tests for the catalog module.
//!
//! Tests are organised by layer: domain invariants in [`domain_tests`],
//! service orchestration and error mapping in [`service_tests`].
