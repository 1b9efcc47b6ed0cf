//! dotscan-lib: Command construction and report mapping for .NET analysis tools
//!
//! This crate provides the pieces needed to drive external .NET tools:
//! - `project`: project descriptors and the artifacts their builds generate
//! - `artifact`: resolving and validating the assemblies to scan
//! - `command`: building NDeps and Gallio invocations
//! - `execute`: running an invocation as a child process
//! - `report`: mapping Gallio XML reports to test records

pub mod artifact;
pub mod command;
pub mod consts;
pub mod execute;
pub mod platform;
pub mod project;
pub mod report;
pub mod settings;
pub mod util;
