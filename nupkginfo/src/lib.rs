//! Nupkginfo - package archive inspection for NuGet-style packages
//!
//! This library provides the core functionality for extracting name, version
//! and manifest metadata from `.nupkg` package archives:
//!
//! - [`package`] - filename naming conventions and version-boundary parsing
//! - [`manifest`] - archive extraction and nuspec manifest flattening

pub mod manifest;
pub mod package;
