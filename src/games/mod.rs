//! Game implementations built on the core, zones and rules modules.

pub mod blitz;
