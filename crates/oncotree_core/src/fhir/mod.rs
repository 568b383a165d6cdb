//! FHIR R4 CodeSystem representation of an OncoTree release.
//!
//! Only the parts of the resource the conversion fills in are modelled.

mod codesystem;
mod concept;
mod tsv;

pub use codesystem::{
    build_code_system, is_snapshot, CodeSystem, CodeSystemOptions, PropertyDefinition,
    PropertyType, DEFAULT_CANONICAL, DEFAULT_VALUESET, SNAPSHOT_VERSIONS,
};
pub use concept::{convert_concept, Concept, ConceptProperty};
pub use tsv::{render_tsv, tsv_rows, write_tsv, TsvRow};
