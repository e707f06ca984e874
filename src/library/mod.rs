// Library module - sample library classification and organization
//
// Flow: walk source tree → extension filter → keyword classification
//       → read WAV → trim → write target/<category>/<file name>

pub mod catalog;
pub mod organizer;
pub mod report;

pub use catalog::{CategoryVocabulary, ExtensionPolicy, DEFAULT_CATEGORIES};
pub use organizer::{organize_waveforms, Organizer};
pub use report::{FileFailure, OrganizeReport, OrganizedFile};
