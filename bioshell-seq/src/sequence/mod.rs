//! Provides [`Sequence`](crate::sequence::Sequence) and [`SequenceProfile`](crate::sequence::SequenceProfile) stucts


mod sequence;
mod sequence_profile;
mod residue_type_mapping;

pub use sequence::*;
pub use sequence_profile::*;
pub use residue_type_mapping::*;