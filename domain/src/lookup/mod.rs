//! Description lookup results.
//!
//! Remote lookups never fail loudly. Each one yields a [`LookupOutcome`]:
//! either the text that was found, or a [`NoDataReason`] explaining why the
//! source had nothing to offer. The resolver walks its sources in order and
//! settles on [`FALLBACK_DESCRIPTION`] when every source reports `NoData`.

mod outcome;

pub use outcome::{
    DescriptionOrigin, FALLBACK_DESCRIPTION, LookupOutcome, NoDataReason, ResolvedDescription,
    first_sentence,
};
