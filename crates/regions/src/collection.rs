//! Record-level validation over an ordered list of descriptors.
//!
//! Two passes, kept separate so single-descriptor and aggregate rules can be
//! tested on their own:
//! 1. every descriptor through `descriptor::validate_descriptor`
//!    (fail-fast or accumulate, see `ErrorPolicy`);
//! 2. cardinality rules over the constructed collection (at most
//!    `MAX_TEXT_DESCRIPTORS` text notes).
//!
//! Order is preserved; nothing is reordered or deduplicated.

use std::fmt;

use serde_json::Value;
use thiserror::Error;

use crate::descriptor::{
    validate_descriptor, Descriptor, DescriptorError, DescriptorKind, RawDescriptor,
};

/// Maximum number of text descriptors per record.
pub const MAX_TEXT_DESCRIPTORS: usize = 1;

/// How pass 1 reacts to a bad descriptor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Stop at the first bad descriptor (trusted internal input).
    #[default]
    FailFast,
    /// Validate all descriptors and report every failure (user-facing forms).
    Accumulate,
}

/// Collection validation configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct CollectionCfg {
    pub policy: ErrorPolicy,
}

impl CollectionCfg {
    #[inline]
    pub fn accumulate() -> Self {
        Self {
            policy: ErrorPolicy::Accumulate,
        }
    }
}

/// A rejected descriptor and its position in the submitted list.
#[derive(Clone, Debug, PartialEq)]
pub struct DescriptorFailure {
    pub index: usize,
    pub error: DescriptorError,
}

impl fmt::Display for DescriptorFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "descriptor {}: {}", self.index, self.error)
    }
}

/// Why a descriptor collection was rejected.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum CollectionError {
    /// One or more descriptors failed on their own. Non-empty, ascending index.
    #[error("{}", join_failures(.0))]
    InvalidDescriptors(Vec<DescriptorFailure>),
    #[error(
        "there can be no more than {} description with type \"text\", found one at each of indices {:?}",
        MAX_TEXT_DESCRIPTORS,
        .indices
    )]
    TooManyTextDescriptors { indices: Vec<usize> },
}

impl CollectionError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidDescriptors(_) => "InvalidDescriptors",
            Self::TooManyTextDescriptors { .. } => "TooManyTextDescriptors",
        }
    }

    /// Per-descriptor failures, empty for collection-level errors.
    pub fn failures(&self) -> &[DescriptorFailure] {
        match self {
            Self::InvalidDescriptors(failures) => failures.as_slice(),
            Self::TooManyTextDescriptors { .. } => &[],
        }
    }
}

fn join_failures(failures: &[DescriptorFailure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Descriptors that passed both passes, in submission order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValidatedCollection {
    descriptors: Vec<Descriptor>,
}

impl ValidatedCollection {
    #[inline]
    pub fn descriptors(&self) -> &[Descriptor] {
        &self.descriptors
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
    /// The single text note, if any.
    pub fn text(&self) -> Option<&str> {
        self.descriptors
            .iter()
            .find(|d| d.kind() == DescriptorKind::Text)
            .map(Descriptor::text)
    }
    #[inline]
    pub fn into_descriptors(self) -> Vec<Descriptor> {
        self.descriptors
    }
}

/// Validate a collection with the default (fail-fast) policy.
pub fn validate_collection(
    descriptors: &[RawDescriptor],
) -> Result<ValidatedCollection, CollectionError> {
    validate_collection_with(descriptors, CollectionCfg::default())
}

/// Validate a collection under `cfg`.
pub fn validate_collection_with(
    descriptors: &[RawDescriptor],
    cfg: CollectionCfg,
) -> Result<ValidatedCollection, CollectionError> {
    run_passes(descriptors.iter().map(validate_descriptor), cfg)
}

/// Validate loosely typed payloads (e.g. a deserialized JSON array).
///
/// Each element is classified by its `"type"` tag first; a payload whose shape
/// does not match its kind fails with its index like any other descriptor.
pub fn validate_collection_values(
    values: &[Value],
    cfg: CollectionCfg,
) -> Result<ValidatedCollection, CollectionError> {
    run_passes(
        values
            .iter()
            .map(|v| RawDescriptor::from_value(v).and_then(|raw| validate_descriptor(&raw))),
        cfg,
    )
}

/// Pass 1 over lazily produced results (so fail-fast stops early), then pass 2.
fn run_passes<I>(results: I, cfg: CollectionCfg) -> Result<ValidatedCollection, CollectionError>
where
    I: Iterator<Item = Result<Descriptor, DescriptorError>>,
{
    let mut validated = Vec::new();
    let mut failures = Vec::new();
    for (index, result) in results.enumerate() {
        match result {
            Ok(d) => validated.push(d),
            Err(error) => {
                tracing::debug!(index, code = error.code(), %error, "descriptor rejected");
                failures.push(DescriptorFailure { index, error });
                if cfg.policy == ErrorPolicy::FailFast {
                    break;
                }
            }
        }
    }
    if !failures.is_empty() {
        return Err(CollectionError::InvalidDescriptors(failures));
    }
    let collection = ValidatedCollection {
        descriptors: validated,
    };
    check_cardinality(&collection)?;
    tracing::trace!(descriptors = collection.len(), "collection accepted");
    Ok(collection)
}

/// Collection-level rules over already validated descriptors.
pub fn check_cardinality(collection: &ValidatedCollection) -> Result<(), CollectionError> {
    let indices: Vec<usize> = collection
        .descriptors
        .iter()
        .enumerate()
        .filter(|(_, d)| d.kind() == DescriptorKind::Text)
        .map(|(i, _)| i)
        .collect();
    if indices.len() > MAX_TEXT_DESCRIPTORS {
        tracing::debug!(?indices, "too many text descriptors");
        return Err(CollectionError::TooManyTextDescriptors { indices });
    }
    Ok(())
}
