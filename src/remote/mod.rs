//! # Remote Binary Search Collaborator
//!
//! One binary-search variant delegates trace production to a companion
//! backend. These are the wire shapes of that exchange, kept structurally
//! compatible with the backend's request/response, plus a
//! [`LocalProvider`] that produces the identical response from the local
//! generator. The core trace model ([`crate::search`]) is the semantic
//! source of truth; this interface is a thin alternate producer of the
//! same step shape.
//!
//! No HTTP client lives here — transport belongs to the excluded hosting
//! layer. Embedders that do talk to the backend implement
//! [`BinarySearchProvider`] over their client and reuse these types.

use eyre::{Result, WrapErr};

use crate::keys::generate_unique;
use crate::search::{binary_trace, BinaryStep, Verdict};

/// Default array length when the request supplies none (backend default).
const DEFAULT_SIZE: usize = 10;
/// Default key digit width when the request supplies none (backend
/// default).
const DEFAULT_DIGITS: u8 = 2;

/// Search request. When `array` is omitted the provider generates its own
/// `size`-length sorted array of `digits`-digit keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteSearchRequest {
    pub array: Option<Vec<u32>>,
    pub size: Option<usize>,
    pub digits: Option<u8>,
    pub target: u32,
}

/// One step of the remote trace; field names follow the wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoteSearchStep {
    pub left: usize,
    pub right: usize,
    pub mid: usize,
    pub mid_value: u32,
}

impl From<BinaryStep> for RemoteSearchStep {
    fn from(step: BinaryStep) -> Self {
        Self {
            left: step.low,
            right: step.high,
            mid: step.mid,
            mid_value: step.value,
        }
    }
}

impl From<RemoteSearchStep> for BinaryStep {
    fn from(step: RemoteSearchStep) -> Self {
        Self {
            low: step.left,
            high: step.right,
            mid: step.mid,
            value: step.mid_value,
        }
    }
}

/// Search response. `position` is 1-based, as the backend reports it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteSearchResponse {
    pub array: Vec<u32>,
    pub steps: Vec<RemoteSearchStep>,
    pub found: bool,
    pub position: Option<usize>,
}

/// Producer of binary search responses — remote backend or local engine.
pub trait BinarySearchProvider {
    fn search(&self, request: RemoteSearchRequest) -> Result<RemoteSearchResponse>;
}

/// Provider backed by the local generator. Bit-exact with the step model
/// in [`crate::search::binary_trace`]: a supplied array is sorted first,
/// a missing one is drawn as distinct random keys and sorted.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalProvider;

impl BinarySearchProvider for LocalProvider {
    fn search(&self, request: RemoteSearchRequest) -> Result<RemoteSearchResponse> {
        let array = match request.array {
            Some(mut array) => {
                array.sort_unstable();
                array
            }
            None => {
                let size = request.size.unwrap_or(DEFAULT_SIZE);
                let digits = request.digits.unwrap_or(DEFAULT_DIGITS);
                let mut array = generate_unique(size, digits)
                    .wrap_err("cannot generate an array for the search request")?;
                array.sort_unstable();
                array
            }
        };

        let trace = binary_trace(&array, request.target);
        let steps = trace.steps().iter().copied().map(Into::into).collect();
        let (found, position) = match trace.verdict() {
            Verdict::Found(index) => (true, Some(index + 1)),
            Verdict::NotFound => (false, None),
        };
        Ok(RemoteSearchResponse {
            array,
            steps,
            found,
            position,
        })
    }
}
