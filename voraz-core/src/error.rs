//! Error types for the voraz core library.
//!
//! The greedy heuristic itself is total: an unclosable tour is reported by
//! [`crate::TourResult::is_complete`], never by an error. The variants below
//! cover the optional request validation performed on behalf of upstream
//! collaborators and the failure modes of concurrent dispatch.

use std::{fmt, sync::Arc};

use thiserror::Error;

use crate::edge::SelectionMode;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Errors produced by request validation and tour dispatch.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum TourError {
    /// An edge referenced a node id outside `[0, num_nodes)`.
    #[error("edge references node {node}, but num_nodes is {node_count}")]
    InvalidNodeId {
        /// The offending node id.
        node: usize,
        /// The number of nodes declared by the request.
        node_count: usize,
    },
    /// An edge joined a node to itself.
    #[error("edge ({node}, {node}) is a self-loop")]
    SelfLoop {
        /// The node referenced twice.
        node: usize,
    },
    /// The same unordered pair was supplied more than once.
    #[error("edge ({left}, {right}) appears more than once")]
    DuplicateEdge {
        /// The smaller endpoint id.
        left: usize,
        /// The larger endpoint id.
        right: usize,
    },
    /// An edge carried a NaN or infinite weight.
    #[error("edge ({left}, {right}) has non-finite weight")]
    NonFiniteWeight {
        /// The first endpoint id (as provided).
        left: usize,
        /// The second endpoint id (as provided).
        right: usize,
    },
    /// An edge carried a zero or negative weight.
    #[error("edge ({left}, {right}) has non-positive weight {weight}")]
    NonPositiveWeight {
        /// The first endpoint id (as provided).
        left: usize,
        /// The second endpoint id (as provided).
        right: usize,
        /// The rejected weight.
        weight: f64,
    },
    /// The computation was superseded before it finished.
    #[error("{mode} tour computation was cancelled")]
    Cancelled {
        /// Mode of the cancelled computation.
        mode: SelectionMode,
    },
    /// A worker thread could not be started.
    #[error("failed to spawn {mode} tour worker: {message}")]
    WorkerSpawn {
        /// Mode the worker would have computed.
        mode: SelectionMode,
        /// Operating system error message.
        message: Arc<str>,
    },
    /// A worker thread panicked before publishing.
    #[error("{mode} tour worker panicked")]
    WorkerPanicked {
        /// Mode the worker was computing.
        mode: SelectionMode,
    },
    /// A synchronisation primitive became poisoned after a panic.
    #[error("lock for {resource} is poisoned")]
    LockPoisoned {
        /// Name of the locked resource that was poisoned.
        resource: &'static str,
    },
}

define_error_codes! {
    /// Stable codes describing [`TourError`] variants.
    enum TourErrorCode for TourError {
        /// An edge referenced a node id outside the request bounds.
        InvalidNodeId => InvalidNodeId { .. } => "TOUR_INVALID_NODE_ID",
        /// An edge joined a node to itself.
        SelfLoop => SelfLoop { .. } => "TOUR_SELF_LOOP",
        /// The same unordered pair was supplied more than once.
        DuplicateEdge => DuplicateEdge { .. } => "TOUR_DUPLICATE_EDGE",
        /// An edge carried a NaN or infinite weight.
        NonFiniteWeight => NonFiniteWeight { .. } => "TOUR_NON_FINITE_WEIGHT",
        /// An edge carried a zero or negative weight.
        NonPositiveWeight => NonPositiveWeight { .. } => "TOUR_NON_POSITIVE_WEIGHT",
        /// The computation was superseded before it finished.
        Cancelled => Cancelled { .. } => "TOUR_CANCELLED",
        /// A worker thread could not be started.
        WorkerSpawn => WorkerSpawn { .. } => "TOUR_WORKER_SPAWN",
        /// A worker thread panicked before publishing.
        WorkerPanicked => WorkerPanicked { .. } => "TOUR_WORKER_PANICKED",
        /// A synchronisation primitive became poisoned.
        LockPoisoned => LockPoisoned { .. } => "TOUR_LOCK_POISONED",
    }
}

impl TourError {
    /// Returns `true` when the error describes malformed input rather than a
    /// runtime failure.
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidNodeId { .. }
                | Self::SelfLoop { .. }
                | Self::DuplicateEdge { .. }
                | Self::NonFiniteWeight { .. }
                | Self::NonPositiveWeight { .. }
        )
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, TourError>;
