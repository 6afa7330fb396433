//! Voraz core library.
//!
//! Builds approximate shortest-leaning and longest-leaning tours over a
//! weighted undirected graph with a greedy degree-constrained edge heuristic.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod adjacency;
mod assembler;
mod cancel;
mod construct;
mod dispatch;
mod edge;
mod error;
mod request;
mod summary;
mod tour;
mod union_find;

#[cfg(test)]
mod test_utils;

pub use crate::{
    adjacency::{Adjacency, Neighbour},
    assembler::{ANCHOR, assemble},
    cancel::CancellationToken,
    construct::{Construction, ConstructionStats, construct, construct_cancellable},
    dispatch::{Submission, TourDispatcher, TourUpdate},
    edge::{SelectionMode, TourEdge},
    error::{Result, TourError, TourErrorCode},
    request::{TourRequest, TourResponse},
    summary::{StepDetail, summarize},
    tour::{TourPair, TourResult, compute_greedy_tour, compute_greedy_tour_cancellable, solve_both},
    union_find::DisjointSetForest,
};
