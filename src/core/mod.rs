//! Core data types for work classification.
//!
//! - [`Audience`], [`Scheme`], [`AgeRange`]: value types shared by every classifier
//! - [`Subject`]: one classification value within a scheme, with the judgments derived from it
//! - [`Classification`]: a weighted edge between a work and a subject from one data source
//! - [`WorkInput`], [`WorkMetadata`], [`WorkProfile`]: what goes in and what comes out
//!
//! ## Audience and target age
//!
//! Audience and target age imply each other when only one is known:
//!
//! | Audience | Default target age |
//! |----------|--------------------|
//! | Young Adult | 14-17 |
//! | Adult, Adults Only | 18+ |
//! | others | unknown |
//!
//! A range starting at 8 or below and reaching 18 or above is "All Ages".
//!
//! [`Audience`]: types::Audience
//! [`Scheme`]: types::Scheme
//! [`AgeRange`]: types::AgeRange
//! [`Subject`]: subject::Subject
//! [`Classification`]: subject::Classification
//! [`WorkInput`]: work::WorkInput
//! [`WorkMetadata`]: work::WorkMetadata
//! [`WorkProfile`]: work::WorkProfile

pub mod subject;
pub mod types;
pub mod work;
