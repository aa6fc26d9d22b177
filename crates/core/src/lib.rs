//! Domain logic for the exam-question generation service.
//!
//! The pipeline is: sanitize operator input ([`sanitize`]), build a
//! [`request::GenerationRequest`], hand it to the external generator
//! ([`generator`]), and verify the produced artifact ([`artifact`]).
//! HTTP concerns live in the `examgen-api` crate.

pub mod artifact;
pub mod error;
pub mod generator;
pub mod request;
pub mod sanitize;
