//! # Cuesense Common Library
//!
//! Shared code for the cuesense classification engine and the services
//! that embed it:
//! - Result-model types (feature vector, emotion, scene, structure)
//! - Controlled vocabulary (approved terms + provider trait)
//! - Configuration loading
//! - Common error type

pub mod config;
pub mod error;
pub mod model;
pub mod vocabulary;

pub use error::{Error, Result};
pub use model::{FeatureVector, TrackAnalysis};
pub use vocabulary::{StaticVocabulary, TermCategory, VocabularyProvider};
