//! Graph algorithms shared by the validators and composition.
pub mod topology;
