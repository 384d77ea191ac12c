//! Edulaunch -- Educational System Bootstrap
//!
//! One-time environment preparation and launch for the Educational
//! Achievement and Recommendation System's Streamlit front-end.

pub mod config;
pub mod launch;
pub mod setup;
pub mod types;
