//! Enigma Report - Business report generator
//!
//! Turns a business name (quick form) or a short guided questionnaire
//! (wizard) into a templated market report: inferred industry, SWOT-style
//! lists, competitors, market trends, SEO keywords, and an action plan.
//! Reports can be downloaded as markdown or as a print-ready HTML page.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
