//! Presentation: chart builders, the Plotly backend and the page layout.

pub mod panels;
pub mod plot;
pub mod plotly;
