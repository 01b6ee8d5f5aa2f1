//! poimap - Render nearby points of interest as an interactive HTML map

pub mod api;
pub mod config;
pub mod domain;
pub mod map;
pub mod osm;
