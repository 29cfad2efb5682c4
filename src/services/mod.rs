pub mod generator;
pub mod feed;
pub mod feed_ticker;

pub mod stats_service;
pub mod dashboard_service;
