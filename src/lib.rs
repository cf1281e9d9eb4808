#![doc = include_str!("../README.md")]

pub mod features;
pub mod configs;
pub mod growth_analysis;
pub mod report;
pub mod utils;


// exported symbols
pub use {
    features::OUTPUT,
    growth_analysis::{
        types::{
            ComplexityClass,
            ExponentialSample,
            GrowthError,
            GrowthRow,
            InputSizeSet,
        },
        growth::{compare, compute_exponential, compute_row, compute_sample},
    },
    report::{render, GrowthReport},
};
