//! # seqpad - DPI pick-out padder
//!
//! Turns a `DPI_out` sequence list into a synthesizer pick-out file where every
//! sequence has the same length.
//!
//! ## Architecture
//!
//! The run is a straight pipeline:
//! - `model`: Token list, length census and padded set
//! - `pad`: Zero fill and pattern tail
//! - `naming`: `DPI_out` marker check and output file name
//! - `files`: Reading the input and writing the pick-out file
//! - `prompt`: Operator questions (input file, synthesizer number)
//! - `controller`: Orchestration of one run

pub mod controller;
pub mod files;
pub mod model;
pub mod naming;
pub mod pad;
pub mod prompt;
