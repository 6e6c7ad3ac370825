//! Document level output.
//! Wraps the path emitter with the conventions of the mesh boundary documents.
use crate::*;
use std::io::Write;

pub mod boundary;
