pub use anyhow::{ensure, Context, Result};
pub use itertools::Itertools;
pub use lazy_static::lazy_static;
pub use thiserror::Error;

///////////////////////////////////////////////////////////////////////////////
////
//// * workspace
////
///////////////////////////////////////////////////////////////////////////////
pub use aoc_runner::{file_reader, parse_string, ParseError, Reader, Solver};

///////////////////////////////////////////////////////////////////////////////
////
//// * stdlib
////
///////////////////////////////////////////////////////////////////////////////
pub use std::{collections::BTreeMap, path::Path};

/// Hash map over the FNV hasher; every key in this crate is a few bytes.
pub type HashMap<K, V> = std::collections::HashMap<K, V, fnv::FnvBuildHasher>;
