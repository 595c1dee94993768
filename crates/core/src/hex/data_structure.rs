use crate::hex::CubeCoord;
use fnv::FnvBuildHasher;
use std::collections::{HashMap, HashSet};

/// A set of cube coordinates
pub type CubeCoordSet = HashSet<CubeCoord, FnvBuildHasher>;
/// A map of cube coordinates to some `T`
pub type CubeCoordMap<T> = HashMap<CubeCoord, T, FnvBuildHasher>;
