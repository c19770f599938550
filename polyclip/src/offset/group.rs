use super::{EndType, JoinType};
use crate::path::{Path64, area, strip_duplicates};

/// Paths added together with the same join and end types.
#[derive(Debug, Clone)]
pub(super) struct Group {
    pub paths: Vec<Path64>,
    pub join_type: JoinType,
    pub end_type: EndType,
    /// Set for polygon groups whose lowest path is negatively oriented, delta is then negated for
    /// the whole group instead of reversing every path.
    pub is_reversed: bool,
    /// False for polygon groups without any points.
    pub has_lowest_path: bool,
}

/// Index of the path holding the lowest point (largest y, then smallest x).
fn lowest_path_idx(paths: &[Path64]) -> Option<usize> {
    let mut result = None;
    let mut bot_x = i64::MAX;
    let mut bot_y = i64::MIN;
    for (i, path) in paths.iter().enumerate() {
        for pt in path {
            if pt.y < bot_y || (pt.y == bot_y && pt.x >= bot_x) {
                continue;
            }
            result = Some(i);
            bot_x = pt.x;
            bot_y = pt.y;
        }
    }
    result
}

impl Group {
    pub fn new(paths: &[Path64], join_type: JoinType, end_type: EndType) -> Self {
        let is_joined = matches!(end_type, EndType::Polygon | EndType::Joined);
        let paths: Vec<Path64> = paths
            .iter()
            .map(|p| {
                let mut p = p.clone();
                strip_duplicates(&mut p, is_joined);
                p
            })
            .collect();

        let (is_reversed, has_lowest_path) = if end_type == EndType::Polygon {
            // the lowest path must be an outer path
            match lowest_path_idx(&paths) {
                Some(i) => (area(&paths[i]) < 0.0, true),
                None => (false, false),
            }
        } else {
            (false, true)
        };

        Self {
            paths,
            join_type,
            end_type,
            is_reversed,
            has_lowest_path,
        }
    }
}
