use polyclip::{FuzzyEq, Path, Point, RectD, area, bounds, core::traits::Coord};

/// Fuzzy compare rect values
pub fn rect_fuzzy_eq_eps(a: &RectD, b: &RectD, eps: f64) -> bool {
    a.left.fuzzy_eq_eps(b.left, eps)
        && a.top.fuzzy_eq_eps(b.top, eps)
        && a.right.fuzzy_eq_eps(b.right, eps)
        && a.bottom.fuzzy_eq_eps(b.bottom, eps)
}

/// Closed path perimeter.
pub fn path_length<T: Coord>(path: &[Point<T>]) -> f64 {
    if path.len() < 2 {
        return 0.0;
    }
    let mut prev = path[path.len() - 1].to_d();
    let mut length = 0.0;
    for pt in path {
        let pt = pt.to_d();
        length += (pt - prev).length();
        prev = pt;
    }
    length
}

/// Open path length (no closing segment).
pub fn open_path_length<T: Coord>(path: &[Point<T>]) -> f64 {
    path.windows(2)
        .map(|w| (w[1].to_d() - w[0].to_d()).length())
        .sum()
}

/// Holds a set of properties of a path for comparison in tests
#[derive(Debug, Copy, Clone)]
pub struct PathProperties {
    pub vertex_count: usize,
    pub area: f64,
    pub path_length: f64,
    pub extents: RectD,
}

impl PathProperties {
    // property comparer epsilon
    pub const PROP_CMP_EPS: f64 = 1e-4;

    pub fn new(
        vertex_count: usize,
        area: f64,
        path_length: f64,
        min_x: f64,
        min_y: f64,
        max_x: f64,
        max_y: f64,
    ) -> Self {
        Self {
            vertex_count,
            area,
            path_length,
            extents: RectD::new(min_x, min_y, max_x, max_y),
        }
    }

    /// Properties of a closed result path.
    pub fn from_path<T: Coord>(path: &Path<T>) -> Self {
        let b = bounds(path);
        Self {
            vertex_count: path.len(),
            area: area(path),
            path_length: path_length(path),
            extents: RectD::new(b.left.as_f64(), b.top.as_f64(), b.right.as_f64(), b.bottom.as_f64()),
        }
    }

    /// Properties of an open result path (zero area, no closing segment).
    pub fn from_open_path<T: Coord>(path: &Path<T>) -> Self {
        let b = bounds(path);
        Self {
            vertex_count: path.len(),
            area: 0.0,
            path_length: open_path_length(path),
            extents: RectD::new(b.left.as_f64(), b.top.as_f64(), b.right.as_f64(), b.bottom.as_f64()),
        }
    }

    pub fn fuzzy_eq_eps(&self, other: &Self, eps: f64) -> bool {
        if self.vertex_count != other.vertex_count {
            return false;
        }
        if !self.area.fuzzy_eq_eps(other.area, eps) {
            return false;
        }
        if !self.path_length.fuzzy_eq_eps(other.path_length, eps) {
            return false;
        }
        if !rect_fuzzy_eq_eps(&self.extents, &other.extents, eps) {
            return false;
        }
        true
    }
}

pub fn create_property_set<'a, T, I>(paths: I) -> Vec<PathProperties>
where
    T: Coord + 'a,
    I: IntoIterator<Item = &'a Path<T>>,
{
    paths.into_iter().map(PathProperties::from_path).collect()
}

pub fn create_open_property_set<'a, T, I>(paths: I) -> Vec<PathProperties>
where
    T: Coord + 'a,
    I: IntoIterator<Item = &'a Path<T>>,
{
    paths
        .into_iter()
        .map(PathProperties::from_open_path)
        .collect()
}

pub fn property_sets_match_eps(
    result_set: &[PathProperties],
    expected_set: &[PathProperties],
    eps: f64,
) -> bool {
    let mut sets_match = true;
    if result_set.len() != expected_set.len() {
        sets_match = false;
    } else {
        // using simple N^2 comparisons to compare property sets (sets are always relatively small,
        // e.g. N < 10)
        for properties_expected in expected_set {
            let match_count = result_set
                .iter()
                .filter(|properties_result| properties_expected.fuzzy_eq_eps(properties_result, eps))
                .count();

            if match_count != 1 {
                sets_match = false;
                break;
            }
        }
    }

    if !sets_match {
        eprintln!("result:\n{:?}", result_set);
        eprintln!("expected:\n{:?}", expected_set);
    }

    sets_match
}

pub fn property_sets_match(result_set: &[PathProperties], expected_set: &[PathProperties]) -> bool {
    property_sets_match_eps(result_set, expected_set, PathProperties::PROP_CMP_EPS)
}
