use polyclip::Path64;

/// Cycles all the point index positions forward by `n`. E.g. index 0 becomes 1, last index becomes
/// 0, etc.
pub fn cycle_start_index_forward(input: &Path64, n: usize) -> Path64 {
    assert!(n > 0, "cycling forward by 0 just returns the same path");
    assert!(
        n < input.len(),
        "cycling forward by more than the path length is unnecessary"
    );
    input.iter().cycle().skip(n).take(input.len()).copied().collect()
}

pub fn inverted(input: &Path64) -> Path64 {
    input.iter().rev().copied().collect()
}

#[derive(Debug, Clone, Copy)]
pub struct ModifiedPathState {
    pub inverted_direction: bool,
    pub cycle_position: usize,
}

impl ModifiedPathState {
    pub fn new(inverted_direction: bool, cycle_position: usize) -> Self {
        Self {
            inverted_direction,
            cycle_position,
        }
    }
}

/// Every start index rotation of a closed path, optionally also with the direction inverted.
/// Boolean results with non orientation dependent fill rules must not depend on either.
#[derive(Debug, Clone)]
pub struct ModifiedPathSet<'a> {
    pub input: &'a Path64,
    pub invert_direction: bool,
}

impl<'a> ModifiedPathSet<'a> {
    pub fn new(input: &'a Path64, invert_direction: bool) -> Self {
        Self {
            input,
            invert_direction,
        }
    }

    pub fn accept_closure<F>(&self, visitor: &mut F)
    where
        F: FnMut(Path64, ModifiedPathState),
    {
        visitor(self.input.clone(), ModifiedPathState::new(false, 0));
        for i in 1..self.input.len() {
            visitor(
                cycle_start_index_forward(self.input, i),
                ModifiedPathState::new(false, i),
            );
        }

        if self.invert_direction {
            let inv = inverted(self.input);
            visitor(inv.clone(), ModifiedPathState::new(true, 0));
            for i in 1..inv.len() {
                visitor(
                    cycle_start_index_forward(&inv, i),
                    ModifiedPathState::new(true, i),
                );
            }
        }
    }
}
