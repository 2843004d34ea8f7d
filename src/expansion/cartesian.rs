use super::flatten::FlatTable;
use crate::error::ExpansionError;
use crate::run::RunAssignment;
use crate::strategy::ParameterDomain;

/// Expands a flat table into the full Cartesian product of its domains.
///
/// Runs come out in mixed-radix order: the first column is the slowest
/// changing digit and the last column the fastest. This is the same order as
/// a depth-first walk that fixes the first unfixed key and recurses.
///
/// An empty table has exactly one run (the empty assignment). A table with
/// any empty domain has none.
pub struct CartesianExpander<'a> {
    table: &'a FlatTable,
    limit: Option<usize>,
}

impl<'a> CartesianExpander<'a> {
    pub fn new(table: &'a FlatTable) -> Self {
        Self { table, limit: None }
    }

    /// Refuse to expand tables with more than `limit` runs.
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// Number of runs the table expands to, checked against the limit.
    pub fn run_count(&self) -> Result<usize, ExpansionError> {
        let domains = self.table.columns().iter().map(|(_, domain)| domain);
        let count = product_of_sizes(domains)?;
        match self.limit {
            Some(limit) if count > limit => Err(ExpansionError::TooManyRuns { count, limit }),
            _ => Ok(count),
        }
    }

    /// Lazily yields every run without materializing the whole product.
    pub fn iter(&self) -> Result<RunIter<'a>, ExpansionError> {
        let remaining = self.run_count()?;
        Ok(RunIter {
            columns: self.table.columns(),
            digits: vec![0; self.table.len()],
            remaining,
        })
    }

    pub fn expand(&self) -> Result<Vec<RunAssignment>, ExpansionError> {
        Ok(self.iter()?.collect())
    }
}

fn product_of_sizes<'d>(
    mut domains: impl Iterator<Item = &'d ParameterDomain> + Clone,
) -> Result<usize, ExpansionError> {
    // An empty domain wins over an overflowing product.
    if domains.clone().any(ParameterDomain::is_empty) {
        return Ok(0);
    }
    domains.try_fold(1usize, |acc, domain| {
        acc.checked_mul(domain.len()).ok_or(ExpansionError::Overflow)
    })
}

/// Mixed-radix counter over the domain sizes of a flat table.
pub struct RunIter<'a> {
    columns: &'a [(String, ParameterDomain)],
    digits: Vec<usize>,
    remaining: usize,
}

impl RunIter<'_> {
    fn current(&self) -> RunAssignment {
        self.columns
            .iter()
            .zip(&self.digits)
            .map(|((key, domain), &digit)| (key.clone(), domain.values()[digit].clone()))
            .collect()
    }

    fn advance(&mut self) {
        for (digit, (_, domain)) in self.digits.iter_mut().zip(self.columns).rev() {
            *digit += 1;
            if *digit < domain.len() {
                return;
            }
            *digit = 0;
        }
    }
}

impl Iterator for RunIter<'_> {
    type Item = RunAssignment;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let run = self.current();
        self.remaining -= 1;
        if self.remaining > 0 {
            self.advance();
        }
        Some(run)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for RunIter<'_> {}
