//! Dense day × shift × skill grid.

use std::ops::{Index, IndexMut};

use crate::error::{Result, RosterError};

/// A dense three-dimensional array indexed by `(day, shift, skill)`.
///
/// Used for staffing demand and realized coverage.
///
/// ```
/// use rosterforge_core::Grid3;
///
/// let mut grid = Grid3::new(7, 3, 2, 0u32);
/// grid[(1, 2, 0)] += 4;
/// assert_eq!(grid[(1, 2, 0)], 4);
/// assert_eq!(grid.dims(), (7, 3, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid3<T> {
    nb_days: usize,
    nb_shifts: usize,
    nb_skills: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid3<T> {
    /// Creates a grid with every cell set to `value`.
    pub fn new(nb_days: usize, nb_shifts: usize, nb_skills: usize, value: T) -> Self {
        Self {
            nb_days,
            nb_shifts,
            nb_skills,
            cells: vec![value; nb_days * nb_shifts * nb_skills],
        }
    }

    /// Builds a grid from nested vectors, checking that they are rectangular.
    pub fn from_nested(nested: Vec<Vec<Vec<T>>>) -> Result<Self> {
        let nb_days = nested.len();
        let nb_shifts = nested.first().map_or(0, Vec::len);
        let nb_skills = nested
            .first()
            .and_then(|d| d.first())
            .map_or(0, Vec::len);

        let mut cells = Vec::with_capacity(nb_days * nb_shifts * nb_skills);
        for per_day in nested {
            if per_day.len() != nb_shifts {
                return Err(RosterError::DimensionMismatch {
                    what: "shifts per day",
                    expected: nb_shifts,
                    found: per_day.len(),
                });
            }
            for per_shift in per_day {
                if per_shift.len() != nb_skills {
                    return Err(RosterError::DimensionMismatch {
                        what: "skills per shift",
                        expected: nb_skills,
                        found: per_shift.len(),
                    });
                }
                cells.extend(per_shift);
            }
        }

        Ok(Self {
            nb_days,
            nb_shifts,
            nb_skills,
            cells,
        })
    }

    /// Sets every cell to `value`.
    pub fn fill(&mut self, value: T) {
        self.cells.iter_mut().for_each(|c| *c = value.clone());
    }
}

impl<T> Grid3<T> {
    /// Returns `(nb_days, nb_shifts, nb_skills)`.
    pub fn dims(&self) -> (usize, usize, usize) {
        (self.nb_days, self.nb_shifts, self.nb_skills)
    }

    pub fn nb_days(&self) -> usize {
        self.nb_days
    }

    pub fn nb_shifts(&self) -> usize {
        self.nb_shifts
    }

    pub fn nb_skills(&self) -> usize {
        self.nb_skills
    }

    #[inline]
    fn offset(&self, day: usize, shift: usize, skill: usize) -> Option<usize> {
        if day < self.nb_days && shift < self.nb_shifts && skill < self.nb_skills {
            Some((day * self.nb_shifts + shift) * self.nb_skills + skill)
        } else {
            None
        }
    }

    /// Returns the cell, or `None` when any coordinate is out of range.
    pub fn get(&self, day: usize, shift: usize, skill: usize) -> Option<&T> {
        self.offset(day, shift, skill).map(|o| &self.cells[o])
    }

    pub fn get_mut(&mut self, day: usize, shift: usize, skill: usize) -> Option<&mut T> {
        self.offset(day, shift, skill).map(move |o| &mut self.cells[o])
    }

    /// Iterates over `((day, shift, skill), value)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize, usize), &T)> + '_ {
        let (nb_shifts, nb_skills) = (self.nb_shifts, self.nb_skills);
        self.cells.iter().enumerate().map(move |(i, v)| {
            let skill = i % nb_skills;
            let shift = (i / nb_skills) % nb_shifts;
            let day = i / (nb_skills * nb_shifts);
            ((day, shift, skill), v)
        })
    }
}

impl<T> Index<(usize, usize, usize)> for Grid3<T> {
    type Output = T;

    fn index(&self, (day, shift, skill): (usize, usize, usize)) -> &T {
        match self.offset(day, shift, skill) {
            Some(o) => &self.cells[o],
            None => panic!(
                "grid index ({}, {}, {}) out of bounds {:?}",
                day,
                shift,
                skill,
                self.dims()
            ),
        }
    }
}

impl<T> IndexMut<(usize, usize, usize)> for Grid3<T> {
    fn index_mut(&mut self, (day, shift, skill): (usize, usize, usize)) -> &mut T {
        let dims = self.dims();
        match self.offset(day, shift, skill) {
            Some(o) => &mut self.cells[o],
            None => panic!(
                "grid index ({}, {}, {}) out of bounds {:?}",
                day, shift, skill, dims
            ),
        }
    }
}
