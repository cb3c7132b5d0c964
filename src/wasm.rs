//! Bindings for running a search from JavaScript.

use std::num::TryFromIntError;

use itertools::Itertools;
use js_sys::{Array, Uint32Array};
use wasm_bindgen::prelude::*;

use crate::builder::SearchBuilder;
use crate::location::Location;
use crate::solver::{Strategy, Tour};

/// A finished search, flattened for JavaScript.
#[wasm_bindgen]
pub struct WasmTour {
    found: bool,
    attempts: u64,
    size: usize,
    cells: Vec<u32>,
}

#[wasm_bindgen]
impl WasmTour {
    /// Whether a tour was found.
    #[wasm_bindgen(getter)]
    pub fn found(&self) -> bool {
        self.found
    }

    /// The attempt count, as a plain JavaScript number.
    #[wasm_bindgen(getter)]
    pub fn attempts(&self) -> f64 {
        self.attempts as f64
    }

    /// The side length of the grid.
    #[wasm_bindgen(getter)]
    pub fn size(&self) -> usize {
        self.size
    }

    /// The grid as an array of `Uint32Array` rows.
    pub fn rows(&self) -> Array {
        self.cells().chunks(self.size)
            .map(Uint32Array::from)
            .collect()
    }
}

impl WasmTour {
    pub(crate) fn cells(&self) -> &[u32] {
        &self.cells
    }
}

/// Fails only if some step number does not fit in a `u32`, i.e. on grids beyond 65535 cells a side.
impl TryFrom<Tour> for WasmTour {
    type Error = TryFromIntError;

    fn try_from(tour: Tour) -> Result<Self, Self::Error> {
        let cells = tour.grid().rows()
            .into_iter()
            .flatten()
            .map(u32::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            found: tour.found(),
            attempts: tour.attempts(),
            size: tour.grid().size(),
            cells,
        })
    }
}

/// Search for a knight's tour of a `size` by `size` grid from `(row, col)`.
///
/// Throws a string naming every problem with the arguments if they are invalid.
#[wasm_bindgen(js_name = solveTour)]
pub fn solve_tour(size: usize, row: usize, col: usize, warnsdorff: bool) -> Result<WasmTour, JsValue> {
    let mut builder = SearchBuilder::with_size(size);
    builder.start_at(Location(row, col))
        .strategy(if warnsdorff { Strategy::Warnsdorff } else { Strategy::Ordered });

    let search = builder.build()
        .map_err(|reasons| JsValue::from_str(&reasons.iter().join(", ")))?;

    WasmTour::try_from(search.solve()).map_err(|e| JsValue::from_str(&e.to_string()))
}
