//! Assembly of dense symmetric Galerkin matrices.

use log::{ debug, trace };
use ndarray as nd;
use rayon::prelude::*;
use crate::{
    bspline::Basis,
    integrate::{ BilinearForm, IntegralResult },
};

/// Build the matrix `M[i, j] = ∫ bᵢ Op[bⱼ] dx` for every pair of functions in
/// `basis`.
///
/// Only `i ≤ j` pairs with overlapping support are integrated; the lower
/// triangle is a copy of the upper and all other entries are zero, so the
/// result is exactly symmetric. Rows are integrated in parallel.
///
/// Returns [`IntegralError::DerivativeOrder`][crate::error::IntegralError]
/// if the form cannot be applied to a basis of this degree.
pub fn assemble(form: &BilinearForm, basis: &Basis)
    -> IntegralResult<nd::Array2<f64>>
{
    form.check_degree(basis.degree())?;
    let n = basis.len();
    let band = basis.degree() + 1;
    let rows: Vec<Vec<f64>>
        = (0..n).into_par_iter()
        .map(|i| {
            let hi = (i + band).min(n);
            trace!("assembling row {} (columns {}..{})", i, i, hi);
            (i..hi)
                .map(|j| form.integrate_unchecked(&basis[i], &basis[j]))
                .collect()
        })
        .collect();
    let mut mat: nd::Array2<f64> = nd::Array2::zeros((n, n));
    let mut pairs: usize = 0;
    for (i, row) in rows.into_iter().enumerate() {
        for (j, mij) in (i..).zip(row) {
            mat[[i, j]] = mij;
            mat[[j, i]] = mij;
            pairs += 1;
        }
    }
    debug!("assembled {}x{} matrix from {} integrated pairs", n, n, pairs);
    Ok(mat)
}
