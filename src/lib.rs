//! Calculatrice LaTeX — moteur d'expressions mathématiques.
//!
//! ```
//! use calculatrice_latex::{evaluate, evaluate_latex};
//!
//! assert_eq!(evaluate("2^3^2").unwrap(), 512.0);
//! assert_eq!(evaluate_latex(r"\frac{1}{2}").unwrap(), 0.5);
//! ```

pub mod noyau;

pub use noyau::{
    evaluate, evaluate_latex, evaluer_avec_demarche, Demarche, ErreurCalcul, GenreErreur, Mode,
};
