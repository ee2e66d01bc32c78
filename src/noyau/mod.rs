//! Noyau de calcul LaTeX/ASCII -> f64
//!
//! Organisation interne :
//! - tables.rs   : opérateurs, fonctions, constantes (immuables)
//! - erreurs.rs  : erreurs typées du pipeline
//! - latex.rs    : pré-traitement LaTeX -> texte canonique
//! - jetons.rs   : tokenisation
//! - rpn.rs      : shunting-yard (infixe -> postfix)
//! - eval.rs     : pile RPN + pipeline complet
//! - format.rs   : affichage d'un résultat flottant

pub mod erreurs;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod latex;
pub mod rpn;
pub mod tables;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use erreurs::{ErreurCalcul, GenreErreur};
pub use eval::{evaluate, evaluate_latex, evaluer_avec_demarche, Demarche, Mode};
