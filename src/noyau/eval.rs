//! Noyau — évaluation (pipeline réel)
//!
//! (latex ->) texte canonique -> jetons -> RPN -> pile de f64
//!
//! Chaque appel possède ses jetons, ses piles et ses tampons : aucune donnée
//! partagée entre deux appels, hormis les tables immuables.

use log::{debug, trace};
use num_traits::Zero;

use super::erreurs::ErreurCalcul;
use super::jetons::{format_tokens, tokenize, Tok};
use super::latex::to_canonical;
use super::rpn::to_rpn;
use super::tables::{Fonction, Operateur};

/// Notation de l'entrée.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Texte déjà canonique (`sqrt(16)/2`).
    Ascii,
    /// LaTeX partiel (`\frac{1}{2}+\sqrt{16}`), réécrit avant évaluation.
    #[default]
    Latex,
}

/// Trace d'une évaluation réussie (panneau “Démarche”).
#[derive(Default, Clone, Debug, PartialEq)]
pub struct Demarche {
    pub canonique: String,
    pub jetons: String,
    pub rpn: String,
}

/// Évalue un texte déjà canonique.
pub fn evaluate(expression: &str) -> Result<f64, ErreurCalcul> {
    evaluer_avec_demarche(expression, Mode::Ascii).map(|(v, _)| v)
}

/// Réécrit l'entrée LaTeX puis l'évalue.
pub fn evaluate_latex(texte: &str) -> Result<f64, ErreurCalcul> {
    evaluer_avec_demarche(texte, Mode::Latex).map(|(v, _)| v)
}

/// API complète : valeur + démarche (texte canonique, jetons, RPN).
pub fn evaluer_avec_demarche(texte: &str, mode: Mode) -> Result<(f64, Demarche), ErreurCalcul> {
    // 0) LaTeX -> canonique
    let canonique = match mode {
        Mode::Ascii => texte.to_string(),
        Mode::Latex => to_canonical(texte),
    };

    // 1) Jetons
    let jetons = tokenize(&canonique)?;
    debug!("jetons: {}", format_tokens(&jetons));

    // 2) RPN
    let rpn = to_rpn(&jetons)?;

    // 3) Pile
    let valeur = evaluer_rpn(&rpn)?;
    debug!("{canonique:?} = {valeur}");

    let d = Demarche {
        canonique,
        jetons: format_tokens(&jetons),
        rpn: format_tokens(&rpn),
    };
    Ok((valeur, d))
}

/// Exécute une suite RPN sur une pile de f64.
pub fn evaluer_rpn(rpn: &[Tok]) -> Result<f64, ErreurCalcul> {
    let mut pile: Vec<f64> = Vec::with_capacity(rpn.len());

    for tok in rpn {
        match tok {
            Tok::Num(v) => pile.push(*v),
            Tok::Const(k) => pile.push(k.valeur()),

            Tok::Op(op) => {
                // droite d'abord : l'ordre compte pour '-' et '/'
                let (Some(b), Some(a)) = (pile.pop(), pile.pop()) else {
                    return Err(ErreurCalcul::Arite(format!(
                        "l'opérateur '{}' attend deux opérandes",
                        op.symbole()
                    )));
                };
                let r = applique_operateur(*op, a, b)?;
                trace!("{a} {} {b} = {r}", op.symbole());
                pile.push(r);
            }

            Tok::Fonction(f) => {
                let Some(x) = pile.pop() else {
                    return Err(ErreurCalcul::Arite(format!(
                        "la fonction '{}' attend un argument",
                        f.nom()
                    )));
                };
                let r = applique_fonction(*f, x)?;
                trace!("{}({x}) = {r}", f.nom());
                pile.push(r);
            }

            Tok::Ident(_) | Tok::LPar | Tok::RPar => {
                return Err(ErreurCalcul::Syntaxe(format!(
                    "jeton inattendu en RPN: {}",
                    format_tokens(std::slice::from_ref(tok))
                )));
            }
        }
    }

    match pile.as_slice() {
        [v] => Ok(*v),
        _ => Err(ErreurCalcul::Structure {
            restants: pile.len(),
        }),
    }
}

fn applique_operateur(op: Operateur, a: f64, b: f64) -> Result<f64, ErreurCalcul> {
    Ok(match op {
        Operateur::Plus => a + b,
        Operateur::Moins => a - b,
        Operateur::Fois => a * b,
        Operateur::Divise => {
            if b.is_zero() {
                return Err(ErreurCalcul::DivisionParZero);
            }
            a / b
        }
        Operateur::Puissance => a.powf(b),
    })
}

fn applique_fonction(f: Fonction, x: f64) -> Result<f64, ErreurCalcul> {
    if f == Fonction::Sqrt && x < 0.0 {
        return Err(ErreurCalcul::Domaine(format!("racine carrée d'un négatif ({x})")));
    }
    Ok(f.applique(x))
}
