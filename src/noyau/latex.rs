// src/noyau/latex.rs
//
// Pré-traitement LaTeX -> texte canonique ASCII.
//
// Règles, appliquées dans cet ordre, chacune sur toute la chaîne :
//   1) \frac{A}{B}        -> (A)/(B)
//   2) \sqrt{A}           -> sqrt(A)
//   3) \fn{A} ou \fn A    -> fn(A)      (fn parmi les dix fonctions)
//   4) \left( \right)     -> ( )
//   5) \pi                -> pi         (frontière de mot)
//   6) \commande restante -> supprimée
//
// LIMITE (conservée) : un seul niveau d'accolades.
// `\frac{\frac{1}{2}}{3}` n'est PAS réécrit correctement.
//
// Idempotent : la sortie ne contient plus aucun `\`, or chaque règle en exige un.

use std::sync::LazyLock;

use log::debug;
use regex::{Captures, Regex};

static RE_FRAC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\frac\s*\{([^{}]+)\}\s*\{([^{}]+)\}").expect("regex frac"));

static RE_SQRT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\sqrt\s*\{([^{}]+)\}").expect("regex sqrt"));

// Argument nu : suite gloutonne d'identifiants, chiffres, opérateurs, parenthèses.
static RE_FONCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\\(sin|cos|tan|asin|acos|atan|sqrt|log|ln|abs)\s*(?:\{([^{}]+)\}|([a-zA-Z0-9.+\-*/^()]+))",
    )
    .expect("regex fonction")
});

static RE_LEFT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\left\s*\(").expect("regex left"));

static RE_RIGHT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\right\s*\)").expect("regex right"));

static RE_PI: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\\pi\b").expect("regex pi"));

static RE_COMMANDE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\[a-zA-Z]+").expect("regex commande"));

/// Réécrit une entrée LaTeX en texte canonique (grammaire ASCII du tokenizer).
pub fn to_canonical(latex: &str) -> String {
    let s = RE_FRAC.replace_all(latex, "(${1})/(${2})");
    let s = RE_SQRT.replace_all(&s, "sqrt(${1})");
    let s = RE_FONCTION.replace_all(&s, |caps: &Captures| {
        let arg = caps
            .get(2)
            .or_else(|| caps.get(3))
            .map_or("", |m| m.as_str());
        format!("{}({})", &caps[1], arg)
    });
    let s = RE_LEFT.replace_all(&s, "(");
    let s = RE_RIGHT.replace_all(&s, ")");
    let s = RE_PI.replace_all(&s, "pi");
    let s = RE_COMMANDE.replace_all(&s, "");

    let out = s.into_owned();
    debug!("latex {latex:?} -> canonique {out:?}");
    out
}
