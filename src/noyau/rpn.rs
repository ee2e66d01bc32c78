// src/noyau/rpn.rs
//
// Shunting-yard : suite de Tok (infixe) -> RPN (postfix)
//
// Règles:
// - Num / Const : sortie directe
// - Fonction    : empilée, sortie après la parenthèse fermante de son argument
// - Opérateur   : dépile tant que le sommet est un OPÉRATEUR
//                 de précédence plus forte, ou égale si le jeton courant est
//                 associatif à gauche ; puis empile
// - Ident       : identifiant inconnu => erreur de syntaxe
//
// NOTE:
// - Une fonction au sommet bloque le dépilement (elle reste collée à son argument).
// - `^` est associatif à droite : "2^3^2" => 2 3 2 ^ ^

use log::debug;

use super::erreurs::ErreurCalcul;
use super::jetons::{format_tokens, Tok};
use super::tables::{Assoc, Operateur};

/// Vrai si l'opérateur au sommet doit sortir avant d'empiler `courant`.
fn doit_depiler(sommet: Operateur, courant: Operateur) -> bool {
    let (p_top, p_tok) = (sommet.precedence(), courant.precedence());
    p_top > p_tok || (p_top == p_tok && courant.assoc() == Assoc::Gauche)
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Fonction(sin), LPar, Const(pi), Op(/), Num(2), RPar]
///   rpn:    [Const(pi), Num(2), Op(/), Fonction(sin)]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurCalcul> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    for tok in tokens {
        match tok {
            Tok::Num(_) | Tok::Const(_) => out.push(tok.clone()),

            Tok::Fonction(_) | Tok::LPar => ops.push(tok.clone()),

            Tok::Op(courant) => {
                while let Some(Tok::Op(sommet)) = ops.last() {
                    if !doit_depiler(*sommet, *courant) {
                        break;
                    }
                    if let Some(op) = ops.pop() {
                        out.push(op);
                    }
                }
                ops.push(tok.clone());
            }

            Tok::RPar => {
                // dépile jusqu’à '('
                loop {
                    match ops.pop() {
                        Some(Tok::LPar) => break,
                        Some(op) => out.push(op),
                        None => return Err(ErreurCalcul::Syntaxe("parenthèses non appariées".into())),
                    }
                }

                // si une fonction est au sommet, on la sort aussi
                if matches!(ops.last(), Some(Tok::Fonction(_))) {
                    if let Some(f) = ops.pop() {
                        out.push(f);
                    }
                }
            }

            Tok::Ident(name) => {
                return Err(ErreurCalcul::Syntaxe(format!("identifiant inconnu: {name}")));
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar | Tok::RPar) {
            return Err(ErreurCalcul::Syntaxe("parenthèses non fermées".into()));
        }
        out.push(op);
    }

    debug!("rpn: {}", format_tokens(&out));
    Ok(out)
}
