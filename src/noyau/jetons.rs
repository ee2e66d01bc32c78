// src/noyau/jetons.rs

use super::erreurs::ErreurCalcul;
use super::tables::{Constante, Fonction, Operateur};

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),
    Const(Constante),
    Op(Operateur),
    Fonction(Fonction),

    // Identifiant qui n'est ni une fonction ni une constante.
    // NOTE: accepté par le lexeur, rejeté par le shunting-yard.
    Ident(String),

    LPar,
    RPar,
}

/// Genre d'un jeton (sert à lever l'ambiguïté du signe unaire).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Genre {
    Nombre,
    Operateur,
    Fonction,
    ParG,
    ParD,
    Inconnu,
}

impl Tok {
    pub fn genre(&self) -> Genre {
        match self {
            Tok::Num(_) | Tok::Const(_) => Genre::Nombre,
            Tok::Op(_) => Genre::Operateur,
            Tok::Fonction(_) => Genre::Fonction,
            Tok::Ident(_) => Genre::Inconnu,
            Tok::LPar => Genre::ParG,
            Tok::RPar => Genre::ParD,
        }
    }
}

fn est_chiffre(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

/// Tokenize une chaîne canonique en jetons.
/// Supporte:
/// - nombres décimaux (ex: 12, 3.5, .5)
/// - signe `+`/`-` collé au nombre qui suit, seulement en début d'entrée,
///   après un opérateur ou après `(` (ex: "-3+4", "3*-2")
/// - opérateurs + - * / ^
/// - parenthèses ( )
/// - identifiants [a-zA-Z]+ : fonction, constante, ou inconnu
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurCalcul> {
    let mut out: Vec<Tok> = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    // Seul état du lexeur : le genre du dernier jeton émis.
    let mut prev: Option<Genre> = None;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Nombre, éventuellement signé
        let signe_unaire = (c == '+' || c == '-')
            && matches!(prev, None | Some(Genre::Operateur) | Some(Genre::ParG))
            && chars.get(i + 1).copied().is_some_and(est_chiffre);

        if est_chiffre(c) || signe_unaire {
            let start = i;
            if signe_unaire {
                i += 1;
            }
            while i < chars.len() && est_chiffre(chars[i]) {
                i += 1;
            }
            let texte: String = chars[start..i].iter().collect();
            let v = match texte.parse::<f64>() {
                Ok(v) => v,
                Err(_) => {
                    return Err(ErreurCalcul::NombreInvalide {
                        texte,
                        position: start,
                    })
                }
            };
            out.push(Tok::Num(v));
            prev = Some(Genre::Nombre);
            continue;
        }

        // Identifiants : fonction, constante ou inconnu
        if c.is_ascii_alphabetic() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_alphabetic() {
                i += 1;
            }
            let nom: String = chars[start..i].iter().collect();

            let tok = if let Some(f) = Fonction::from_nom(&nom) {
                Tok::Fonction(f)
            } else if let Some(k) = Constante::from_nom(&nom) {
                Tok::Const(k)
            } else {
                Tok::Ident(nom)
            };
            prev = Some(tok.genre());
            out.push(tok);
            continue;
        }

        let tok = match c {
            '(' => Tok::LPar,
            ')' => Tok::RPar,
            _ => match Operateur::from_char(c) {
                Some(op) => Tok::Op(op),
                None => {
                    return Err(ErreurCalcul::Lexicale {
                        caractere: c,
                        position: i,
                    })
                }
            },
        };
        prev = Some(tok.genre());
        out.push(tok);
        i += 1;
    }

    Ok(out)
}

/// Format utilitaire (debug/“démarche”) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::with_capacity(tokens.len());
    for t in tokens {
        let s = match t {
            Tok::Num(v) => format!("{v}"),
            Tok::Const(k) => k.nom().to_string(),
            Tok::Op(op) => op.symbole().to_string(),
            Tok::Fonction(f) => f.nom().to_string(),
            Tok::Ident(name) => name.clone(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
